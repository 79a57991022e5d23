use clap::{Parser, Subcommand};
use headway_core::conf::load_config;
use headway_core::logging::init_logging;
use headway_core::server;
use std::path::PathBuf;

const DEFAULT_CONFIG_PATH: &str = "config/headway.toml";

#[derive(Parser, Debug)]
#[command(
    name = "headway",
    version,
    about = "Headway: pingora-based forwarding proxy with an outbound header-transform pipeline"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the Headway proxy (default)
    Run {
        /// Path to the Headway config file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Validate a config file and exit
    Check {
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Command::Run {
        config: PathBuf::from(DEFAULT_CONFIG_PATH),
    });

    match command {
        Command::Check { config } => match load_config(&config) {
            Ok(cfg) => {
                println!("✔ Config loaded successfully");
                println!("✔ listen {}", cfg.server.listen);
                println!("✔ upstream {}", cfg.upstream.addr);
                println!(
                    "✔ {} header directives",
                    cfg.transforms.set_header.len() + cfg.transforms.remove_header.len()
                );
                println!(
                    "✔ host policy: {}",
                    if cfg.transforms.use_original_host {
                        "use original"
                    } else {
                        "suppress original"
                    }
                );
            }
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        },

        Command::Run { config } => {
            init_logging();

            let cfg = load_config(&config).expect("Failed to load Headway config");

            server::run(config, cfg).expect("Failed to start Headway server");
        }
    }
}
