mod reload;
mod runtime;
mod setup;

pub use reload::ReloadHandle;
pub use runtime::{RuntimeState, build_runtime_state, reload_runtime_state};
pub use setup::run;
