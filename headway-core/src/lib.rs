pub mod conf;
pub mod ctx;
pub mod logging;
pub mod proxy;
pub mod server;
pub mod transform;
