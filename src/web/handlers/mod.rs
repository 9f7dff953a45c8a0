pub mod system_handlers;
pub mod webhook_handlers;

pub use system_handlers::*;
pub use webhook_handlers::*;
