// Handler modules
pub mod analysis;
pub mod config;
pub mod pods;
pub mod utils;

// Re-export all handler functions
pub use analysis::handle_analysis;
pub use config::handle_config;
pub use pods::handle_pods;
pub use utils::{read_payload, resolve_format};
