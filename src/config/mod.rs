pub mod genetics;
pub mod manager;
pub mod traits;

pub use genetics::GeneticsConfig;
pub use manager::{AppConfig, ConfigManager};
