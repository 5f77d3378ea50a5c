pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{LocalStorage, MemoryStorage};
pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::{
    engine::AdapterEngine,
    handler::{EnterpriseHandler, Handler},
};
pub use domain::model::{AdapterRequest, AdapterResponse, HandleMode, RunSummary};
pub use utils::error::{AdapterError, Result};
