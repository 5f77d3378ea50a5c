pub mod engine;
pub mod handler;

pub use crate::domain::model::{AdapterRequest, AdapterResponse, HandleMode, RunSummary};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
