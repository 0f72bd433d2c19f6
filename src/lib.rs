pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{storage::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use core::engine::{AnalysisEngine, AnalysisRun};
pub use core::pipeline::AnalysisPipeline;
pub use utils::error::{AnalysisError, Result};
