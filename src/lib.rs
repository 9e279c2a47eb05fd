pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{etl::EtlEngine, pipeline::CsvToJsonPipeline};
pub use domain::model::{House, HouseDocument};
pub use utils::error::{EtlError, Result};
