use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "housing-etl")]
#[command(about = "Convert a housing CSV file into a JSON document")]
pub struct CliConfig {
    /// CSV file with header value,income,age,rooms,bedrooms,pop,hh
    #[arg(value_name = "INPUT")]
    pub input_path: String,

    /// Destination of the JSON document
    #[arg(value_name = "OUTPUT")]
    pub output_path: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_path("output_path", &self.output_path)
    }
}
