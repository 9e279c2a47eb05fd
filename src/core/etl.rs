use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in order; the first failing stage ends the run.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting conversion...");

        let rows = self.pipeline.extract()?;
        tracing::info!("Extracted {} rows", rows.len());

        let document = self.pipeline.transform(rows)?;
        tracing::info!("Transformed {} records", document.len());

        let output_path = self.pipeline.load(document)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
