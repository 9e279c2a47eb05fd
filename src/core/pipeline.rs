use crate::core::json::to_json;
use crate::core::schema::{assemble, validate_header};
use crate::core::{ConfigProvider, HouseDocument, Pipeline, Storage};
use crate::domain::model::EXPECTED_HEADERS;
use crate::utils::error::{EtlError, Result};
use csv::{ReaderBuilder, StringRecord};

pub struct CsvToJsonPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CsvToJsonPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CsvToJsonPipeline<S, C> {
    fn extract(&self) -> Result<Vec<StringRecord>> {
        let input_path = self.config.input_path();
        tracing::debug!("Reading CSV from: {}", input_path);
        let data = self.storage.read_file(input_path)?;

        // Field counts are checked per row by the parser so a short row
        // surfaces as a row error rather than a reader error.
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data.as_slice());

        let mut records = reader.records();
        let header = match records.next() {
            Some(header) => header?,
            None => {
                return Err(EtlError::Schema {
                    expected: EXPECTED_HEADERS.iter().map(|h| h.to_string()).collect(),
                    found: Vec::new(),
                })
            }
        };
        validate_header(&header)?;
        tracing::debug!("Header validated: {}", EXPECTED_HEADERS.join(","));

        let rows = records.collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn transform(&self, rows: Vec<StringRecord>) -> Result<HouseDocument> {
        assemble(&rows)
    }

    fn load(&self, document: HouseDocument) -> Result<String> {
        let output_path = self.config.output_path();

        let json = to_json(&document)?;
        tracing::debug!("Writing JSON ({} bytes) to: {}", json.len(), output_path);
        self.storage.write_file(output_path, &json)?;

        Ok(output_path.to_string())
    }
}
