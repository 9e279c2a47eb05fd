use crate::domain::model::HouseDocument;
use crate::utils::error::Result;
use csv::StringRecord;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

pub trait Pipeline {
    /// Reads the input and returns its data rows once the header has been checked.
    fn extract(&self) -> Result<Vec<StringRecord>>;
    fn transform(&self, rows: Vec<StringRecord>) -> Result<HouseDocument>;
    /// Writes the document and returns where it went.
    fn load(&self, document: HouseDocument) -> Result<String>;
}
