use crate::domain::model::HouseDocument;
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// One space per nesting level.
pub const INDENT: &[u8] = b" ";

/// Renders the document as indented JSON without a trailing newline.
pub fn to_json(document: &HouseDocument) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer)?;
    Ok(buffer)
}
