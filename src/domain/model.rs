use serde::{Deserialize, Serialize};

/// Column names the input header must carry, in order.
pub const EXPECTED_HEADERS: [&str; 7] = [
    "value", "income", "age", "rooms", "bedrooms", "pop", "hh",
];

/// One housing row from the input file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub value: i64,
    pub income: f64,
    pub age: i64,
    pub rooms: i64,
    pub bedrooms: i64,
    #[serde(rename = "pop")]
    pub population: i64,
    #[serde(rename = "hh")]
    pub households: i64,
}

/// Top-level output object. `houses` keeps input row order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HouseDocument {
    pub houses: Vec<House>,
}

impl HouseDocument {
    pub fn new(houses: Vec<House>) -> Self {
        Self { houses }
    }

    pub fn len(&self) -> usize {
        self.houses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.houses.is_empty()
    }
}
