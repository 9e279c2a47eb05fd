pub mod etl;
pub mod json;
pub mod pipeline;
pub mod schema;

pub use crate::domain::model::{House, HouseDocument};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
