// Domain layer: core models and ports (interfaces). No external dependencies beyond serde/csv.

pub mod model;
pub mod ports;
