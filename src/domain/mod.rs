// Plain data model and ports. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
