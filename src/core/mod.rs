pub mod batch;
pub mod fixer;
pub mod normalizer;
pub mod sift3;

pub use crate::domain::model::{ClosestMatch, CorrectionResult};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
