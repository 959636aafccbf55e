pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use core::fixer::{fix, fix_with_domains, EmailTypoFixer, ACCEPTANCE_THRESHOLD, DEFAULT_DOMAINS};
pub use core::normalizer::{normalize, Normalized};
pub use core::sift3::{closest_match, distance, MAX_OFFSET};
pub use domain::model::{ClosestMatch, CorrectionResult};
pub use domain::ports::ConfigProvider;
pub use utils::error::{FixerError, Result};
