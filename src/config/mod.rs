#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::fixer::DEFAULT_DOMAINS;

/// No explicit list means the defaults; `extend` appends the explicit list
/// after them.
pub fn resolve_domains(explicit: &[String], extend: bool) -> Vec<String> {
    let defaults = DEFAULT_DOMAINS.iter().map(|d| d.to_string());
    if explicit.is_empty() {
        defaults.collect()
    } else if extend {
        defaults.chain(explicit.iter().cloned()).collect()
    } else {
        explicit.to_vec()
    }
}
