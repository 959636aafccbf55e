use serde::{Deserialize, Serialize};

/// Outcome of a single `fix` call.
///
/// `suggested` is present exactly when `has_correction` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionResult {
    pub original: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested: Option<String>,
    pub has_correction: bool,
}

impl CorrectionResult {
    pub fn unchanged(original: &str) -> Self {
        Self {
            original: original.to_string(),
            suggested: None,
            has_correction: false,
        }
    }

    pub fn from_outcome(original: &str, cleaned: String, changed: bool) -> Self {
        Self {
            original: original.to_string(),
            suggested: changed.then_some(cleaned),
            has_correction: changed,
        }
    }

    /// The suggestion if there is one, otherwise the input as received.
    pub fn best(&self) -> &str {
        self.suggested.as_deref().unwrap_or(&self.original)
    }
}

/// Nearest reference entry found by `closest_match`.
///
/// `matched` is `None` only for an empty candidate list, in which case
/// `distance` is `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestMatch<'a> {
    pub matched: Option<&'a str>,
    pub distance: f64,
}

impl ClosestMatch<'_> {
    pub fn none() -> Self {
        Self {
            matched: None,
            distance: f64::INFINITY,
        }
    }
}
