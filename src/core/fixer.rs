use crate::core::normalizer::normalize;
use crate::core::sift3::closest_match;
use crate::domain::model::CorrectionResult;
use crate::domain::ports::ConfigProvider;

/// Reference domains used when the caller supplies none.
pub const DEFAULT_DOMAINS: [&str; 6] = [
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "icloud.com",
    "aol.com",
];

/// Largest SIFT3 distance at which a reference domain replaces the input's.
pub const ACCEPTANCE_THRESHOLD: f64 = 2.5;

/// Corrects `email` against [`DEFAULT_DOMAINS`].
pub fn fix(email: &str) -> CorrectionResult {
    fix_with_domains(email, &DEFAULT_DOMAINS)
}

/// Corrects `email` against a caller-supplied reference list.
///
/// An empty list disables both suffix repair and nearest-domain correction.
pub fn fix_with_domains<S: AsRef<str>>(email: &str, domains: &[S]) -> CorrectionResult {
    if email.is_empty() {
        return CorrectionResult::unchanged(email);
    }

    let normalized = normalize(email, domains);

    match normalized.value.split_once('@') {
        Some((local, domain)) if !domain.is_empty() => match nearest_domain(domain, domains) {
            Some(better) => CorrectionResult::from_outcome(email, format!("{local}@{better}"), true),
            None => CorrectionResult::from_outcome(email, normalized.value.clone(), normalized.changed),
        },
        _ => CorrectionResult::from_outcome(email, normalized.value.clone(), normalized.changed),
    }
}

/// The reference domain that should replace `domain`, if any.
fn nearest_domain<'a, S: AsRef<str>>(domain: &str, domains: &'a [S]) -> Option<&'a str> {
    let domain = domain.to_lowercase();
    let best = closest_match(&domain, domains);
    let candidate = best.matched?;

    if best.distance > ACCEPTANCE_THRESHOLD {
        tracing::trace!(
            domain = %domain,
            nearest = candidate,
            distance = best.distance,
            "nearest domain rejected"
        );
        return None;
    }
    if candidate.to_lowercase() == domain {
        return None;
    }

    tracing::debug!(
        from = %domain,
        to = candidate,
        distance = best.distance,
        "domain corrected"
    );
    Some(candidate)
}

/// Reusable fixer bound to one reference domain list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailTypoFixer {
    domains: Vec<String>,
}

impl EmailTypoFixer {
    pub fn new(domains: Vec<String>) -> Self {
        Self { domains }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.domains())
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn fix(&self, email: &str) -> CorrectionResult {
        fix_with_domains(email, &self.domains)
    }
}

impl Default for EmailTypoFixer {
    fn default() -> Self {
        Self::new(DEFAULT_DOMAINS.iter().map(|d| d.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedDomains(Vec<String>);

    impl ConfigProvider for FixedDomains {
        fn domains(&self) -> Vec<String> {
            self.0.clone()
        }
    }

    #[test]
    fn test_empty_input() {
        let result = fix("");
        assert_eq!(result, CorrectionResult::unchanged(""));
    }

    #[test]
    fn test_domain_distance_correction() {
        let result = fix("user@gmial.com");
        assert!(result.has_correction);
        assert_eq!(result.suggested.as_deref(), Some("user@gmail.com"));
    }

    #[test]
    fn test_distance_above_threshold_is_left_alone() {
        let result = fix("user@domain.com");
        assert!(!result.has_correction);
        assert_eq!(result.suggested, None);
    }

    #[test]
    fn test_empty_domain_skips_matching() {
        let result = fix("user@$");
        assert!(result.has_correction);
        assert_eq!(result.suggested.as_deref(), Some("user@"));

        // A bare trailing '@' is itself dropped as a trailing symbol.
        assert_eq!(fix("user@").suggested.as_deref(), Some("user"));
    }

    #[test]
    fn test_empty_reference_list_disables_matching() {
        let none: [&str; 0] = [];
        let result = fix_with_domains("user@gmial.com", &none);
        assert!(!result.has_correction);
    }

    #[test]
    fn test_reference_casing_is_used_verbatim() {
        let result = fix_with_domains("user@gmail.con", &["Gmail.com"]);
        assert_eq!(result.suggested.as_deref(), Some("user@Gmail.com"));
    }

    #[test]
    fn test_fixer_from_config() {
        let fixer = EmailTypoFixer::from_config(&FixedDomains(vec!["corp.example".to_string()]));
        assert_eq!(fixer.domains().to_vec(), vec!["corp.example".to_string()]);

        let result = fixer.fix("jane@crop.example");
        assert_eq!(result.suggested.as_deref(), Some("jane@corp.example"));

        // Defaults are not consulted by a configured fixer.
        assert!(!fixer.fix("jane@gmial.com").has_correction);
    }

    #[test]
    fn test_default_fixer_matches_free_function() {
        let fixer = EmailTypoFixer::default();
        for input in ["user@gmial.com", "usergmail.com", "notanemail", ""] {
            assert_eq!(fixer.fix(input), fix(input));
        }
    }
}
