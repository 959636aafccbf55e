//! Ordered syntactic repair rules for raw address strings.
//!
//! Each rule is a pure `&str -> String` step. Rules run in a fixed order and
//! the result records whether any of them changed the string.

use regex::Regex;
use std::sync::LazyLock;

static ANGLE_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([^<>]+)>").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static DOT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{2,}").expect("valid regex"));
static AT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@{2,}").expect("valid regex"));
static PROBLEM_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[;^*%&#/\\]").expect("valid regex"));
static INVALID_LOCAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9.+_-]").expect("valid regex"));
static INVALID_DOMAIN_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9.-]+").expect("valid regex"));

static PREFIXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"(?i)^mailto:", r"(?i)^email:", r"(?i)^to:"]
        .into_iter()
        .map(|pattern| Regex::new(pattern).expect("valid regex"))
        .collect()
});

static SUBSTITUTIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)\[at\]", "@"),
        (r"(?i)\(at\)", "@"),
        (r"(?i) at ", "@"),
        (r"(?i)\[dot\]", "."),
        (r"(?i)\(dot\)", "."),
        (r"(?i) dot ", "."),
        (r"[\[\]{}()]", ""),
        (r",", "."),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).expect("valid regex"), replacement))
    .collect()
});

type RuleFn = fn(&str, &[&str]) -> String;

struct Rule {
    name: &'static str,
    apply: RuleFn,
}

const RULES: &[Rule] = &[
    Rule { name: "trim", apply: trim },
    Rule { name: "angle_brackets", apply: extract_angle_brackets },
    Rule { name: "whitespace", apply: remove_whitespace },
    Rule { name: "commas", apply: commas_to_dots },
    Rule { name: "dot_runs", apply: collapse_dots },
    Rule { name: "at_runs", apply: collapse_ats },
    Rule { name: "repeated_domain", apply: collapse_repeated_domain },
    Rule { name: "multiple_at", apply: keep_last_at },
    Rule { name: "trailing_symbol", apply: drop_trailing_symbol },
    Rule { name: "problem_chars", apply: strip_problem_chars },
    Rule { name: "prefixes", apply: strip_prefixes },
    Rule { name: "substitutions", apply: substitute_spelled_out },
    Rule { name: "part_charsets", apply: clean_parts },
    Rule { name: "missing_at", apply: insert_missing_at },
    Rule { name: "local_dots", apply: trim_local_dots },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub value: String,
    pub changed: bool,
}

/// Runs every repair rule over `raw` in order.
///
/// Empty input is returned untouched. `domains` drives the repeated-domain and
/// missing-`@` rules; its order is significant.
pub fn normalize<S: AsRef<str>>(raw: &str, domains: &[S]) -> Normalized {
    if raw.is_empty() {
        return Normalized {
            value: String::new(),
            changed: false,
        };
    }

    let domains: Vec<&str> = domains.iter().map(AsRef::as_ref).collect();
    let mut value = raw.to_string();
    let mut changed = false;

    for rule in RULES {
        let next = (rule.apply)(&value, &domains);
        if next != value {
            tracing::trace!(rule = rule.name, before = %value, after = %next, "rule applied");
            value = next;
            changed = true;
        }
    }

    Normalized { value, changed }
}

/// Case-insensitive `strip_suffix` for ASCII reference domains.
fn strip_suffix_ignore_case<'a>(value: &'a str, suffix: &str) -> Option<&'a str> {
    let start = value.len().checked_sub(suffix.len())?;
    if !value.is_char_boundary(start) {
        return None;
    }
    let (head, tail) = value.split_at(start);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

fn trim(value: &str, _: &[&str]) -> String {
    value.trim().to_string()
}

fn extract_angle_brackets(value: &str, _: &[&str]) -> String {
    match ANGLE_BRACKETS.captures(value) {
        Some(caps) => caps[1].to_string(),
        None => value.to_string(),
    }
}

fn remove_whitespace(value: &str, _: &[&str]) -> String {
    WHITESPACE.replace_all(value, "").into_owned()
}

fn commas_to_dots(value: &str, _: &[&str]) -> String {
    value.replace(',', ".")
}

fn collapse_dots(value: &str, _: &[&str]) -> String {
    DOT_RUN.replace_all(value, ".").into_owned()
}

fn collapse_ats(value: &str, _: &[&str]) -> String {
    AT_RUN.replace_all(value, "@").into_owned()
}

fn collapse_repeated_domain(value: &str, domains: &[&str]) -> String {
    for domain in domains.iter().filter(|d| !d.is_empty()) {
        let repeated = format!("@{domain}@{domain}");
        if let Some(head) = strip_suffix_ignore_case(value, &repeated) {
            return format!("{head}@{domain}");
        }
    }
    value.to_string()
}

fn keep_last_at(value: &str, _: &[&str]) -> String {
    match value.rsplit_once('@') {
        Some((head, tail)) if head.contains('@') => format!("{}@{}", head.replace('@', ""), tail),
        _ => value.to_string(),
    }
}

fn drop_trailing_symbol(value: &str, _: &[&str]) -> String {
    match value.chars().last() {
        Some(last) if !last.is_ascii_alphanumeric() => {
            value[..value.len() - last.len_utf8()].to_string()
        }
        _ => value.to_string(),
    }
}

fn strip_problem_chars(value: &str, _: &[&str]) -> String {
    PROBLEM_CHARS.replace_all(value, "").into_owned()
}

fn strip_prefixes(value: &str, _: &[&str]) -> String {
    PREFIXES.iter().fold(value.to_string(), |acc, prefix| {
        prefix.replace(&acc, "").into_owned()
    })
}

fn substitute_spelled_out(value: &str, _: &[&str]) -> String {
    SUBSTITUTIONS
        .iter()
        .fold(value.to_string(), |acc, (pattern, replacement)| {
            pattern.replace_all(&acc, *replacement).into_owned()
        })
}

fn clean_parts(value: &str, _: &[&str]) -> String {
    let Some((local, rest)) = value.split_once('@') else {
        return value.to_string();
    };
    // Segments after a second '@' are dropped.
    let domain = rest.split('@').next().unwrap_or_default();

    let local = INVALID_LOCAL_CHARS.replace_all(local, "");
    let domain = INVALID_DOMAIN_CHARS.replace_all(domain, "").to_ascii_lowercase();
    format!("{local}@{domain}")
}

fn insert_missing_at(value: &str, domains: &[&str]) -> String {
    if value.contains('@') {
        return value.to_string();
    }
    for domain in domains.iter().filter(|d| !d.is_empty()) {
        if let Some(head) = strip_suffix_ignore_case(value, domain) {
            return format!("{head}@{domain}");
        }
    }
    value.to_string()
}

fn trim_local_dots(value: &str, _: &[&str]) -> String {
    match value.split_once('@') {
        Some((local, domain)) => format!("{}@{}", local.trim_matches('.'), domain),
        None => value.to_string(),
    }
}
