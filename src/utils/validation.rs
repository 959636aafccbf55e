use crate::utils::error::{FixerError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const OUTPUT_FORMATS: [&str; 3] = ["text", "json", "csv"];

pub fn validate_domain(field_name: &str, domain: &str) -> Result<()> {
    let reason = if domain.is_empty() {
        "Domain cannot be empty"
    } else if domain.chars().any(char::is_whitespace) {
        "Domain cannot contain whitespace"
    } else if domain.contains('@') {
        "Domain cannot contain '@'"
    } else {
        return Ok(());
    };

    Err(FixerError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: domain.to_string(),
        reason: reason.to_string(),
    })
}

pub fn validate_domain_list(field_name: &str, domains: &[String]) -> Result<()> {
    if domains.is_empty() {
        return Err(FixerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "Domain list cannot be empty".to_string(),
        });
    }

    for domain in domains {
        validate_domain(field_name, domain)?;
    }
    Ok(())
}

pub fn validate_output_format(field_name: &str, format: &str) -> Result<()> {
    if !OUTPUT_FORMATS.contains(&format) {
        return Err(FixerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: format!(
                "Unsupported format. Valid formats: {}",
                OUTPUT_FORMATS.join(", ")
            ),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FixerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FixerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
