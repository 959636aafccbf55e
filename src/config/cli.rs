use crate::config::resolve_domains;
use crate::core::batch::{read_emails, OutputFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_domain_list, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "email-typo-fixer")]
#[command(about = "Suggest corrections for malformed or misspelled email addresses")]
pub struct CliConfig {
    /// Addresses to check
    pub emails: Vec<String>,

    /// Read addresses from a file, one per line ("-" for stdin)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Reference domains, in priority order
    #[arg(long, value_delimiter = ',')]
    pub domains: Vec<String>,

    /// Append --domains to the built-in list instead of replacing it
    #[arg(long)]
    pub extend_defaults: bool,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format: text (default), json or csv
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Only print addresses that were corrected
    #[arg(long)]
    pub only_corrected: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Positional addresses followed by those read from `--input`.
    pub fn collect_emails(&self) -> Result<Vec<String>> {
        let mut emails = self.emails.clone();

        match self.input.as_deref() {
            Some("-") => emails.extend(read_emails(io::stdin().lock())?),
            Some(path) => {
                let file = File::open(path)?;
                emails.extend(read_emails(BufReader::new(file))?);
            }
            None => {}
        }

        Ok(emails)
    }
}

impl ConfigProvider for CliConfig {
    fn domains(&self) -> Vec<String> {
        resolve_domains(&self.domains, self.extend_defaults)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if !self.domains.is_empty() {
            validate_domain_list("--domains", &self.domains)?;
        }
        if let Some(input) = &self.input {
            validate_path("--input", input)?;
        }
        if let Some(config) = &self.config {
            validate_path("--config", config)?;
        }
        Ok(())
    }
}
