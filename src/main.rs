use anyhow::Context;
use clap::Parser;
use email_typo_fixer::core::batch::{correct_all, write_report};
use email_typo_fixer::utils::error::ErrorSeverity;
use email_typo_fixer::utils::{logger, validation::Validate};
use email_typo_fixer::{CliConfig, EmailTypoFixer, FixerError, TomlConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config) {
        let Some(fixer_error) = e.downcast_ref::<FixerError>() else {
            return Err(e);
        };

        tracing::error!(
            "❌ {:#} (Category: {:?}, Severity: {:?})",
            e,
            fixer_error.category(),
            fixer_error.severity()
        );
        eprintln!("❌ {}", fixer_error.user_friendly_message());
        eprintln!("💡 {}", fixer_error.recovery_suggestion());

        let exit_code = match fixer_error.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

fn run(config: CliConfig) -> anyhow::Result<()> {
    config.validate()?;

    let file_config = match &config.config {
        Some(path) => {
            let file_config = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?;
            file_config.validate()?;
            tracing::info!("Loaded configuration from {}", path);
            Some(file_config)
        }
        None => None,
    };

    // Explicit --domains win over the config file.
    let fixer = match &file_config {
        Some(file_config) if config.domains.is_empty() => EmailTypoFixer::from_config(file_config),
        _ => EmailTypoFixer::from_config(&config),
    };
    tracing::debug!("Reference domains: {}", fixer.domains().join(", "));

    let format = match config.format {
        Some(format) => format,
        None => match &file_config {
            Some(file_config) => file_config.output_format()?.unwrap_or_default(),
            None => Default::default(),
        },
    };
    let only_corrected = config.only_corrected
        || file_config.as_ref().is_some_and(TomlConfig::only_corrected);

    let emails = config
        .collect_emails()
        .context("failed to read input addresses")?;
    if emails.is_empty() {
        tracing::warn!("No addresses given; pass them as arguments or with --input");
        return Ok(());
    }

    let report = correct_all(&fixer, &emails);
    write_report(std::io::stdout().lock(), &report, format, only_corrected)?;

    tracing::info!(
        "✅ Checked {} addresses, {} corrected",
        report.results.len(),
        report.corrected
    );
    Ok(())
}
