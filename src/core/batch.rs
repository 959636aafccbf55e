use crate::core::fixer::EmailTypoFixer;
use crate::domain::model::CorrectionResult;
use crate::utils::error::{FixerError, Result};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = FixerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(FixerError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Valid formats: text, json, csv".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub results: Vec<CorrectionResult>,
    pub corrected: usize,
}

impl BatchReport {
    fn rows(&self, only_corrected: bool) -> impl Iterator<Item = &CorrectionResult> {
        self.results
            .iter()
            .filter(move |r| !only_corrected || r.has_correction)
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    original: &'a str,
    suggested: &'a str,
    has_correction: bool,
}

/// One address per line. Blank lines are skipped, everything else is kept
/// verbatim so the fixer sees the raw text.
pub fn read_emails<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut emails = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        emails.push(line.trim_end_matches('\r').to_string());
    }
    Ok(emails)
}

pub fn correct_all<I, S>(fixer: &EmailTypoFixer, emails: I) -> BatchReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = BatchReport::default();

    for email in emails {
        let result = fixer.fix(email.as_ref());
        if result.has_correction {
            report.corrected += 1;
        }
        report.results.push(result);
    }

    tracing::debug!(
        "Checked {} addresses, {} corrected",
        report.results.len(),
        report.corrected
    );
    report
}

pub fn write_report<W: Write>(
    mut writer: W,
    report: &BatchReport,
    format: OutputFormat,
    only_corrected: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for result in report.rows(only_corrected) {
                match &result.suggested {
                    Some(suggested) => writeln!(writer, "{} -> {}", result.original, suggested)?,
                    None => writeln!(writer, "{} (ok)", result.original)?,
                }
            }
        }
        OutputFormat::Json => {
            let rows: Vec<&CorrectionResult> = report.rows(only_corrected).collect();
            serde_json::to_writer_pretty(&mut writer, &rows)?;
            writeln!(writer)?;
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(&mut writer);
            for result in report.rows(only_corrected) {
                csv_writer.serialize(CsvRow {
                    original: &result.original,
                    suggested: result.suggested.as_deref().unwrap_or_default(),
                    has_correction: result.has_correction,
                })?;
            }
            csv_writer.flush()?;
        }
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> BatchReport {
        correct_all(
            &EmailTypoFixer::default(),
            ["user@gmial.com", "jane@example.com"],
        )
    }

    fn render(format: OutputFormat, only_corrected: bool) -> String {
        let mut out = Vec::new();
        write_report(&mut out, &sample_report(), format, only_corrected).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_read_emails_skips_blank_lines() {
        let input = "user@gmail.com\r\n\n   \n Jane <jane@x.org>\n";
        let emails = read_emails(input.as_bytes()).unwrap();
        assert_eq!(emails, vec!["user@gmail.com", " Jane <jane@x.org>"]);
    }

    #[test]
    fn test_correct_all_counts_corrections() {
        let report = sample_report();
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.corrected, 1);
    }

    #[test]
    fn test_text_output() {
        assert_eq!(
            render(OutputFormat::Text, false),
            "user@gmial.com -> user@gmail.com\njane@example.com (ok)\n"
        );
        assert_eq!(
            render(OutputFormat::Text, true),
            "user@gmial.com -> user@gmail.com\n"
        );
    }

    #[test]
    fn test_json_output() {
        let parsed: Vec<CorrectionResult> =
            serde_json::from_str(&render(OutputFormat::Json, false)).unwrap();
        assert_eq!(parsed, sample_report().results);
    }

    #[test]
    fn test_csv_output() {
        assert_eq!(
            render(OutputFormat::Csv, false),
            "original,suggested,has_correction\n\
             user@gmial.com,user@gmail.com,true\n\
             jane@example.com,,false\n"
        );
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
