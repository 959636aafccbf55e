use crate::config::resolve_domains;
use crate::core::batch::OutputFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FixerError, Result};
use crate::utils::validation::{validate_domain_list, validate_output_format, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub fixer: FixerSection,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixerSection {
    pub domains: Option<Vec<String>>,
    pub extend_defaults: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<String>,
    pub only_corrected: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FixerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FixerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CORP_DOMAIN})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(domains) = &self.fixer.domains {
            validate_domain_list("fixer.domains", domains)?;
        }

        if let Some(format) = self.output.as_ref().and_then(|o| o.format.as_deref()) {
            validate_output_format("output.format", format)?;
        }

        Ok(())
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .map(str::parse)
            .transpose()
    }

    pub fn only_corrected(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.only_corrected)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn domains(&self) -> Vec<String> {
        let explicit = self.fixer.domains.as_deref().unwrap_or_default();
        resolve_domains(explicit, self.fixer.extend_defaults.unwrap_or(false))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
