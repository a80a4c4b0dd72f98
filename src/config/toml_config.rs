use crate::utils::error::{Result, StatsError};
use serde::Deserialize;
use std::path::Path;

/// Optional config file. Every field is optional; missing values fall back
/// to CLI flags and built-in defaults during `AppConfig::resolve`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub languages: Option<Vec<String>>,
    pub headhunter: Option<HeadHunterSection>,
    pub superjob: Option<SuperJobSection>,
    pub fetch: Option<FetchSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeadHunterSection {
    pub base_url: Option<String>,
    pub area: Option<u32>,
    pub period: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuperJobSection {
    pub base_url: Option<String>,
    pub town: Option<u32>,
    pub catalogue: Option<u32>,
    /// Supports `${VAR}` environment substitution, e.g. `"${SJ_APP_KEY}"`.
    pub app_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FetchSection {
    pub page_size: Option<u32>,
    pub max_pages: Option<u32>,
    pub timeout_secs: Option<u64>,
    pub retry_attempts: Option<u32>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StatsError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| StatsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// Replace `${VAR_NAME}` with the environment value; unknown variables are
/// left as-is so the error surfaces at validation instead of parse time.
fn substitute_env_vars(content: &str) -> String {
    let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();
    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_config() {
        let config = TomlConfig::from_toml_str(
            r#"
languages = ["Python", "Go"]

[headhunter]
area = 1
period = 30

[superjob]
town = 4
catalogue = 48

[fetch]
page_size = 100
max_pages = 50
"#,
        )
        .unwrap();

        assert_eq!(
            config.languages,
            Some(vec!["Python".to_string(), "Go".to_string()])
        );
        assert_eq!(config.headhunter.unwrap().area, Some(1));
        assert_eq!(config.fetch.unwrap().max_pages, Some(50));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_SJ_KEY", "v3.r.12345");

        let config = TomlConfig::from_toml_str(
            r#"
[superjob]
app_key = "${TEST_SJ_KEY}"
"#,
        )
        .unwrap();

        assert_eq!(
            config.superjob.unwrap().app_key,
            Some("v3.r.12345".to_string())
        );

        std::env::remove_var("TEST_SJ_KEY");
    }

    #[test]
    fn test_unknown_env_var_is_left_verbatim() {
        let config = TomlConfig::from_toml_str(
            r#"
[superjob]
app_key = "${DEFINITELY_NOT_SET_ANYWHERE}"
"#,
        )
        .unwrap();

        assert_eq!(
            config.superjob.unwrap().app_key,
            Some("${DEFINITELY_NOT_SET_ANYWHERE}".to_string())
        );
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("languages = not valid");
        assert!(matches!(result, Err(StatsError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"languages = [\"Swift\"]\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.languages, Some(vec!["Swift".to_string()]));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TomlConfig::from_file("/definitely/not/here.toml");
        assert!(matches!(result, Err(StatsError::IoError(_))));
    }
}
