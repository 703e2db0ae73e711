use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
}

/// Identifiers for the email delivery provider. All three are public values
/// (the key is the provider's browser key) and are supplied at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailConfig {
    pub fn new(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            service_id: required("EMAILJS_SERVICE_ID", service_id)?,
            template_id: required("EMAILJS_TEMPLATE_ID", template_id)?,
            public_key: required("EMAILJS_PUBLIC_KEY", public_key)?,
        })
    }

    /// Reads `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID` and
    /// `EMAILJS_PUBLIC_KEY` as they were when the crate was compiled.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }
}

fn required(name: &'static str, value: Option<&str>) -> Result<String, ConfigError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ConfigError::Missing(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_config() {
        let config = EmailConfig::new(Some("service_x"), Some("template_y"), Some(" key ")).unwrap();
        assert_eq!(config.service_id, "service_x");
        assert_eq!(config.template_id, "template_y");
        assert_eq!(config.public_key, "key");
    }

    #[test]
    fn test_missing_values() {
        assert_eq!(
            EmailConfig::new(None, Some("t"), Some("k")),
            Err(ConfigError::Missing("EMAILJS_SERVICE_ID"))
        );
        assert_eq!(
            EmailConfig::new(Some("s"), Some("  "), Some("k")),
            Err(ConfigError::Missing("EMAILJS_TEMPLATE_ID"))
        );
        assert_eq!(
            EmailConfig::new(Some("s"), Some("t"), None),
            Err(ConfigError::Missing("EMAILJS_PUBLIC_KEY"))
        );
    }
}
