use thiserror::Error;

use crate::config::{FormSettings, ServerSettings, Settings};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        errors.extend(Self::validate_server(&settings.server));
        errors.extend(Self::validate_form(&settings.form));

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &ServerSettings) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if server.host.is_empty() {
            errors.push(ConfigError::MissingField("server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if let Some(origin) = &server.ui_origin {
            let scheme_ok = origin.starts_with("http://") || origin.starts_with("https://");
            if !scheme_ok || origin.ends_with('/') || origin.contains(char::is_whitespace) {
                errors.push(ConfigError::InvalidValue {
                    field: "server.ui_origin".to_string(),
                    reason: format!("Expected an origin like http://host:port, got {}", origin),
                });
            }
        }

        errors
    }

    fn validate_form(form: &FormSettings) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if form.max_submissions == 0 {
            errors.push(ConfigError::InvalidValue {
                field: "form.max_submissions".to_string(),
                reason: "Must keep at least one submission".to_string(),
            });
        }

        errors
    }
}
