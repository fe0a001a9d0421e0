use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod validator;

use crate::cli::Cli;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 4351;
pub const DEFAULT_MAX_SUBMISSIONS: usize = 1000;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub form: FormSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Only this origin may post cross-origin; unset means same-origin only
    #[serde(default)]
    pub ui_origin: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormSettings {
    /// Oldest submissions are dropped beyond this many
    #[serde(default = "default_max_submissions")]
    pub max_submissions: usize,
    /// Serve stored submissions at `/admin/submissions`
    #[serde(default)]
    pub expose_submissions: bool,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            max_submissions: default_max_submissions(),
            expose_submissions: false,
        }
    }
}

fn default_max_submissions() -> usize {
    DEFAULT_MAX_SUBMISSIONS
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_root(".")
    }

    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::load(File::from(cli.config.clone()).required(false))?;

        // CLI (and its env vars) > config file
        settings.apply_cli_overrides(cli);
        settings.validate()?;
        Ok(settings)
    }

    /// Load `formkit.toml` (or .yaml / .json) from a directory
    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let config_path = Path::new(root).join("formkit");
        let settings = Self::load(File::from(config_path).required(false))?;
        settings.validate()?;
        Ok(settings)
    }

    fn load<S>(source: S) -> Result<Self, anyhow::Error>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let s = Config::builder()
            .add_source(source)
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .build()?;

        Ok(s.try_deserialize()?)
    }

    /// Apply CLI argument overrides to settings
    pub fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(origin) = &cli.ui_origin {
            self.server.ui_origin = Some(origin.clone());
        }
        if let Some(max) = cli.max_submissions {
            self.form.max_submissions = max;
        }
        if cli.expose_submissions {
            self.form.expose_submissions = true;
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                ui_origin: None,
            },
            form: FormSettings::default(),
        }
    }
}
