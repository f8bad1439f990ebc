use std::{fs, path::Path, time::Duration};

use serde::{Deserialize, Deserializer, Serialize};
use shared::domain::ComponentType;
use url::Url;

use crate::error::ClientError;

pub const SETTINGS_FILE: &str = "flexiui.toml";
pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_EXPORT_FILENAME: &str = "flexiui-component.html";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    pub api_url: String,
    pub generate_path: String,
    pub health_path: String,
    #[serde(deserialize_with = "component_type_from_str")]
    pub component_type: ComponentType,
    pub export_filename: String,
    pub toast_duration_ms: u64,
    /// No timeout unless set; the transport default applies.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            generate_path: "/api/generate-ui".into(),
            health_path: "/api/health".into(),
            component_type: ComponentType::General,
            export_filename: DEFAULT_EXPORT_FILENAME.into(),
            toast_duration_ms: 3000,
            request_timeout_secs: None,
        }
    }
}

impl ClientSettings {
    /// Defaults, then `flexiui.toml` in the working directory, then env vars.
    /// A missing `flexiui.toml` means defaults.
    pub fn load() -> Result<Self, ClientError> {
        let path = Path::new(SETTINGS_FILE);
        let settings = if path.exists() {
            Self::read_file(path)?
        } else {
            tracing::debug!(path = %path.display(), "settings file not found; using defaults");
            Self::default()
        };
        settings.finish(|name| std::env::var(name).ok())
    }

    /// Loads an explicitly named settings file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ClientError> {
        Self::read_file(path)?.finish(|name| std::env::var(name).ok())
    }

    /// Parses a settings file without applying env overrides or validation.
    pub fn read_file(path: &Path) -> Result<Self, ClientError> {
        let raw = fs::read_to_string(path).map_err(|err| {
            ClientError::Config(format!(
                "cannot read settings file {}: {err}",
                path.display()
            ))
        })?;
        Self::from_toml(&raw)
    }

    fn finish<F>(mut self, lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.apply_env(lookup)?;
        self.validate()?;
        Ok(self)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ClientError> {
        toml::from_str(raw).map_err(|err| ClientError::Config(err.to_string()))
    }

    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(v) = read("FLEXIUI_API_URL") {
            self.api_url = v;
        }
        if let Some(v) = read("FLEXIUI_COMPONENT_TYPE") {
            self.component_type = ComponentType::parse(&v)
                .ok_or_else(|| ClientError::Config(format!("unknown component type '{v}'")))?;
        }
        if let Some(v) = read("FLEXIUI_EXPORT_FILENAME") {
            self.export_filename = v;
        }
        if let Some(v) = read("FLEXIUI_TOAST_MS") {
            self.toast_duration_ms = v
                .trim()
                .parse()
                .map_err(|_| ClientError::Config(format!("FLEXIUI_TOAST_MS is not a number: '{v}'")))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        let base = Url::parse(&self.api_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "api_url must use http or https, got '{}'",
                base.scheme()
            )));
        }
        let filename = self.export_filename.trim();
        if filename.is_empty() || filename.contains(['/', '\\']) {
            return Err(ClientError::Config(format!(
                "export_filename must be a bare file name, got '{}'",
                self.export_filename
            )));
        }
        Ok(())
    }

    /// Base URL and path are concatenated, so a base with a path prefix keeps it.
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        let base = self.api_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

// Same lenient spelling rules as `FLEXIUI_COMPONENT_TYPE`.
fn component_type_from_str<'de, D>(deserializer: D) -> Result<ComponentType, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    ComponentType::parse(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unknown component type '{raw}'")))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
