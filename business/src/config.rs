use serde::Deserialize;

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

/// Environment overrides, e.g. `USERGRID_API_URL=http://localhost:7788`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawEnv {
    usergrid_api_url: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
        }
    }

    /// Default config with environment overrides applied.
    pub fn from_env_iter<I, S>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawEnv = serde_env::from_iter(vars)?;
        Ok(match raw.usergrid_api_url {
            Some(url) if !url.is_empty() => Self::new(url.trim_end_matches('/').to_owned()),
            _ => Self::default(),
        })
    }

    pub fn api_url(&self) -> String {
        if self.api_base_url.is_empty() {
            "/api".to_owned()
        } else {
            format!("{}/api", self.api_base_url)
        }
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.api_url())
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else if cfg!(feature = "env_test") {
                "https://usergrid-test.example.com".to_owned()
            } else if cfg!(feature = "env_local") {
                "http://localhost:7788".to_owned()
            } else {
                "https://usergrid.example.com".to_owned()
            },
        }
    }
}
