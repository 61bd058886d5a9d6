//! Backend endpoint configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which deployment of the backend to talk to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Development,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "development" | "dev" => Ok(Environment::Development),
            other => Err(format!(
                "unknown environment '{other}' (expected production or development)"
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Development => write!(f, "development"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub environment: Environment,
    pub production_url: String,
    pub development_url: String,
    pub ask_path: String,
    pub posts_path: String,
    /// Connect timeout in seconds (valid range: 1-60).
    pub connect_timeout_secs: u32,
    /// Upper bound on a whole request in seconds (valid range: 0-600, 0 = unbounded).
    pub request_timeout_secs: u32,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Production,
            production_url: "https://simppl-assignment.vercel.app".into(),
            development_url: "http://localhost:3000".into(),
            ask_path: "/api/ask".into(),
            posts_path: "/api/posts".into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 60,
        }
    }
}

impl BackendConfig {
    /// Base URL for the selected environment.
    pub fn base_url(&self) -> &str {
        match self.environment {
            Environment::Production => &self.production_url,
            Environment::Development => &self.development_url,
        }
    }

    pub fn ask_url(&self) -> String {
        join_url(self.base_url(), &self.ask_path)
    }

    pub fn posts_url(&self) -> String {
        join_url(self.base_url(), &self.posts_path)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_secs))
    }

    /// `None` when the request bound is disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(u64::from(secs))),
        }
    }
}

/// Join a base URL and an absolute path without doubling the slash.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_is_default() {
        let backend = BackendConfig::default();
        assert_eq!(backend.environment, Environment::Production);
        assert_eq!(
            backend.ask_url(),
            "https://simppl-assignment.vercel.app/api/ask"
        );
    }

    #[test]
    fn development_uses_localhost() {
        let backend = BackendConfig {
            environment: Environment::Development,
            ..BackendConfig::default()
        };
        assert_eq!(backend.ask_url(), "http://localhost:3000/api/ask");
        assert_eq!(backend.posts_url(), "http://localhost:3000/api/posts");
    }

    #[test]
    fn join_url_handles_slashes() {
        assert_eq!(join_url("http://a/", "/x"), "http://a/x");
        assert_eq!(join_url("http://a", "x"), "http://a/x");
        assert_eq!(join_url("http://a//", "/x/y"), "http://a/x/y");
    }

    #[test]
    fn zero_request_timeout_is_unbounded() {
        let backend = BackendConfig {
            request_timeout_secs: 0,
            ..BackendConfig::default()
        };
        assert!(backend.request_timeout().is_none());
        assert_eq!(
            BackendConfig::default().request_timeout(),
            Some(Duration::from_secs(60))
        );
    }

    #[test]
    fn environment_parses_aliases() {
        assert_eq!("dev".parse::<Environment>(), Ok(Environment::Development));
        assert_eq!(
            " Production ".parse::<Environment>(),
            Ok(Environment::Production)
        );
        assert!("staging".parse::<Environment>().is_err());
    }
}
