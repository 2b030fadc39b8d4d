use std::{env, path::PathBuf};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CONTEXT_PATH: &str = "data/context.json";
pub const DEFAULT_SAVE_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub context_path: PathBuf,
    pub save_base_url: String,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// - `PORT`: listen port, default 8080
    /// - `APP_CONTEXT_PATH`: template context JSON, default `data/context.json`
    /// - `SAVE_BASE_URL`: productivity backend, default `http://127.0.0.1:5000`
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let context_path = lookup("APP_CONTEXT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTEXT_PATH));
        let save_base_url = lookup("SAVE_BASE_URL")
            .unwrap_or_else(|| DEFAULT_SAVE_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            port,
            context_path,
            save_base_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.context_path, PathBuf::from(DEFAULT_CONTEXT_PATH));
        assert_eq!(config.save_base_url, DEFAULT_SAVE_BASE_URL);
    }

    #[test]
    fn bad_port_falls_back_and_url_is_trimmed() {
        let config = config_from(&[("PORT", "nope"), ("SAVE_BASE_URL", "http://backend:9000/")]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.save_base_url, "http://backend:9000");
    }
}
