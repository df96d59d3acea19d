use crate::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server_addr: String,

    #[serde(default = "default_counter_base_url")]
    pub counter_base_url: String,
    #[serde(default = "default_counter_namespace")]
    pub counter_namespace: String,
    #[serde(default = "default_counter_key")]
    pub counter_key: String,

    #[serde(default)]
    pub sentry_dsn: Option<String>,
    #[serde(default)]
    pub debug_mode: bool,
    #[serde(default)]
    pub json_log: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        envy::from_env().map_err(Into::into)
    }
}

fn default_counter_base_url() -> String {
    "https://api.countapi.xyz".to_owned()
}

fn default_counter_namespace() -> String {
    "beamindia".to_owned()
}

fn default_counter_key() -> String {
    "site".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_defaults() {
        let config: Config =
            envy::from_iter(vec![("SERVER_ADDR".to_owned(), "0.0.0.0:3000".to_owned())]).unwrap();

        assert_eq!(config.server_addr, "0.0.0.0:3000");
        assert_eq!(config.counter_base_url, "https://api.countapi.xyz");
        assert_eq!(config.counter_namespace, "beamindia");
        assert_eq!(config.counter_key, "site");
        assert!(config.sentry_dsn.is_none());
        assert!(!config.debug_mode);
        assert!(!config.json_log);
    }

    #[test]
    fn test_counter_overrides() {
        let config: Config = envy::from_iter(vec![
            ("SERVER_ADDR".to_owned(), "127.0.0.1:8080".to_owned()),
            ("COUNTER_BASE_URL".to_owned(), "http://localhost:9000".to_owned()),
            ("COUNTER_NAMESPACE".to_owned(), "staging".to_owned()),
            ("COUNTER_KEY".to_owned(), "landing".to_owned()),
        ])
        .unwrap();

        assert_eq!(config.counter_base_url, "http://localhost:9000");
        assert_eq!(config.counter_namespace, "staging");
        assert_eq!(config.counter_key, "landing");
    }
}
