use anyhow::Context;
use serde::Deserialize;

const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:42069".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

impl Config {
    /// Resolves configuration: the `LISTEN` env var wins, then a
    /// `config.yaml` in the working directory, then built-in defaults.
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(listen_addr) = std::env::var("LISTEN") {
            return Ok(Self { listen_addr });
        }

        match std::fs::read_to_string(CONFIG_FILE) {
            Ok(contents) => Self::from_yaml(&contents)
                .with_context(|| format!("failed to parse {CONFIG_FILE}")),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }
}
