use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebUiConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_web_port")]
    pub port: u16,
}

impl Default for WebUiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            port: default_web_port(),
        }
    }
}

fn default_web_port() -> u16 {
    8080
}
