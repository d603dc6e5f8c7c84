use serde::{Deserialize, Serialize};
use crate::config::structs::http_server_config::HttpServerConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    pub http_server: HttpServerConfig,
}
