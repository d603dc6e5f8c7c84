use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HttpServerConfig {
    /// `0` selects the default port.
    pub port: u16,
    pub tls_cert: String,
    pub tls_key: String,
    /// Seconds a cached certificate is trusted before the files are checked again.
    pub cert_cache_duration: u64,
}
