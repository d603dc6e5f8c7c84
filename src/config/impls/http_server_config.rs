use std::time::Duration;
use crate::config::structs::http_server_config::HttpServerConfig;

/// Seven days.
pub const DEFAULT_CERT_CACHE_DURATION: u64 = 604800;

impl HttpServerConfig {
    pub fn init() -> HttpServerConfig {
        HttpServerConfig {
            port: 0,
            tls_cert: String::new(),
            tls_key: String::new(),
            cert_cache_duration: DEFAULT_CERT_CACHE_DURATION,
        }
    }

    pub fn tls_enabled(&self) -> bool {
        !self.tls_cert.is_empty() && !self.tls_key.is_empty()
    }

    pub fn cert_cache_duration(&self) -> Duration {
        Duration::from_secs(self.cert_cache_duration)
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self::init()
    }
}
