use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use actix_web::web::ServiceConfig;
use actix_web::Route;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::http::structs::http_server_options::HttpServerOptions;
use crate::http::types::{RouteFactory, RoutesInit};

pub const DEFAULT_HTTP_PORT: u16 = 8080;
pub const DEFAULT_HTTPS_PORT: u16 = 8443;
pub const DEFAULT_CERT_CACHE_DURATION: Duration = Duration::from_secs(7 * 24 * 60 * 60);

impl HttpServerOptions {
    pub fn new(
        port: u16,
        health: Option<RouteFactory>,
        ready: Option<RouteFactory>,
        init_routes: Option<RoutesInit>,
    ) -> Self {
        Self {
            port,
            health,
            ready,
            init_routes,
            ..Self::default()
        }
    }

    pub fn from_config(config: &HttpServerConfig) -> Self {
        Self {
            port: config.port,
            tls_cert: config.tls_cert.clone(),
            tls_key: config.tls_key.clone(),
            cert_cache_duration: config.cert_cache_duration(),
            ..Self::default()
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_health<F>(mut self, health: F) -> Self
    where
        F: Fn() -> Route + Send + Sync + 'static,
    {
        self.health = Some(Arc::new(health));
        self
    }

    pub fn with_ready<F>(mut self, ready: F) -> Self
    where
        F: Fn() -> Route + Send + Sync + 'static,
    {
        self.ready = Some(Arc::new(ready));
        self
    }

    pub fn with_init_routes<F>(mut self, init_routes: F) -> Self
    where
        F: Fn(&mut ServiceConfig) + Send + Sync + 'static,
    {
        self.init_routes = Some(Arc::new(init_routes));
        self
    }

    pub fn with_tls(mut self, tls_cert: impl Into<String>, tls_key: impl Into<String>) -> Self {
        self.tls_cert = tls_cert.into();
        self.tls_key = tls_key.into();
        self
    }

    pub fn with_cert_cache_duration(mut self, cert_cache_duration: Duration) -> Self {
        self.cert_cache_duration = cert_cache_duration;
        self
    }

    pub fn effective_port(&self) -> u16 {
        if self.port > 0 {
            self.port
        } else if !self.tls_cert.is_empty() || !self.tls_key.is_empty() {
            DEFAULT_HTTPS_PORT
        } else {
            DEFAULT_HTTP_PORT
        }
    }

    /// Both paths are required, a single one serves plain HTTP.
    pub fn tls_enabled(&self) -> bool {
        !self.tls_cert.is_empty() && !self.tls_key.is_empty()
    }

    pub fn effective_cert_cache_duration(&self) -> Duration {
        if self.cert_cache_duration.is_zero() {
            DEFAULT_CERT_CACHE_DURATION
        } else {
            self.cert_cache_duration
        }
    }
}

impl Default for HttpServerOptions {
    fn default() -> Self {
        Self {
            port: 0,
            health: None,
            ready: None,
            init_routes: None,
            tls_cert: String::new(),
            tls_key: String::new(),
            cert_cache_duration: Duration::ZERO,
        }
    }
}

impl fmt::Debug for HttpServerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpServerOptions")
            .field("port", &self.port)
            .field("health", &self.health.is_some())
            .field("ready", &self.ready.is_some())
            .field("init_routes", &self.init_routes.is_some())
            .field("tls_cert", &self.tls_cert)
            .field("tls_key", &self.tls_key)
            .field("cert_cache_duration", &self.cert_cache_duration)
            .finish()
    }
}
