use std::time::Duration;
use crate::http::types::{RouteFactory, RoutesInit};

#[derive(Clone)]
pub struct HttpServerOptions {
    /// `0` selects 8080, or 8443 when a TLS path is given.
    pub port: u16,
    /// Handler for `/healthz`, defaults to an always 200 OK route.
    pub health: Option<RouteFactory>,
    /// Handler for `/readyz`, defaults to an always 200 OK route.
    pub ready: Option<RouteFactory>,
    pub init_routes: Option<RoutesInit>,
    pub tls_cert: String,
    pub tls_key: String,
    /// `Duration::ZERO` selects seven days.
    pub cert_cache_duration: Duration,
}
