//! HTTP/HTTPS server bootstrap.
//!
//! Builds an actix-web server with liveness and readiness probes, request
//! logging and optional TLS backed by the self-refreshing certificate cache,
//! and runs it until a shutdown signal arrives.
//!
//! # Endpoints
//!
//! - `/healthz` - Liveness probe, always 200 OK unless replaced
//! - `/readyz` - Readiness probe, always 200 OK unless replaced
//! - anything registered through `init_routes`
//!
//! Probe requests are not logged.
//!
//! # Example
//!
//! ```rust,ignore
//! use bootstrap_actix::http::http::{http_service, listen};
//! use bootstrap_actix::http::structs::http_server_options::HttpServerOptions;
//!
//! let options = HttpServerOptions::default().with_tls("tls.cert", "tls.key");
//! let instance = http_service(options)?;
//! listen(instance, None).await?;
//! ```

/// Enumerations for server lifecycle events.
pub mod enums;

/// Server options and running instance handles.
pub mod structs;

/// Implementation blocks for HTTP service components.
pub mod impls;

/// Type aliases for HTTP module.
pub mod types;

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;
