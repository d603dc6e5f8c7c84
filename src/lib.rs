//! # Bootstrap-Actix
//!
//! Service bootstrap for actix-web HTTP/HTTPS servers with TLS certificates
//! that rotate on disk without a restart.
//!
//! ## Overview
//!
//! A rustls certificate resolver is backed by a certificate cache that
//! re-reads the PEM files when the cached leaf expires, when the certificate
//! file is modified or when its signature changes. The cache is fail-open: a
//! broken rotation keeps the previous certificate in service.
//!
//! ## Features
//!
//! - **Self-refreshing TLS**: bounded staleness, expiry, mtime and signature triggers
//! - **Probes**: `/healthz` and `/readyz` out of the box, replaceable per service
//! - **Request logging**: every request except probes, warnings for 5xx and errors
//! - **Graceful shutdown**: SIGINT, SIGTERM and SIGQUIT stop the server cleanly
//! - **Configuration**: TOML file, environment overrides and CLI flags
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bootstrap_actix::http::http::{http_service, listen};
//! use bootstrap_actix::http::structs::http_server_options::HttpServerOptions;
//!
//! let options = HttpServerOptions::default().with_tls("tls.cert", "tls.key");
//! listen(http_service(options)?, None).await?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup and error handling helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - HTTP/HTTPS server bootstrap
//! - [`ssl`] - Self-refreshing TLS certificate cache
//! - [`structs`] - CLI argument parsing

/// Common utilities and shared functionality.
///
/// Contains log level parsing, logging setup and the generic error type.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files
/// and environment variables.
pub mod config;

/// HTTP/HTTPS server bootstrap.
///
/// Probe routes, request logging, TLS wiring and signal-driven shutdown.
pub mod http;

/// SSL/TLS certificate management module.
///
/// Provides the self-refreshing certificate cache and its rustls resolver.
pub mod ssl;

/// CLI argument parsing.
pub mod structs;
