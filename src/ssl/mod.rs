//! SSL/TLS certificate management module.
//!
//! This module provides a self-refreshing certificate cache for HTTPS
//! endpoints. The cache hands a parsed certificate/key pair to rustls on
//! every handshake and picks up certificates rotated on disk by an external
//! process, without restarting the server.
//!
//! # Refresh rules
//!
//! On every access, under a single lock:
//!
//! 1. Nothing cached: load from disk.
//! 2. Cached leaf past its not-after: reload.
//! 3. Cache duration not elapsed: serve the cached certificate.
//! 4. Cache duration elapsed: reload when the certificate file mtime is newer
//!    than the last refresh, otherwise load the file and compare the leaf
//!    signature. An unchanged signature only advances the refresh time, a
//!    failed comparison load keeps serving the cached certificate.
//!
//! Only the "nothing cached and nothing loadable" case surfaces an error; it
//! aborts the TLS handshake.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use bootstrap_actix::ssl::ssl::{create_file_based_resolver, create_server_config_with_resolver};
//!
//! let resolver = create_file_based_resolver("tls.cert", "tls.key", Duration::from_secs(3600));
//! let tls_config = create_server_config_with_resolver(resolver)?;
//! ```

/// Certificate error and refresh outcome enumerations.
pub mod enums;

/// Implementation blocks for the certificate cache and its collaborators.
pub mod impls;

/// Helpers wiring the cache into a rustls server configuration.
#[allow(clippy::module_inception)]
pub mod ssl;

/// Certificate cache data structures.
pub mod structs;

/// Certificate source and clock traits.
pub mod traits;
