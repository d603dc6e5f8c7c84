//! Configuration management module.
//!
//! Loads the service configuration from a TOML file, applies environment
//! variable overrides and validates the result.
//!
//! # Configuration Structure
//!
//! ```toml
//! log_level = "debug"
//!
//! [http_server]
//! port = 0
//! tls_cert = ""
//! tls_key = ""
//! cert_cache_duration = 604800
//! ```
//!
//! A port of `0` selects the default port (8080, or 8443 with TLS). TLS is
//! enabled only when both `tls_cert` and `tls_key` are set.
//!
//! # Example
//!
//! ```rust,ignore
//! use bootstrap_actix::config::structs::configuration::Configuration;
//!
//! let mut config = Configuration::load_from_file("config.toml", false)?;
//! config.apply_env_overrides("BOOTSTRAP")?;
//! config.validate()?;
//! ```

/// Configuration error enumeration.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

mod tests;
