use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::file_based_certificate::FileBasedCertificate;
use crate::ssl::structs::file_based_certificate_resolver::FileBasedCertificateResolver;
use log::info;
use rcgen::{CertificateParams, KeyPair};
use rustls::server::ResolvesServerCert;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Builds the certificate cache for a pair of PEM files and wraps it into a
/// rustls resolver.
pub fn create_file_based_resolver(
    cert_path: impl Into<PathBuf>,
    key_path: impl Into<PathBuf>,
    cache_duration: Duration,
) -> Arc<FileBasedCertificateResolver> {
    let cache = Arc::new(FileBasedCertificate::new(cert_path, key_path, cache_duration));
    Arc::new(FileBasedCertificateResolver::new(cache))
}

/// Builds a rustls server config on the ring provider with the safe default
/// protocol versions, no client authentication and `resolver` picking the
/// certificate for every handshake.
pub fn create_server_config_with_resolver(
    resolver: Arc<dyn ResolvesServerCert>,
) -> Result<rustls::ServerConfig, CertificateError> {
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    Ok(rustls::ServerConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .map_err(|e| CertificateError::TlsConfigError(e.to_string()))?
        .with_no_client_auth()
        .with_cert_resolver(resolver))
}

/// Writes a self-signed key and certificate for `localhost` (and `domain`
/// when it differs). Only meant for development setups.
pub fn generate_self_signed(
    domain: &str,
    cert_path: &str,
    key_path: &str,
) -> Result<(), CertificateError> {
    info!("[CERTGEN] Requesting to generate a self-signed key and certificate file");

    let mut subject_alt_names = vec![String::from("localhost")];
    if domain != "localhost" {
        subject_alt_names.push(domain.to_string());
    }

    let key_pair = KeyPair::generate().map_err(|e| CertificateError::GenerateError(e.to_string()))?;
    let cert = CertificateParams::new(subject_alt_names)
        .and_then(|params| params.self_signed(&key_pair))
        .map_err(|e| CertificateError::GenerateError(e.to_string()))?;

    fs::write(key_path, key_pair.serialize_pem())
        .map_err(|e| CertificateError::GenerateError(format!("{}: {}", key_path, e)))?;
    info!("[CERTGEN] The key file {} has been generated", key_path);
    fs::write(cert_path, cert.pem())
        .map_err(|e| CertificateError::GenerateError(format!("{}: {}", cert_path, e)))?;
    info!("[CERTGEN] The cert file {} has been generated", cert_path);

    Ok(())
}
