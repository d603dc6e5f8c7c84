use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("Certificate file not found: {0}")]
    CertFileNotFound(String),
    #[error("Key file not found: {0}")]
    KeyFileNotFound(String),
    #[error("Failed to parse certificate: {0}")]
    CertParseError(String),
    #[error("Failed to parse key: {0}")]
    KeyParseError(String),
    #[error("No certificate found in file: {0}")]
    NoCertificateFound(String),
    #[error("No private key found in file: {0}")]
    NoKeyFound(String),
    #[error("Failed to build certified key: {0}")]
    CertifiedKeyError(String),
    #[error("Failed to read leaf certificate: {0}")]
    LeafParseError(String),
    #[error("Failed to build TLS configuration: {0}")]
    TlsConfigError(String),
    #[error("Failed to generate self-signed certificate: {0}")]
    GenerateError(String),
}
