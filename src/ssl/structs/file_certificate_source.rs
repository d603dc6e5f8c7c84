use std::path::PathBuf;

/// Reads the certificate chain and private key from two PEM files.
#[derive(Debug, Clone)]
pub struct FileCertificateSource {
    pub(crate) cert_path: PathBuf,
    pub(crate) key_path: PathBuf,
}
