use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::file_certificate_source::FileCertificateSource;
use crate::ssl::traits::certificate_source::CertificateSource;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

impl FileCertificateSource {
    pub fn new(cert_path: impl Into<PathBuf>, key_path: impl Into<PathBuf>) -> Self {
        Self {
            cert_path: cert_path.into(),
            key_path: key_path.into(),
        }
    }
}

impl CertificateSource for FileCertificateSource {
    fn modified(&self) -> std::io::Result<DateTime<Utc>> {
        let modified = std::fs::metadata(&self.cert_path)?.modified()?;
        Ok(DateTime::<Utc>::from(modified))
    }

    fn load(&self) -> Result<CertificateBundle, CertificateError> {
        let cert_path = self.cert_path.display().to_string();
        let key_path = self.key_path.display().to_string();
        let cert_pem = std::fs::read(&self.cert_path)
            .map_err(|e| CertificateError::CertFileNotFound(format!("{}: {}", cert_path, e)))?;
        let key_pem = std::fs::read(&self.key_path)
            .map_err(|e| CertificateError::KeyFileNotFound(format!("{}: {}", key_path, e)))?;
        CertificateBundle::from_pem(&cert_pem, &key_pem, &cert_path, &key_path)
    }
}
