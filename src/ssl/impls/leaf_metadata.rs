use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::leaf_metadata::LeafMetadata;
use chrono::{DateTime, Utc};
use x509_parser::prelude::{FromDer, X509Certificate};

impl LeafMetadata {
    pub fn from_der(der: &[u8]) -> Result<LeafMetadata, CertificateError> {
        let (_, cert) = X509Certificate::from_der(der)
            .map_err(|e| CertificateError::LeafParseError(e.to_string()))?;
        let not_after_timestamp = cert.validity().not_after.timestamp();
        let not_after = DateTime::<Utc>::from_timestamp(not_after_timestamp, 0).ok_or_else(|| {
            CertificateError::LeafParseError(format!("not-after out of range: {}", not_after_timestamp))
        })?;
        Ok(LeafMetadata {
            not_after,
            signature: cert.signature_value.data.to_vec(),
            subject: cert.subject().to_string(),
            serial: cert.raw_serial_as_string(),
        })
    }
}
