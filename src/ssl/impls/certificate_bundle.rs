use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::leaf_metadata::LeafMetadata;
use chrono::{DateTime, Utc};
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::sign::CertifiedKey;
use std::io::BufReader;
use std::sync::Arc;

impl std::fmt::Debug for CertificateBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateBundle")
            .field("certs_count", &self.certified_key.cert.len())
            .field("subject", &self.leaf.subject)
            .field("serial", &self.leaf.serial)
            .field("not_after", &self.leaf.not_after)
            .field("cert_path", &self.cert_path)
            .field("key_path", &self.key_path)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl CertificateBundle {
    /// Parses a PEM certificate chain and a PEM private key into a bundle.
    ///
    /// The first certificate of the chain is treated as the leaf and the key
    /// must belong to it. The paths are only kept for diagnostics.
    pub fn from_pem(
        cert_pem: &[u8],
        key_pem: &[u8],
        cert_path: &str,
        key_path: &str,
    ) -> Result<CertificateBundle, CertificateError> {
        let certs: Vec<CertificateDer<'static>> = rustls_pemfile::certs(&mut BufReader::new(cert_pem))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CertificateError::CertParseError(format!("{}: {}", cert_path, e)))?;
        let Some(leaf_der) = certs.first() else {
            return Err(CertificateError::NoCertificateFound(cert_path.to_string()));
        };
        let leaf = LeafMetadata::from_der(leaf_der.as_ref())?;
        let key = Self::parse_private_key(key_pem, key_path)?;
        let signing_key = rustls::crypto::ring::sign::any_supported_type(&key)
            .map_err(|e| CertificateError::CertifiedKeyError(format!("{}", e)))?;
        let certified_key = CertifiedKey::new(certs, signing_key);
        certified_key
            .keys_match()
            .map_err(|e| CertificateError::CertifiedKeyError(format!("{} does not match {}: {}", key_path, cert_path, e)))?;
        Ok(CertificateBundle {
            certified_key: Arc::new(certified_key),
            leaf,
            loaded_at: Utc::now(),
            cert_path: cert_path.to_string(),
            key_path: key_path.to_string(),
        })
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.leaf.not_after
    }

    pub fn same_signature(&self, other: &CertificateBundle) -> bool {
        self.leaf.signature == other.leaf.signature
    }

    fn parse_private_key(
        key_pem: &[u8],
        key_path: &str,
    ) -> Result<PrivateKeyDer<'static>, CertificateError> {
        // Accepts PKCS#8, PKCS#1 and SEC1 blocks, first one wins.
        rustls_pemfile::private_key(&mut BufReader::new(key_pem))
            .map_err(|e| CertificateError::KeyParseError(format!("{}: {}", key_path, e)))?
            .ok_or_else(|| CertificateError::NoKeyFound(key_path.to_string()))
    }
}
