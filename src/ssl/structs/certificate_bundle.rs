use crate::ssl::structs::leaf_metadata::LeafMetadata;
use rustls::sign::CertifiedKey;
use std::sync::Arc;

/// A fully parsed certificate chain with its signing key and leaf metadata.
pub struct CertificateBundle {
    pub certified_key: Arc<CertifiedKey>,
    pub leaf: LeafMetadata,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
    pub cert_path: String,
    pub key_path: String,
}
