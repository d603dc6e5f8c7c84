use crate::ssl::structs::certificate_bundle::CertificateBundle;
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CachedCertificate {
    pub bundle: Arc<CertificateBundle>,
    pub last_refresh: DateTime<Utc>,
}
