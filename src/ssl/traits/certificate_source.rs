use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use chrono::{DateTime, Utc};

/// Where the certificate cache reads its certificate/key pair from.
///
/// Both calls are synchronous: they run while the cache lock is held.
#[cfg_attr(test, mockall::automock)]
pub trait CertificateSource: Send + Sync {
    /// Modification time of the certificate file.
    fn modified(&self) -> std::io::Result<DateTime<Utc>>;

    /// Reads and parses the full certificate/key pair.
    fn load(&self) -> Result<CertificateBundle, CertificateError>;
}
