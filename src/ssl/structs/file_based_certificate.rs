use crate::ssl::structs::cached_certificate::CachedCertificate;
use crate::ssl::structs::file_certificate_source::FileCertificateSource;
use crate::ssl::structs::system_clock::SystemClock;
use parking_lot::Mutex;
use std::time::Duration;

/// Certificate cache that reloads its certificate from disk when it expires,
/// when the cache duration has passed and the file changed, or when the
/// on-disk leaf signature differs from the cached one.
///
/// A single mutex guards the decision and the reload, so concurrent
/// handshakes wait behind a reload instead of racing it.
pub struct FileBasedCertificate<S = FileCertificateSource, C = SystemClock> {
    pub(crate) source: S,
    pub(crate) clock: C,
    pub(crate) cache_duration: Duration,
    pub(crate) state: Mutex<Option<CachedCertificate>>,
}
