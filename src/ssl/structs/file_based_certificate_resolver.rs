use crate::ssl::structs::file_based_certificate::FileBasedCertificate;
use crate::ssl::structs::file_certificate_source::FileCertificateSource;
use crate::ssl::structs::system_clock::SystemClock;
use std::sync::Arc;

/// rustls certificate resolver backed by a [`FileBasedCertificate`] cache.
pub struct FileBasedCertificateResolver<S = FileCertificateSource, C = SystemClock> {
    pub(crate) cache: Arc<FileBasedCertificate<S, C>>,
}
