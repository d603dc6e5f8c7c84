use crate::ssl::structs::file_based_certificate::FileBasedCertificate;
use crate::ssl::structs::file_based_certificate_resolver::FileBasedCertificateResolver;
use crate::ssl::traits::certificate_source::CertificateSource;
use crate::ssl::traits::clock::Clock;
use rustls::server::{ClientHello, ResolvesServerCert};
use rustls::sign::CertifiedKey;
use std::sync::Arc;

impl<S, C> std::fmt::Debug for FileBasedCertificateResolver<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileBasedCertificateResolver")
            .field("cache", &self.cache)
            .finish()
    }
}

impl<S: CertificateSource, C: Clock> FileBasedCertificateResolver<S, C> {
    pub fn new(cache: Arc<FileBasedCertificate<S, C>>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &Arc<FileBasedCertificate<S, C>> {
        &self.cache
    }
}

impl<S: CertificateSource, C: Clock> ResolvesServerCert for FileBasedCertificateResolver<S, C> {
    fn resolve(&self, _client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        // A failure has already been logged by the cache; returning None
        // aborts the handshake.
        self.cache
            .get_certificate()
            .ok()
            .map(|bundle| Arc::clone(&bundle.certified_key))
    }
}
