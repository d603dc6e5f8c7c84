use std::net::SocketAddr;
use std::sync::Arc;
use actix_web::dev::{Server, ServerHandle};
use crate::ssl::structs::file_based_certificate_resolver::FileBasedCertificateResolver;

pub struct HttpServerInstance {
    pub handle: ServerHandle,
    pub server: Server,
    pub local_addr: SocketAddr,
    /// Present when the server terminates TLS.
    pub resolver: Option<Arc<FileBasedCertificateResolver>>,
}
