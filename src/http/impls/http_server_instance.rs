use std::fmt;
use crate::http::structs::http_server_instance::HttpServerInstance;

impl HttpServerInstance {
    pub fn is_tls(&self) -> bool {
        self.resolver.is_some()
    }
}

impl fmt::Debug for HttpServerInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpServerInstance")
            .field("local_addr", &self.local_addr)
            .field("resolver", &self.resolver)
            .finish()
    }
}
