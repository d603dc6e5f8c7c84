/// Options used to build a server.
pub mod http_server_options;

/// A bound, running server.
pub mod http_server_instance;
