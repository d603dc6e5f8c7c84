pub mod http_server_instance;
pub mod http_server_options;
pub mod shutdown_signal;
