pub mod configuration;
pub mod http_server_config;
