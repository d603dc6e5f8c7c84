/// Operating system signals that stop the server.
pub mod shutdown_signal;
