use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Prefix of the environment variables overriding the config file.
    #[arg(long, default_value = "BOOTSTRAP")]
    pub env_prefix: String,

    #[arg(long)]
    pub log_level: Option<String>,
    #[arg(long)]
    pub port: Option<u16>,
    #[arg(long)]
    pub tls_cert: Option<String>,
    #[arg(long)]
    pub tls_key: Option<String>,
    /// Seconds a cached certificate is served before the files are checked again.
    #[arg(long)]
    pub cert_cache_duration: Option<u64>,

    /// Create a self-signed key and certificate at the configured TLS paths, then exit.
    #[arg(long)]
    pub create_selfsigned: bool,
    #[arg(long, default_value = "localhost")]
    pub selfsigned_domain: String,
}
