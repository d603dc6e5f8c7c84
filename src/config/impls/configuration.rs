use std::fs::File;
use std::io::Write;
use log::info;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::structs::Cli;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("debug"),
            http_server: HttpServerConfig::init(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config)?;
        Self::save_file(path, config_toml)
    }

    /// Loads `path`. A missing or corrupt file is only replaced by a default
    /// one when `create` is set, and even then an error is returned so the
    /// operator can review it before starting again.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        match Configuration::load_file(path) {
            Ok(config) => Ok(config),
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit the {} file, exiting now...", path);
                        Err(CustomError::new(&format!("create {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                }
            }
        }
    }

    /// Applies `<PREFIX>_LOG_LEVEL` and `<PREFIX>_HTTP_SERVER_*` variables.
    pub fn apply_env_overrides(&mut self, prefix: &str) -> Result<(), ConfigurationError> {
        self.apply_overrides_from(prefix, |key| std::env::var(key).ok())
    }

    /// Same as [`Configuration::apply_env_overrides`], reading values through `lookup`.
    pub fn apply_overrides_from<F>(&mut self, prefix: &str, lookup: F) -> Result<(), ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = |name: &str| format!("{}_{}", prefix, name).to_uppercase();

        if let Some(value) = lookup(&key("log_level")) {
            info!("[CONFIG] Overriding log_level from environment");
            self.log_level = value;
        }
        if let Some(value) = lookup(&key("http_server_port")) {
            self.http_server.port = parse_env_number(&key("http_server_port"), &value)?;
        }
        if let Some(value) = lookup(&key("http_server_tls_cert")) {
            self.http_server.tls_cert = value;
        }
        if let Some(value) = lookup(&key("http_server_tls_key")) {
            self.http_server.tls_key = value;
        }
        if let Some(value) = lookup(&key("http_server_cert_cache_duration")) {
            self.http_server.cert_cache_duration = parse_env_number(&key("http_server_cert_cache_duration"), &value)?;
        }
        Ok(())
    }

    /// Command-line flags win over both the file and the environment.
    pub fn apply_cli_overrides(&mut self, args: &Cli) {
        if let Some(log_level) = &args.log_level {
            self.log_level = log_level.clone();
        }
        if let Some(port) = args.port {
            self.http_server.port = port;
        }
        if let Some(tls_cert) = &args.tls_cert {
            self.http_server.tls_cert = tls_cert.clone();
        }
        if let Some(tls_key) = &args.tls_key {
            self.http_server.tls_key = tls_key.clone();
        }
        if let Some(cert_cache_duration) = args.cert_cache_duration {
            self.http_server.cert_cache_duration = cert_cache_duration;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }
        if self.http_server.tls_cert.is_empty() != self.http_server.tls_key.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from(
                "http_server.tls_cert and http_server.tls_key must be set together"
            )));
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

fn parse_env_number<T>(key: &str, value: &str) -> Result<T, ConfigurationError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| ConfigurationError::EnvError {
        key: key.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}
