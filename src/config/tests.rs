#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::config::structs::configuration::Configuration;
        use crate::config::impls::http_server_config::DEFAULT_CERT_CACHE_DURATION;
        use std::time::Duration;

        #[test]
        fn test_configuration_defaults() {
            let config = Configuration::init();
            assert_eq!(config.log_level, "debug");
            assert_eq!(config.http_server.port, 0);
            assert!(config.http_server.tls_cert.is_empty());
            assert!(config.http_server.tls_key.is_empty());
            assert_eq!(config.http_server.cert_cache_duration, DEFAULT_CERT_CACHE_DURATION);
            assert_eq!(config.http_server.cert_cache_duration(), Duration::from_secs(7 * 24 * 3600));
            assert!(!config.http_server.tls_enabled());
            assert_eq!(config, Configuration::default());
        }

        #[test]
        fn test_configuration_load_partial() {
            let data = br#"
                log_level = "info"

                [http_server]
                tls_cert = "tls.cert"
                tls_key = "tls.key"
            "#;
            let config = Configuration::load(data).unwrap();
            assert_eq!(config.log_level, "info");
            assert_eq!(config.http_server.port, 0);
            assert!(config.http_server.tls_enabled());
            assert_eq!(config.http_server.cert_cache_duration, DEFAULT_CERT_CACHE_DURATION);
        }

        #[test]
        fn test_configuration_load_invalid() {
            assert!(Configuration::load(b"log_level = [").is_err());
            assert!(Configuration::load(b"[http_server]\nport = \"abc\"").is_err());
        }

        #[test]
        fn test_configuration_serialization_round_trip() {
            let mut config = Configuration::init();
            config.http_server.port = 9443;
            let serialized = toml::to_string(&config).unwrap();
            assert!(serialized.contains("[http_server]"));
            assert_eq!(Configuration::load(serialized.as_bytes()).unwrap(), config);
        }
    }

    mod load_from_file_tests {
        use crate::config::structs::configuration::Configuration;
        use tempfile::TempDir;

        #[test]
        fn test_load_from_missing_file_without_create() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("config.toml");
            let result = Configuration::load_from_file(path.to_str().unwrap(), false);
            assert!(result.is_err());
            assert!(!path.exists());
        }

        #[test]
        fn test_load_from_missing_file_with_create() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("config.toml");
            let result = Configuration::load_from_file(path.to_str().unwrap(), true);
            assert!(result.is_err());
            assert!(path.exists());

            let created = Configuration::load_from_file(path.to_str().unwrap(), false).unwrap();
            assert_eq!(created, Configuration::init());
        }

        #[test]
        fn test_save_and_load_file() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("config.toml");
            let mut config = Configuration::init();
            config.log_level = String::from("warn");
            Configuration::save_from_config(path.to_str().unwrap(), &config).unwrap();
            assert_eq!(Configuration::load_file(path.to_str().unwrap()).unwrap(), config);
        }
    }

    mod overrides_tests {
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;
        use crate::structs::Cli;
        use clap::Parser;
        use std::collections::HashMap;

        fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
            let map: HashMap<String, String> = vars
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            move |key| map.get(key).cloned()
        }

        #[test]
        fn test_env_overrides_applied() {
            let mut config = Configuration::init();
            config
                .apply_overrides_from(
                    "bootstrap",
                    lookup(&[
                        ("BOOTSTRAP_LOG_LEVEL", "error"),
                        ("BOOTSTRAP_HTTP_SERVER_PORT", "9000"),
                        ("BOOTSTRAP_HTTP_SERVER_TLS_CERT", "/etc/tls/tls.crt"),
                        ("BOOTSTRAP_HTTP_SERVER_TLS_KEY", "/etc/tls/tls.key"),
                        ("BOOTSTRAP_HTTP_SERVER_CERT_CACHE_DURATION", "3600"),
                    ]),
                )
                .unwrap();
            assert_eq!(config.log_level, "error");
            assert_eq!(config.http_server.port, 9000);
            assert_eq!(config.http_server.tls_cert, "/etc/tls/tls.crt");
            assert_eq!(config.http_server.tls_key, "/etc/tls/tls.key");
            assert_eq!(config.http_server.cert_cache_duration, 3600);
        }

        #[test]
        fn test_env_overrides_ignore_other_prefixes() {
            let mut config = Configuration::init();
            config
                .apply_overrides_from("BOOTSTRAP", lookup(&[("OTHER_HTTP_SERVER_PORT", "9000")]))
                .unwrap();
            assert_eq!(config, Configuration::init());
        }

        #[test]
        fn test_env_override_invalid_number() {
            let mut config = Configuration::init();
            let result = config.apply_overrides_from("BOOTSTRAP", lookup(&[("BOOTSTRAP_HTTP_SERVER_PORT", "http")]));
            match result {
                Err(ConfigurationError::EnvError { key, value, .. }) => {
                    assert_eq!(key, "BOOTSTRAP_HTTP_SERVER_PORT");
                    assert_eq!(value, "http");
                }
                other => panic!("unexpected result: {:?}", other),
            }
            assert_eq!(config.http_server.port, 0);
        }

        #[test]
        fn test_cli_overrides_win() {
            let mut config = Configuration::init();
            config
                .apply_overrides_from("BOOTSTRAP", lookup(&[("BOOTSTRAP_HTTP_SERVER_PORT", "9000")]))
                .unwrap();
            let args = Cli::parse_from(["bootstrap-actix", "--port", "9100", "--log-level", "info"]);
            config.apply_cli_overrides(&args);
            assert_eq!(config.http_server.port, 9100);
            assert_eq!(config.log_level, "info");
            assert!(config.http_server.tls_cert.is_empty());
        }
    }

    mod validate_tests {
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_validate_defaults() {
            assert!(Configuration::init().validate().is_ok());
        }

        #[test]
        fn test_validate_unknown_log_level() {
            let mut config = Configuration::init();
            config.log_level = String::from("chatty");
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
            config.log_level = String::from("warning");
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_validate_half_configured_tls() {
            let mut config = Configuration::init();
            config.http_server.tls_cert = String::from("tls.cert");
            assert!(config.validate().is_err());
            config.http_server.tls_key = String::from("tls.key");
            assert!(config.validate().is_ok());
        }
    }
}
