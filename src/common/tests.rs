#[cfg(test)]
mod common_tests {
    mod parse_log_level_tests {
        use crate::common::common::parse_log_level;
        use log::LevelFilter;

        #[test]
        fn test_parse_known_levels() {
            assert_eq!(parse_log_level("off"), Some(LevelFilter::Off));
            assert_eq!(parse_log_level("trace"), Some(LevelFilter::Trace));
            assert_eq!(parse_log_level("debug"), Some(LevelFilter::Debug));
            assert_eq!(parse_log_level("info"), Some(LevelFilter::Info));
            assert_eq!(parse_log_level("warn"), Some(LevelFilter::Warn));
            assert_eq!(parse_log_level("error"), Some(LevelFilter::Error));
        }

        #[test]
        fn test_parse_aliases_and_case() {
            assert_eq!(parse_log_level("warning"), Some(LevelFilter::Warn));
            assert_eq!(parse_log_level("critical"), Some(LevelFilter::Error));
            assert_eq!(parse_log_level("INFO"), Some(LevelFilter::Info));
        }

        #[test]
        fn test_parse_unknown_level() {
            assert_eq!(parse_log_level("verbose"), None);
            assert_eq!(parse_log_level(""), None);
        }
    }

    mod custom_error_tests {
        use crate::common::structs::custom_error::CustomError;

        #[test]
        fn test_custom_error_display() {
            let error = CustomError::new("create config.toml file");
            assert_eq!(error.to_string(), "create config.toml file");
            assert_eq!(error.message(), "create config.toml file");
        }

        #[test]
        fn test_custom_error_is_std_error() {
            let error: Box<dyn std::error::Error> = Box::new(CustomError::new("boom"));
            assert_eq!(format!("{}", error), "boom");
        }
    }
}
