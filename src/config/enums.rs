/// Errors raised while loading, overriding or validating the configuration.
pub mod configuration_error;
