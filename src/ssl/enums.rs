/// Errors raised while reading or parsing a certificate/key pair.
pub mod certificate_error;

/// Outcome of a certificate cache refresh decision.
pub mod refresh_outcome;
