/// Source of certificate/key pairs (files on disk in production).
pub mod certificate_source;

/// Wall clock abstraction used for expiry and cache duration decisions.
pub mod clock;
