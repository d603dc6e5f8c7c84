/// Parsed certificate chain, signing key and leaf metadata.
pub mod certificate_bundle;

/// Cached bundle together with its last refresh time.
pub mod cached_certificate;

/// The self-refreshing certificate cache.
pub mod file_based_certificate;

/// rustls resolver wrapping the certificate cache.
pub mod file_based_certificate_resolver;

/// PEM file backed certificate source.
pub mod file_certificate_source;

/// Leaf certificate metadata (not-after, signature).
pub mod leaf_metadata;

/// Clock backed by the system time.
pub mod system_clock;
