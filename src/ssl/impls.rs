//! Implementation blocks for SSL data structures.

/// CertificateBundle: PEM parsing, expiry and signature comparison.
pub mod certificate_bundle;

/// FileBasedCertificate: the refresh decision and reload procedure.
pub mod file_based_certificate;

/// FileBasedCertificateResolver: rustls `ResolvesServerCert`.
pub mod file_based_certificate_resolver;

/// FileCertificateSource: reads the PEM files from disk.
pub mod file_certificate_source;

/// LeafMetadata: extraction from a DER encoded certificate.
pub mod leaf_metadata;

/// RefreshOutcome: log level and message mapping.
pub mod refresh_outcome;

pub mod system_clock;
