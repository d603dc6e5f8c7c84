/// What a single pass through the certificate cache decided to do.
///
/// The `expired` flag on the reload variants tells whether the freshly
/// installed certificate was already past its not-after timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The cached certificate was returned without touching the disk.
    Served,
    /// Nothing was cached, the certificate was loaded from disk.
    Loaded { expired: bool },
    /// The cached certificate had expired and was replaced.
    ReloadedAfterExpiry { expired: bool },
    /// The certificate file changed on disk since the last refresh.
    ReloadedModified { expired: bool },
    /// The on-disk leaf carried a different signature than the cached one.
    ReloadedSignatureChanged { expired: bool },
    /// The cache duration passed but the on-disk certificate is unchanged.
    Revalidated,
    /// The re-check load failed, the cached certificate is still served.
    KeptAfterFailedRecheck { reason: String },
}
