use crate::ssl::enums::refresh_outcome::RefreshOutcome;
use log::Level;

impl RefreshOutcome {
    /// Severity of the log event for this outcome. `Served` is silent.
    pub fn level(&self) -> Option<Level> {
        match self {
            RefreshOutcome::Served => None,
            RefreshOutcome::Loaded { expired: false } => Some(Level::Info),
            RefreshOutcome::Revalidated => Some(Level::Info),
            RefreshOutcome::KeptAfterFailedRecheck { .. } => Some(Level::Error),
            _ => Some(Level::Warn),
        }
    }

    pub fn is_reload(&self) -> bool {
        matches!(
            self,
            RefreshOutcome::Loaded { .. }
                | RefreshOutcome::ReloadedAfterExpiry { .. }
                | RefreshOutcome::ReloadedModified { .. }
                | RefreshOutcome::ReloadedSignatureChanged { .. }
        )
    }

    pub fn installed_expired(&self) -> bool {
        matches!(
            self,
            RefreshOutcome::Loaded { expired: true }
                | RefreshOutcome::ReloadedAfterExpiry { expired: true }
                | RefreshOutcome::ReloadedModified { expired: true }
                | RefreshOutcome::ReloadedSignatureChanged { expired: true }
        )
    }
}

impl std::fmt::Display for RefreshOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let suffix = if self.installed_expired() {
            ", the reloaded TLS certificate has already expired"
        } else {
            ""
        };
        match self {
            RefreshOutcome::Served => write!(f, "Serving cached TLS certificate"),
            RefreshOutcome::Loaded { .. } => {
                write!(f, "No TLS certificate cached, loaded from disk{}", suffix)
            }
            RefreshOutcome::ReloadedAfterExpiry { .. } => {
                write!(f, "TLS certificate has expired, reloaded{}", suffix)
            }
            RefreshOutcome::ReloadedModified { .. } => {
                write!(f, "TLS certificate file has been modified since last refresh, reloaded{}", suffix)
            }
            RefreshOutcome::ReloadedSignatureChanged { .. } => {
                write!(f, "Detected TLS certificate signature change, reloaded{}", suffix)
            }
            RefreshOutcome::Revalidated => {
                write!(f, "TLS certificate cache duration has passed, certificate unchanged")
            }
            RefreshOutcome::KeptAfterFailedRecheck { reason } => {
                write!(f, "Failed to load TLS certificate for comparison, keeping cached certificate: {}", reason)
            }
        }
    }
}
