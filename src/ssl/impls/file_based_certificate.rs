use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::refresh_outcome::RefreshOutcome;
use crate::ssl::structs::cached_certificate::CachedCertificate;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::file_based_certificate::FileBasedCertificate;
use crate::ssl::structs::file_certificate_source::FileCertificateSource;
use crate::ssl::structs::system_clock::SystemClock;
use crate::ssl::traits::certificate_source::CertificateSource;
use crate::ssl::traits::clock::Clock;
use chrono::{DateTime, TimeDelta, Utc};
use log::error;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// How soon an already expired certificate is re-checked after a reload,
/// provided the cache duration is longer than this.
pub const EXPIRED_RETRY_INTERVAL: Duration = Duration::from_secs(60);

impl<S, C> std::fmt::Debug for FileBasedCertificate<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("FileBasedCertificate");
        debug.field("cache_duration", &self.cache_duration);
        // Formatting from inside refresh() must not wait on its own lock.
        match self.state.try_lock() {
            Some(state) => debug
                .field("has_certificate", &state.is_some())
                .field("last_refresh", &state.as_ref().map(|cached| cached.last_refresh)),
            None => debug.field("state", &"<locked>"),
        };
        debug.finish()
    }
}

impl FileBasedCertificate<FileCertificateSource, SystemClock> {
    pub fn new(
        cert_path: impl Into<PathBuf>,
        key_path: impl Into<PathBuf>,
        cache_duration: Duration,
    ) -> Self {
        Self::with_source(
            FileCertificateSource::new(cert_path, key_path),
            SystemClock,
            cache_duration,
        )
    }
}

impl<S: CertificateSource, C: Clock> FileBasedCertificate<S, C> {
    pub fn with_source(source: S, clock: C, cache_duration: Duration) -> Self {
        Self {
            source,
            clock,
            cache_duration,
            state: Mutex::new(None),
        }
    }

    pub fn cache_duration(&self) -> Duration {
        self.cache_duration
    }

    /// The cached certificate, without any staleness check or disk access.
    pub fn current(&self) -> Option<Arc<CertificateBundle>> {
        self.state.lock().as_ref().map(|cached| Arc::clone(&cached.bundle))
    }

    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.state.lock().as_ref().map(|cached| cached.last_refresh)
    }

    /// Returns a usable certificate, reloading it from disk when needed.
    ///
    /// Fails only when no certificate is cached and none can be loaded.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_certificate(&self) -> Result<Arc<CertificateBundle>, CertificateError> {
        match self.refresh() {
            Ok((bundle, outcome)) => {
                if let Some(level) = outcome.level() {
                    log::log!(level, "[CERTIFICATE] {}", outcome);
                }
                Ok(bundle)
            }
            Err(error) => {
                error!("[CERTIFICATE] Unable to load TLS certificate: {}", error);
                Err(error)
            }
        }
    }

    /// Runs one pass of the refresh decision under the cache lock and reports
    /// what happened instead of logging it.
    pub fn refresh(&self) -> Result<(Arc<CertificateBundle>, RefreshOutcome), CertificateError> {
        let mut state = self.state.lock();
        let now = self.clock.now();

        let Some((cached, last_refresh)) = state
            .as_ref()
            .map(|cached| (Arc::clone(&cached.bundle), cached.last_refresh))
        else {
            let (bundle, expired) = self.reload(&mut state, now)?;
            return Ok((bundle, RefreshOutcome::Loaded { expired }));
        };

        if cached.is_expired_at(now) {
            let (bundle, expired) = self.reload(&mut state, now)?;
            return Ok((bundle, RefreshOutcome::ReloadedAfterExpiry { expired }));
        }

        if !self.cache_duration_elapsed(last_refresh, now) {
            return Ok((cached, RefreshOutcome::Served));
        }

        // Cheap check first: a newer mtime means the file was rewritten.
        if let Ok(modified) = self.source.modified()
            && modified > last_refresh
        {
            let (bundle, expired) = self.reload(&mut state, now)?;
            return Ok((bundle, RefreshOutcome::ReloadedModified { expired }));
        }

        match self.source.load() {
            Err(error) => Ok((
                cached,
                RefreshOutcome::KeptAfterFailedRecheck {
                    reason: error.to_string(),
                },
            )),
            Ok(candidate) if !candidate.same_signature(&cached) => {
                let (bundle, expired) = self.install(&mut state, candidate, now);
                Ok((bundle, RefreshOutcome::ReloadedSignatureChanged { expired }))
            }
            Ok(_) => {
                if let Some(current) = state.as_mut() {
                    current.last_refresh = now;
                }
                Ok((cached, RefreshOutcome::Revalidated))
            }
        }
    }

    fn cache_duration_elapsed(&self, last_refresh: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        // A clock that went backwards counts as "not elapsed".
        match (now - last_refresh).to_std() {
            Ok(elapsed) => elapsed > self.cache_duration,
            Err(_) => false,
        }
    }

    fn reload(
        &self,
        state: &mut Option<CachedCertificate>,
        now: DateTime<Utc>,
    ) -> Result<(Arc<CertificateBundle>, bool), CertificateError> {
        *state = None;
        let bundle = self.source.load()?;
        Ok(self.install(state, bundle, now))
    }

    fn install(
        &self,
        state: &mut Option<CachedCertificate>,
        bundle: CertificateBundle,
        now: DateTime<Utc>,
    ) -> (Arc<CertificateBundle>, bool) {
        let expired = bundle.is_expired_at(now);
        let last_refresh = if expired && self.cache_duration > EXPIRED_RETRY_INTERVAL {
            // Backdate so the next staleness check fires in about a minute.
            TimeDelta::from_std(self.cache_duration - EXPIRED_RETRY_INTERVAL)
                .ok()
                .and_then(|backdate| now.checked_sub_signed(backdate))
                .unwrap_or(DateTime::<Utc>::MIN_UTC)
        } else {
            now
        };
        let bundle = Arc::new(bundle);
        *state = Some(CachedCertificate {
            bundle: Arc::clone(&bundle),
            last_refresh,
        });
        (bundle, expired)
    }
}
