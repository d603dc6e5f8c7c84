use chrono::{DateTime, Utc};

/// The parts of the leaf certificate the cache uses for staleness decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafMetadata {
    pub not_after: DateTime<Utc>,
    pub signature: Vec<u8>,
    pub subject: String,
    pub serial: String,
}
