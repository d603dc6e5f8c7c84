use crate::ssl::structs::system_clock::SystemClock;
use crate::ssl::traits::clock::Clock;
use chrono::{DateTime, Utc};

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
