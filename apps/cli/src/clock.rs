//! Wall-clock time source. The only place the system clock is read.

use chrono::{DateTime, Utc};
use storefront_core::Clock;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
