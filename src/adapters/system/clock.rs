//! Implements Clock with the host wall clock.

use crate::ports::Clock;
use chrono::{DateTime, Local};

/// Real wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
