//! Clock Abstraction
//!
//! Wall-clock access for toast stamps and item creation dates.

use chrono::{Local, NaiveDate, Utc};

pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_ms(&self) -> i64;

    /// Today's local date
    fn today(&self) -> NaiveDate;

    /// Today's date as `YYYY-MM-DD`
    fn today_string(&self) -> String {
        self.today().format("%Y-%m-%d").to_string()
    }
}

/// Real clock backed by chrono (uses `Date` under wasm)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a date, with a settable millisecond counter
#[derive(Debug, Clone)]
pub struct FixedClock {
    pub date: NaiveDate,
    pub now_ms: std::cell::Cell<i64>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            now_ms: std::cell::Cell::new(0),
        }
    }

    pub fn set_ms(&self, ms: i64) {
        self.now_ms.set(ms);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.now_ms.get()
    }

    fn today(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_string_format() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(clock.today_string(), "2024-03-09");
    }
}
