//! Timestamp formatting for terminal output.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Borrowed `Timestamp` rendered in the system timezone.
///
/// The API reports all times in UTC; terminal output shows them in local
/// time as `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zoned = self.0.to_zoned(TimeZone::system());
        write!(f, "{}", zoned.strftime("%Y-%m-%d %H:%M:%S %Z"))
    }
}
