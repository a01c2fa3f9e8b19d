//! UTC dates for feed entries.
//!
//! `DateTimeUtc` carries a calendar date plus an optional time of day and
//! never consults the local timezone or the system clock, so a literal like
//! `"2023-06-27"` always means the same day on every host.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::parse("2023-06-27").unwrap();
//! assert_eq!(dt.to_rfc2822(), "Tue, 27 Jun 2023 00:00:00 GMT");
//! assert_eq!(dt.to_rfc3339(), "2023-06-27T00:00:00Z");
//! ```

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, Visitor, value::MapAccessDeserializer},
};
use std::{fmt, str::FromStr};
use toml::value::{Datetime, Offset};
use thiserror::Error;

/// Date parse/validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ, got `{0}`")]
    Format(String),

    #[error("{field} is invalid: {value}")]
    Range { field: &'static str, value: u16 },
}

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse from "YYYY-MM-DD" or "YYYY-MM-DDTHH:MM:SSZ" format
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    pub fn validate(&self) -> Result<(), DateError> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            return Err(DateError::Range {
                field: "month",
                value: month.into(),
            });
        }
        if day == 0 || day > Self::days_in_month(year, month) {
            return Err(DateError::Range {
                field: "day",
                value: day.into(),
            });
        }
        if hour > 23 {
            return Err(DateError::Range {
                field: "hour",
                value: hour.into(),
            });
        }
        if minute > 59 {
            return Err(DateError::Range {
                field: "minute",
                value: minute.into(),
            });
        }
        if second > 59 {
            return Err(DateError::Range {
                field: "second",
                value: second.into(),
            });
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// True when no time-of-day component was given.
    pub const fn is_date_only(self) -> bool {
        self.hour == 0 && self.minute == 0 && self.second == 0
    }

    /// Format as RFC 3339 (ISO 8601) for Atom feeds.
    ///
    /// Returns: `YYYY-MM-DDTHH:MM:SSZ`
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }

    /// Format as RFC 2822 for RSS `pubDate`.
    pub fn to_rfc2822(self) -> String {
        const WEEKDAYS: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];

        format!(
            "{}, {:02} {} {:04} {:02}:{:02}:{:02} GMT",
            WEEKDAYS[self.weekday_index()],
            self.day,
            MONTHS[(self.month - 1) as usize],
            self.year,
            self.hour,
            self.minute,
            self.second
        )
    }

    /// Zeller's congruence, 0 = Saturday.
    #[inline]
    #[allow(clippy::cast_sign_loss)] // Result of % 7 is always 0-6
    fn weekday_index(self) -> usize {
        let (y, m) = if self.month < 3 {
            (i32::from(self.year) - 1, i32::from(self.month) + 12)
        } else {
            (i32::from(self.year), i32::from(self.month))
        };
        let d = i32::from(self.day);
        ((d + (13 * (m + 1)) / 5 + y + y / 4 - y / 100 + y / 400) % 7) as usize
    }
}

impl FromStr for DateTimeUtc {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let bad = || DateError::Format(s.to_string());

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(bad());
        }

        let year = parse_u16(&bytes[0..4]).ok_or_else(bad)?;
        let month = parse_u8(&bytes[5..7]).ok_or_else(bad)?;
        let day = parse_u8(&bytes[8..10]).ok_or_else(bad)?;

        let (hour, minute, second) = match bytes.len() {
            10 => (0, 0, 0),
            20 if bytes[10] == b'T' && bytes[13] == b':' && bytes[16] == b':' && bytes[19] == b'Z' => (
                parse_u8(&bytes[11..13]).ok_or_else(bad)?,
                parse_u8(&bytes[14..16]).ok_or_else(bad)?,
                parse_u8(&bytes[17..19]).ok_or_else(bad)?,
            ),
            _ => return Err(bad()),
        };

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate()?;
        Ok(dt)
    }
}

impl fmt::Display for DateTimeUtc {
    /// Date-only values print as `YYYY-MM-DD`, the rest as RFC 3339.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_date_only() {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        } else {
            f.write_str(&self.to_rfc3339())
        }
    }
}

impl Serialize for DateTimeUtc {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Native TOML dates (`date = 2023-06-27`). Offsets other than UTC are
/// rejected; fractional seconds are dropped.
impl TryFrom<Datetime> for DateTimeUtc {
    type Error = DateError;

    fn try_from(value: Datetime) -> Result<Self, Self::Error> {
        let bad = || DateError::Format(value.to_string());

        let date = value.date.ok_or_else(bad)?;
        if value.offset.is_some_and(|offset| offset != Offset::Z) {
            return Err(bad());
        }
        let (hour, minute, second) = value
            .time
            .map_or((0, 0, 0), |t| (t.hour, t.minute, t.second));

        let dt = Self::new(date.year, date.month, date.day, hour, minute, second);
        dt.validate()?;
        Ok(dt)
    }
}

impl<'de> Deserialize<'de> for DateTimeUtc {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DateTimeVisitor)
    }
}

/// Accepts a date string or a TOML datetime.
struct DateTimeVisitor;

impl<'de> Visitor<'de> for DateTimeVisitor {
    type Value = DateTimeUtc;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a date like 2023-06-27 or 2023-06-27T10:00:00Z")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        let datetime = Datetime::deserialize(MapAccessDeserializer::new(map))?;
        DateTimeUtc::try_from(datetime).map_err(de::Error::custom)
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}
