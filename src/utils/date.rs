//! UTC datetime utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` struct for the two timestamps the
//! generator emits: ISO 8601 (`sitemap.xml`, `og:updated_time`) and RFC 2822
//! (`feed.xml`).
//!
//! # Accepted inputs
//!
//! - `YYYY-MM-DD`
//! - `YYYY-MM-DDTHH:MM[:SS[.fff]]` with an optional `Z` or `±HH:MM` offset
//!   (a space may replace the `T`)
//! - RFC 2822, e.g. `Mon, 01 Jan 2024 10:00:00 GMT` or `... +0200`
//!
//! Offsets are folded into the UTC value, so comparisons are by instant.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::parse("2024-06-15T14:30:45+02:00").unwrap();
//! assert_eq!(dt.to_rfc3339(), "2024-06-15T12:30:45Z");
//! assert_eq!(dt.to_rfc2822(), "Sat, 15 Jun 2024 12:30:45 GMT");
//! ```

use anyhow::{Result, bail};
use std::time::SystemTime;

/// Environment variable that pins the build clock (reproducible builds).
pub const SOURCE_DATE_EPOCH: &str = "SOURCE_DATE_EPOCH";

const SECS_PER_DAY: i64 = 86_400;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
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

    /// Current wall-clock time.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_unix(i64::try_from(secs).unwrap_or(0))
    }

    /// The clock a build run stamps its artifacts with.
    ///
    /// Honors `SOURCE_DATE_EPOCH` when it holds a valid number of seconds.
    pub fn build_time() -> Self {
        std::env::var(SOURCE_DATE_EPOCH)
            .ok()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .map_or_else(Self::now, Self::from_unix)
    }

    /// Build from seconds since the Unix epoch.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_unix(secs: i64) -> Self {
        let days = secs.div_euclid(SECS_PER_DAY);
        let rem = secs.rem_euclid(SECS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        Self::new(
            year.clamp(0, 9999) as u16,
            month,
            day,
            (rem / 3600) as u8,
            ((rem / 60) % 60) as u8,
            (rem % 60) as u8,
        )
    }

    /// Seconds since the Unix epoch.
    pub fn unix_timestamp(self) -> i64 {
        let days = days_from_civil(i64::from(self.year), self.month, self.day);
        days * SECS_PER_DAY
            + i64::from(self.hour) * 3600
            + i64::from(self.minute) * 60
            + i64::from(self.second)
    }

    /// Parse any of the supported textual forms (see module docs).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::parse_iso(s).or_else(|| Self::parse_rfc2822(s))
    }

    fn parse_iso(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }
        let year = parse_u16(&bytes[0..4])?;
        let month = parse_u8(&bytes[5..7])?;
        let day = parse_u8(&bytes[8..10])?;

        if bytes.len() == 10 {
            let dt = Self::from_ymd(year, month, day);
            dt.validate().ok()?;
            return Some(dt);
        }

        if !matches!(bytes[10], b'T' | b't' | b' ') || bytes.len() < 16 || bytes[13] != b':' {
            return None;
        }
        let hour = parse_u8(&bytes[11..13])?;
        let minute = parse_u8(&bytes[14..16])?;
        let mut rest = &s[16..];

        let mut second = 0;
        if let Some(tail) = rest.strip_prefix(':') {
            second = parse_u8(tail.as_bytes().get(0..2)?)?;
            rest = &tail[2..];
        }
        // Fractional seconds are dropped.
        if let Some(tail) = rest.strip_prefix('.') {
            let digits = tail.bytes().take_while(u8::is_ascii_digit).count();
            if digits == 0 {
                return None;
            }
            rest = &tail[digits..];
        }

        let offset = parse_offset(rest)?;
        let local = Self::new(year, month, day, hour, minute, second);
        local.validate().ok()?;
        Some(Self::from_unix(local.unix_timestamp() - offset))
    }

    fn parse_rfc2822(s: &str) -> Option<Self> {
        // Optional leading weekday: "Mon, "
        let s = match s.split_once(',') {
            Some((_, rest)) => rest.trim(),
            None => s,
        };
        let mut parts = s.split_whitespace();

        let day: u8 = parts.next()?.parse().ok()?;
        let month_name = parts.next()?;
        let month = MONTHS
            .iter()
            .position(|m| m.eq_ignore_ascii_case(month_name))?;
        let year: u16 = parts.next()?.parse().ok()?;

        let (hour, minute, second) = match parts.next() {
            Some(time) => {
                let mut hms = time.split(':');
                let hour = hms.next()?.parse().ok()?;
                let minute = hms.next()?.parse().ok()?;
                let second = match hms.next() {
                    Some(sec) => sec.parse().ok()?,
                    None => 0,
                };
                (hour, minute, second)
            }
            None => (0, 0, 0),
        };

        let offset = match parts.next() {
            None | Some("GMT" | "UT" | "UTC" | "Z") => 0,
            Some(zone) => parse_compact_offset(zone)?,
        };

        #[allow(clippy::cast_possible_truncation)]
        let local = Self::new(year, month as u8 + 1, day, hour, minute, second);
        local.validate().ok()?;
        Some(Self::from_unix(local.unix_timestamp() - offset))
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
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

    /// Format as RFC 3339 (ISO 8601).
    ///
    /// Returns: `YYYY-MM-DDTHH:MM:SSZ`
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }

    pub fn to_rfc2822(self) -> String {
        const WEEKDAYS: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];

        // Zeller's congruence for weekday calculation
        let weekday = self.weekday_index();

        format!(
            "{}, {:02} {} {:04} {:02}:{:02}:{:02} GMT",
            WEEKDAYS[weekday],
            self.day,
            MONTHS[(self.month - 1) as usize],
            self.year,
            self.hour,
            self.minute,
            self.second
        )
    }

    #[inline]
    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    #[allow(clippy::cast_sign_loss)] // Result of % 7 is always 0-6
    fn weekday_index(&self) -> usize {
        let (y, m) = if self.month < 3 {
            (i32::from(self.year) - 1, i32::from(self.month) + 12)
        } else {
            (i32::from(self.year), i32::from(self.month))
        };
        let d = i32::from(self.day);
        ((d + (13 * (m + 1)) / 5 + y + y / 4 - y / 100 + y / 400) % 7) as usize
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400);
    let m = i64::from(month);
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Parse an ISO offset suffix (`""`, `Z`, `+HH:MM`, `-HHMM`) into seconds.
fn parse_offset(s: &str) -> Option<i64> {
    match s {
        "" | "Z" | "z" => Some(0),
        _ => parse_compact_offset(&s.replace(':', "")),
    }
}

/// Parse `+HHMM` / `-HHMM` into seconds east of UTC.
fn parse_compact_offset(s: &str) -> Option<i64> {
    let sign = match s.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let digits = s.get(1..)?.as_bytes();
    if digits.len() != 4 {
        return None;
    }
    let hours = i64::from(parse_u8(&digits[0..2])?);
    let minutes = i64::from(parse_u8(&digits[2..4])?);
    Some(sign * (hours * 3600 + minutes * 60))
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
