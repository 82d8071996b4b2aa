//! Time keeping and time text for the watch face

use core::fmt;

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Weekday};

/// Capacity of the date buffer.
///
/// `Www_dd_mm_` plus the widest year chrono can represent, sign included.
const DATE_LEN: usize = 18;

/// Fixed-capacity text buffer filled with `format_no_std`
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TextBuffer<const N: usize> {
    str_buf: [u8; N],
    len: usize,
}

impl<const N: usize> TextBuffer<N> {
    /// Create buffer holding `text`, truncated to the capacity
    pub fn new(text: &str) -> Self {
        let len = text.len().min(N);
        let mut str_buf = [0; N];
        str_buf[..len].copy_from_slice(&text.as_bytes()[..len]);
        Self { str_buf, len }
    }

    /// Format `args` into a new buffer.
    ///
    /// Output that does not fit leaves the buffer empty.
    pub fn format(args: fmt::Arguments) -> Self {
        let mut str_buf = [0; N];
        let len = match format_no_std::show(&mut str_buf, args) {
            Ok(text) => text.len(),
            Err(_) => {
                warn!("Text does not fit into {} bytes", N);
                0
            }
        };
        Self { str_buf, len }
    }

    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.str_buf[..self.len]).unwrap_or("")
    }
}

impl<const N: usize> fmt::Debug for TextBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> PartialEq<&str> for TextBuffer<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Timestamp outside the representable date range
    InvalidTimestamp,
}

/// One clock reading as delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSample {
    /// Local wall-clock time
    pub time: NaiveDateTime,
    /// Host clock is set to 24 hour style
    pub is_24h: bool,
}

impl ClockSample {
    /// Create sample from local date and time
    pub fn new(time: NaiveDateTime, is_24h: bool) -> Self {
        Self { time, is_24h }
    }

    /// Create sample from a UTC epoch timestamp and the local offset in seconds
    pub fn from_timestamp(timestamp: i64, utc_offset: i32, is_24h: bool) -> Result<Self, Error> {
        let local = timestamp
            .checked_add(utc_offset as i64)
            .ok_or(Error::InvalidTimestamp)?;
        let time = DateTime::from_timestamp(local, 0)
            .ok_or(Error::InvalidTimestamp)?
            .naive_utc();

        Ok(Self { time, is_24h })
    }
}

/// Formatted time and date labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeText {
    pub hour: TextBuffer<2>,
    pub minute: TextBuffer<2>,
    pub date: TextBuffer<DATE_LEN>,
}

impl Default for TimeText {
    fn default() -> Self {
        Self {
            hour: TextBuffer::new("00"),
            minute: TextBuffer::new("00"),
            date: TextBuffer::new("Mon_01_01_2001"),
        }
    }
}

/// Converts clock samples into label text
pub struct TimeFormatter;

impl TimeFormatter {
    /// Format hour, minute and date of `sample`
    pub fn format(sample: &ClockSample) -> TimeText {
        let time = &sample.time;

        // 12 hour style drops the AM/PM suffix
        let hour = if sample.is_24h {
            time.hour()
        } else {
            time.hour12().1
        };

        TimeText {
            hour: TextBuffer::format(format_args!("{:02}", hour)),
            minute: TextBuffer::format(format_args!("{:02}", time.minute())),
            date: TextBuffer::format(format_args!(
                "{}_{:02}_{:02}_{:04}",
                weekday_abbrev(time.weekday()),
                time.day(),
                time.month(),
                time.year()
            )),
        }
    }
}

fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
