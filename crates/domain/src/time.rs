use chrono::NaiveTime;
use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// Wall-clock time of day with minute resolution, serialized as `HH:MM`.
///
/// All meal anchors and reminder times are plain wall-clock times. Date
/// arithmetic only happens later when a reminder time is combined with a
/// calendar date, so adding an offset here simply wraps at midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    minutes: u16,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidTimeError {
    #[error("Malformed time: {0}, expected HH:MM")]
    Malformed(String),
}

impl ClockTime {
    /// `hours` and `minutes` are taken modulo one day.
    pub const fn hm(hours: u16, minutes: u16) -> Self {
        Self {
            minutes: (hours * 60 + minutes) % MINUTES_PER_DAY,
        }
    }

    pub fn hours(&self) -> u32 {
        (self.minutes / 60) as u32
    }

    pub fn minutes_past_hour(&self) -> u32 {
        (self.minutes % 60) as u32
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.minutes as u32
    }

    /// Adds a signed minute offset, wrapping at 24h.
    pub fn add_minutes(self, offset: i32) -> Self {
        let minutes = (self.minutes as i32 + offset).rem_euclid(MINUTES_PER_DAY as i32);
        Self {
            minutes: minutes as u16,
        }
    }

    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hours(), self.minutes_past_hour(), 0)
            .expect("A clock time is always a valid time of day")
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes_past_hour())
    }
}

impl FromStr for ClockTime {
    type Err = InvalidTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let e = InvalidTimeError::Malformed(s.to_string());
        let parts = s.split(':').collect::<Vec<_>>();
        if parts.len() != 2 {
            return Err(e);
        }
        let hours = match parts[0].parse::<u16>() {
            Ok(h) if h < 24 => h,
            _ => return Err(e),
        };
        let minutes = match parts[1].parse::<u16>() {
            Ok(m) if m < 60 => m,
            _ => return Err(e),
        };
        Ok(Self::hm(hours, minutes))
    }
}

impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ClockTimeVisitor;

        impl<'de> Visitor<'de> for ClockTimeVisitor {
            type Value = ClockTime;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A valid HH:MM time of day")
            }

            fn visit_str<E>(self, value: &str) -> Result<ClockTime, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<ClockTime>()
                    .map_err(|_| E::custom(format!("Malformed time: {}", value)))
            }
        }

        deserializer.deserialize_str(ClockTimeVisitor)
    }
}
