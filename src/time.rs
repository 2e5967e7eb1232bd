use serde::{Deserialize, Deserializer};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;
use thiserror::Error;

const SECS_PER_DAY: u32 = 86_400;

/// Time of day, stored as seconds since midnight.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd, Hash)]
pub struct Time(u32);

impl Time {
    pub fn hms(hours: u32, minutes: u32, seconds: u32) -> Option<Time> {
        (hours < 24 && minutes < 60 && seconds < 60)
            .then(|| Time(hours * 3600 + minutes * 60 + seconds))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time of day {0:?}, expected HH:MM or HH:MM:SS")]
pub struct ParseTimeError(String);

impl FromStr for Time {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimeError(s.to_owned());
        let two_digits = |part: &str| -> Option<u32> {
            if part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit()) {
                part.parse().ok()
            } else {
                None
            }
        };

        let mut parts = s.split(':');
        let hours = parts.next().and_then(two_digits).ok_or_else(err)?;
        let minutes = parts.next().and_then(two_digits).ok_or_else(err)?;
        let seconds = match parts.next() {
            Some(part) => two_digits(part).ok_or_else(err)?,
            None => 0,
        };
        if parts.next().is_some() {
            return Err(err());
        }

        Time::hms(hours, minutes, seconds).ok_or_else(err)
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 3600;
        let mins = self.0 % 3600 / 60;
        let secs = self.0 % 60;
        if secs == 0 {
            write!(f, "{:02}:{:02}", hours, mins)
        } else {
            write!(f, "{:02}:{:02}:{:02}", hours, mins, secs)
        }
    }
}

impl Sub<Time> for Time {
    type Output = Duration;

    /// Time elapsed from `rhs` until `self`. When `self` is earlier in the
    /// day than `rhs`, it is read as the same clock time on the next day.
    fn sub(self, rhs: Time) -> Self::Output {
        let secs = (self.0 + SECS_PER_DAY - rhs.0) % SECS_PER_DAY;
        Duration(secs / 60)
    }
}

/// Elapsed time in whole minutes.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd, Hash)]
pub struct Duration(pub u32);

impl Duration {
    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {:02}m", self.0 / 60, self.0 % 60)
    }
}
