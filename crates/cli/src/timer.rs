// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Monotonic timing of the classification pass.

use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;

/// Running timer started at a monotonic reference point.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    started: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn stop(self) -> Elapsed {
        Elapsed::from(self.started.elapsed())
    }
}

/// Elapsed time split for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Elapsed {
    duration: Duration,
}

impl Elapsed {
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn hours(&self) -> u64 {
        self.duration.as_secs() / 3600
    }

    pub fn minutes(&self) -> u64 {
        (self.duration.as_secs() % 3600) / 60
    }

    /// Whole seconds within the minute.
    pub fn seconds(&self) -> u64 {
        self.duration.as_secs() % 60
    }

    pub fn millis(&self) -> u32 {
        self.duration.subsec_millis()
    }
}

impl From<Duration> for Elapsed {
    fn from(duration: Duration) -> Self {
        Self { duration }
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}

impl Serialize for Elapsed {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("Elapsed", 4)?;
        s.serialize_field("hours", &self.hours())?;
        s.serialize_field("minutes", &self.minutes())?;
        s.serialize_field("seconds", &self.seconds())?;
        s.serialize_field("millis", &self.millis())?;
        s.end()
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
