// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Streaming message classification.
//!
//! Each line either starts a new message (it matches the message-start
//! pattern), continues the open message, or arrives before any message
//! was opened and is ignored. Message headers are assigned the first
//! matching level in priority order.

use std::io;

use serde::Serialize;

use crate::level::SeverityLevel;
use crate::pattern::PatternSet;
use crate::reader::Line;
use crate::sink::{LogRecord, RecordSink};

/// Per-level message counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counters {
    by_level: [u64; 7],
    total: u64,
}

impl Counters {
    fn record(&mut self, level: SeverityLevel) {
        self.total += 1;
        self.by_level[level.index()] += 1;
    }

    /// Messages counted for `level`.
    pub fn get(&self, level: SeverityLevel) -> u64 {
        self.by_level[level.index()]
    }

    /// All messages, including those with no recognized level.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn unknown(&self) -> u64 {
        self.get(SeverityLevel::Unknown)
    }

    /// Messages attributed to one of the six levels.
    pub fn classified(&self) -> u64 {
        SeverityLevel::ALL.iter().map(|level| self.get(*level)).sum()
    }
}

impl Serialize for Counters {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(SeverityLevel::ALL.len()))?;
        for level in SeverityLevel::ALL {
            map.serialize_entry(level.name(), &self.get(level))?;
        }
        map.end()
    }
}

/// What a single line did to the classifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The line opened a new message with this level.
    Started(SeverityLevel),
    /// The line was appended to the open message.
    Continued,
    /// No message was open; the line was ignored.
    Orphan,
}

/// Result of a full classification pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    #[serde(rename = "levels")]
    pub counters: Counters,
    /// Lines read, including continuations and orphans.
    pub lines: u64,
    pub truncated_lines: u64,
    pub orphan_lines: u64,
    /// Records handed to the sink successfully.
    pub stored: u64,
    /// Messages that did not end up in the record store.
    pub persistence_failures: u64,
    /// A record store was requested but could not be used or committed.
    pub store_disabled: bool,
}

impl Summary {
    /// Account for a store that kept nothing: every message is a failure.
    pub fn mark_store_lost(&mut self) {
        self.store_disabled = true;
        self.stored = 0;
        self.persistence_failures = self.counters.total();
    }
}

/// Pending message while its body is being collected.
struct Pending {
    record: LogRecord,
    body_lines: usize,
}

impl Pending {
    fn append(&mut self, line: &str) {
        if self.body_lines > 0 {
            self.record.body.push('\n');
        }
        self.record.body.push_str(line);
        self.body_lines += 1;
    }
}

enum State {
    Idle,
    /// A header was seen. The record is only built when a sink is attached.
    InMessage(Option<Pending>),
}

/// Line classifier with running counters.
pub struct Classifier<'s> {
    patterns: PatternSet,
    sink: Option<&'s mut dyn RecordSink>,
    state: State,
    summary: Summary,
}

impl<'s> Classifier<'s> {
    /// Classifier that only counts.
    pub fn new(patterns: PatternSet) -> Self {
        Self {
            patterns,
            sink: None,
            state: State::Idle,
            summary: Summary::default(),
        }
    }

    /// Classifier that also forwards every finished message to `sink`.
    pub fn with_sink(patterns: PatternSet, sink: &'s mut dyn RecordSink) -> Self {
        Self {
            sink: Some(sink),
            ..Self::new(patterns)
        }
    }

    /// Classify one line.
    pub fn process_line(&mut self, line: &str) -> Outcome {
        self.summary.lines += 1;

        if !self.patterns.is_message_start(line) {
            return match &mut self.state {
                State::Idle => {
                    self.summary.orphan_lines += 1;
                    Outcome::Orphan
                }
                State::InMessage(pending) => {
                    if let Some(pending) = pending {
                        pending.append(line);
                    }
                    Outcome::Continued
                }
            };
        }

        self.flush();
        let level = self.patterns.level_of(line);
        self.summary.counters.record(level);
        let pending = self.sink.as_ref().map(|_| Pending {
            record: LogRecord::new(line, level),
            body_lines: 0,
        });
        self.state = State::InMessage(pending);
        Outcome::Started(level)
    }

    /// Classify every line from `lines`, stopping at the first read error.
    pub fn run<I>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = io::Result<Line>>,
    {
        for line in lines {
            let line = line?;
            if line.truncated {
                self.summary.truncated_lines += 1;
            }
            self.process_line(&line.text);
        }
        Ok(())
    }

    /// Counters so far.
    pub fn counters(&self) -> &Counters {
        &self.summary.counters
    }

    /// End of input: flush the open message and return the totals.
    pub fn finish(mut self) -> Summary {
        self.flush();
        self.summary
    }

    fn flush(&mut self) {
        let state = std::mem::replace(&mut self.state, State::Idle);
        let State::InMessage(Some(pending)) = state else {
            return;
        };
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        match sink.store(pending.record) {
            Ok(()) => self.summary.stored += 1,
            Err(e) => {
                self.summary.persistence_failures += 1;
                tracing::warn!("failed to store record: {}", e);
            }
        }
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
