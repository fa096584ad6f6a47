// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled patterns and the ordered severity pattern set.

use regex::Regex;
use thiserror::Error;

use crate::level::SeverityLevel;

/// First line of a log message: optional indent and `[`, a date, a time and
/// an optional fractional-second suffix of at least three digits.
///
/// Whitespace is ASCII only; non-breaking and ideographic spaces do not count.
pub const MESSAGE_START: &str =
    r"^(?-u:\s)*\[?[0-9]{4}-[0-9]{2}-[0-9]{2}(?-u:\s)+[0-9]{2}:[0-9]{2}:[0-9]{2}([,.][0-9]{3,})?.*";

/// Level patterns in priority order. Plain tokens are case-sensitive; the
/// bracketed form spells out both accepted capitalizations.
pub const LEVEL_PATTERNS: [(SeverityLevel, &str); 6] = [
    (SeverityLevel::Trace, r"TRACE|\[[Tt]race\]"),
    (SeverityLevel::Debug, r"DEBUG|\[[Dd]ebug\]"),
    (SeverityLevel::Info, r"INFO|\[[Ii]nfo\]"),
    (SeverityLevel::Warn, r"WARN|\[[Ww]arn\]"),
    (SeverityLevel::Error, r"ERROR|\[[Ee]rror\]"),
    (SeverityLevel::Fatal, r"FATAL|\[[Ff]atal\]"),
];

/// Pattern compilation failure.
#[derive(Debug, Error)]
#[error("invalid pattern `{pattern}`{}: {message}", offset_suffix(.offset))]
pub struct PatternError {
    /// The pattern source that failed.
    pub pattern: String,
    /// Diagnostic from the regex compiler.
    pub message: String,
    /// Byte offset into `pattern` where the problem was found, if known.
    pub offset: Option<usize>,
}

fn offset_suffix(offset: &Option<usize>) -> String {
    match offset {
        Some(offset) => format!(" at offset {}", offset),
        None => String::new(),
    }
}

impl PatternError {
    fn from_source(pattern: &str, err: regex::Error) -> Self {
        // The syntax parser reports a span; regex::Error only carries rendered text.
        let diagnostic = match regex_syntax::Parser::new().parse(pattern) {
            Err(regex_syntax::Error::Parse(e)) => {
                Some((e.kind().to_string(), e.span().start.offset))
            }
            Err(regex_syntax::Error::Translate(e)) => {
                Some((e.kind().to_string(), e.span().start.offset))
            }
            _ => None,
        };
        match diagnostic {
            Some((message, offset)) => PatternError {
                pattern: pattern.to_string(),
                message,
                offset: Some(offset),
            },
            None => PatternError {
                pattern: pattern.to_string(),
                message: err.to_string(),
                offset: None,
            },
        }
    }
}

/// A compiled regex that only accepts non-empty matches.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
}

impl CompiledPattern {
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern).map_err(|e| PatternError::from_source(pattern, e))?;
        Ok(Self { regex })
    }

    /// True if some non-empty substring of `line` matches.
    pub fn is_match(&self, line: &str) -> bool {
        self.regex.find_iter(line).any(|m| !m.is_empty())
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// The message-start matcher plus level matchers in priority order.
///
/// Read-only after construction.
#[derive(Debug, Clone)]
pub struct PatternSet {
    start: CompiledPattern,
    levels: Vec<(SeverityLevel, CompiledPattern)>,
}

impl PatternSet {
    /// Compile the fixed English vocabulary.
    pub fn standard() -> Result<Self, PatternError> {
        Self::compile(MESSAGE_START, &LEVEL_PATTERNS)
    }

    /// Compile a message-start pattern and an ordered level table.
    ///
    /// Fails on the first pattern that does not compile.
    pub fn compile(start: &str, levels: &[(SeverityLevel, &str)]) -> Result<Self, PatternError> {
        let start = CompiledPattern::compile(start)?;
        let levels = levels
            .iter()
            .map(|(level, pattern)| Ok((*level, CompiledPattern::compile(pattern)?)))
            .collect::<Result<Vec<_>, PatternError>>()?;
        tracing::debug!("compiled {} level patterns", levels.len());
        Ok(Self { start, levels })
    }

    pub fn is_message_start(&self, line: &str) -> bool {
        self.start.is_match(line)
    }

    /// First level in priority order whose pattern matches, else `Unknown`.
    pub fn level_of(&self, line: &str) -> SeverityLevel {
        self.levels
            .iter()
            .find(|(_, pattern)| pattern.is_match(line))
            .map(|(level, _)| *level)
            .unwrap_or(SeverityLevel::Unknown)
    }

    /// Level patterns in priority order.
    pub fn levels(&self) -> impl Iterator<Item = (SeverityLevel, &CompiledPattern)> {
        self.levels.iter().map(|(level, pattern)| (*level, pattern))
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
