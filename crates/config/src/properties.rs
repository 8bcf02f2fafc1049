//! Reader for `.properties` key/value files
//!
//! Follows the classic line-oriented format: `#` and `!` start comment lines,
//! a key ends at the first unescaped `=`, `:` or blank, a trailing odd
//! backslash continues the entry on the next line, and `\uXXXX` escapes
//! encode UTF-16 code units.

use itest_errors::ConfigError;
use std::collections::HashMap;
use std::str::FromStr;

const BLANKS: [char; 3] = [' ', '\t', '\x0c'];

/// Parsed contents of a properties file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    /// Parse properties text
    ///
    /// Later occurrences of a key replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if an entry contains a malformed
    /// `\uXXXX` escape or an unpaired surrogate.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let mut entries = HashMap::new();
        for (line, logical) in logical_lines(input) {
            let (raw_key, raw_value) = split_entry(&logical);
            let key = unescape(raw_key, line)?;
            let value = unescape(raw_value, line)?;
            entries.insert(key, value);
        }
        Ok(Self { entries })
    }

    /// Value stored under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for Properties {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Split on `\n`, `\r\n` or a bare `\r`.
fn physical_lines(input: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = input;
    while let Some(end) = rest.find(['\r', '\n']) {
        lines.push(&rest[..end]);
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

/// Join continued lines and drop blanks and comments.
///
/// Each logical line is paired with the 1-based number of the physical line
/// it starts on.
fn logical_lines(input: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (idx, physical) in physical_lines(input).into_iter().enumerate() {
        let trimmed = physical.trim_start_matches(BLANKS);

        let (start, mut text) = match pending.take() {
            Some((start, mut text)) => {
                text.push_str(trimmed);
                (start, text)
            }
            None => {
                if trimmed.is_empty() || trimmed.starts_with(['#', '!']) {
                    continue;
                }
                (idx + 1, trimmed.to_string())
            }
        };

        let trailing = text.chars().rev().take_while(|&c| c == '\\').count();
        if trailing % 2 == 1 {
            text.pop();
            pending = Some((start, text));
        } else {
            lines.push((start, text));
        }
    }

    if let Some(last) = pending {
        lines.push(last);
    }
    lines
}

/// Split a logical line into its raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut has_separator = false;
    let mut escaped = false;

    for (idx, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = idx;
                has_separator = true;
                break;
            }
            c if BLANKS.contains(&c) => {
                key_end = idx;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = &line[key_end..];
    if has_separator {
        rest = &rest[1..];
    }
    rest = rest.trim_start_matches(BLANKS);
    if !has_separator {
        if let Some(stripped) = rest.strip_prefix(['=', ':']) {
            rest = stripped.trim_start_matches(BLANKS);
        }
    }
    (key, rest)
}

fn unescape(raw: &str, line: usize) -> Result<String, ConfigError> {
    if !raw.contains('\\') {
        return Ok(raw.to_string());
    }

    let mut out = String::with_capacity(raw.len());
    let mut units: Vec<u16> = Vec::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            flush_utf16(&mut units, &mut out, line)?;
            out.push(c);
            continue;
        }
        let Some(next) = chars.next() else {
            break;
        };
        if next == 'u' {
            let hex: String = chars.by_ref().take(4).collect();
            if hex.len() != 4 || !hex.chars().all(|h| h.is_ascii_hexdigit()) {
                return Err(ConfigError::ParseError {
                    line,
                    message: format!("malformed \\uxxxx encoding: \\u{hex}"),
                });
            }
            let unit = u16::from_str_radix(&hex, 16).map_err(|e| ConfigError::ParseError {
                line,
                message: e.to_string(),
            })?;
            units.push(unit);
            continue;
        }
        flush_utf16(&mut units, &mut out, line)?;
        out.push(match next {
            't' => '\t',
            'n' => '\n',
            'r' => '\r',
            'f' => '\x0c',
            other => other,
        });
    }

    flush_utf16(&mut units, &mut out, line)?;
    Ok(out)
}

fn flush_utf16(units: &mut Vec<u16>, out: &mut String, line: usize) -> Result<(), ConfigError> {
    if units.is_empty() {
        return Ok(());
    }
    let decoded = String::from_utf16(units).map_err(|_| ConfigError::ParseError {
        line,
        message: "unpaired surrogate in \\u escape".to_string(),
    })?;
    out.push_str(&decoded);
    units.clear();
    Ok(())
}
