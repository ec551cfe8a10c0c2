//! Parser for line-oriented `key=value` properties files.
//!
//! Supports the usual properties syntax:
//! - `#` and `!` comment lines, blank lines
//! - `=`, `:` or whitespace as the key/value separator
//! - line continuation with a trailing backslash
//! - `\t`, `\n`, `\r`, `\f` and `\uXXXX` escapes
//!
//! Input is decoded as UTF-8, falling back to ISO-8859-1 when it is not
//! valid UTF-8.

use crate::error::{LibVersionError, Result};
use std::collections::HashMap;
use std::io::Read;

/// Parsed key/value pairs of a properties file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    /// Create an empty property set
    pub fn new() -> Self {
        Properties::default()
    }

    /// Reads the whole stream and parses it.
    ///
    /// The reader is consumed but not closed; the caller owns its lifetime.
    ///
    /// # Returns
    /// * `Ok(Properties)` - Parsed entries
    /// * `Err` - On read failure or a malformed escape
    pub fn load<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => decode_latin1(e.as_bytes()),
        };
        Self::parse(&content)
    }

    /// Parses properties from an in-memory string.
    ///
    /// Later occurrences of a key override earlier ones.
    pub fn parse(input: &str) -> Result<Self> {
        let mut properties = Properties::new();
        let mut lines = physical_lines(input).enumerate();

        while let Some((index, raw)) = lines.next() {
            let line = raw.trim_start_matches(is_blank);
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let line_number = index + 1;
            let mut logical = line.to_string();
            while ends_with_continuation(&logical) {
                logical.pop();
                match lines.next() {
                    Some((_, next)) => logical.push_str(next.trim_start_matches(is_blank)),
                    None => break,
                }
            }

            let (raw_key, raw_value) = split_entry(&logical);
            let key = unescape(raw_key, line_number)?;
            let value = unescape(raw_value, line_number)?;
            properties.insert(key, value);
        }

        Ok(properties)
    }

    /// Returns the value for `key`, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the value for `key`, or `default` when the key is absent.
    ///
    /// A key mapped to an empty string is present and returns `""`.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Sets a property, replacing any previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every byte maps to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Splits on `\n`, `\r\n` and lone `\r`.
fn physical_lines(input: &str) -> impl Iterator<Item = &str> {
    input.split('\n').flat_map(|line| {
        let line = line.strip_suffix('\r').unwrap_or(line);
        line.split('\r')
    })
}

/// A line continues when it ends in an odd number of backslashes.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Splits a logical line into its raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || is_blank(c) {
            key_end = i;
            break;
        }
    }

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start_matches(is_blank);
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start_matches(is_blank);
    }
    (key, rest)
}

fn unescape(raw: &str, line: usize) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let unit = read_code_unit(&mut chars, line)?;
                out.push(decode_code_unit(unit, &mut chars, line)?);
            }
            Some(other) => out.push(other),
            // Dangling backslash from a continuation at end of input
            None => {}
        }
    }

    Ok(out)
}

fn read_code_unit(chars: &mut std::str::Chars<'_>, line: usize) -> Result<u32> {
    let mut unit = 0u32;
    for _ in 0..4 {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or_else(|| LibVersionError::properties(line, "Malformed \\uxxxx encoding"))?;
        unit = unit * 16 + digit;
    }
    Ok(unit)
}

/// Turns a UTF-16 code unit into a char, pulling a trailing `\uXXXX` low
/// surrogate from the input when `unit` is a high surrogate.
fn decode_code_unit(unit: u32, chars: &mut std::str::Chars<'_>, line: usize) -> Result<char> {
    if let Some(c) = char::from_u32(unit) {
        return Ok(c);
    }

    if (0xD800..0xDC00).contains(&unit) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            let low = read_code_unit(&mut lookahead, line)?;
            if (0xDC00..0xE000).contains(&low) {
                *chars = lookahead;
                let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                if let Some(c) = char::from_u32(combined) {
                    return Ok(c);
                }
            }
        }
    }

    Err(LibVersionError::properties(
        line,
        format!("Unpaired surrogate \\u{:04X}", unit),
    ))
}
