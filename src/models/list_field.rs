//! List-valued cell parsing.
//!
//! Several columns encode an ordered sequence in a single cell, either as a
//! JSON array literal (`["a","b"]`) or as comma-delimited text (`a, b`).
//! The encoding is sniffed once here; every checker that needs list
//! semantics goes through this module so the two encodings always normalize
//! to the same token sequence.

use serde_json::Value;
use thiserror::Error;

/// A list-valued cell could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid list format")]
pub struct ListParseError;

/// The two encodings a list-valued cell may use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListField {
    /// Trimmed value starts with `[` — a JSON array literal.
    JsonArray(String),
    /// Plain comma-separated tokens.
    Delimited(String),
}

impl ListField {
    /// Classifies a raw cell value by its leading character.
    pub fn classify(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with('[') {
            ListField::JsonArray(trimmed.to_string())
        } else {
            ListField::Delimited(trimmed.to_string())
        }
    }

    /// Normalizes the cell into an ordered sequence of string tokens.
    ///
    /// JSON numbers keep their literal form (`[1, 2]` → `"1"`, `"2"`), so a
    /// numeric list parses identically under both encodings.
    pub fn parse(&self) -> Result<Vec<String>, ListParseError> {
        match self {
            ListField::JsonArray(raw) => {
                let value: Value = serde_json::from_str(raw).map_err(|_| ListParseError)?;
                match value {
                    Value::Array(items) => Ok(items.iter().map(element_text).collect()),
                    _ => Err(ListParseError),
                }
            }
            ListField::Delimited(raw) => {
                if raw.is_empty() {
                    return Ok(Vec::new());
                }
                Ok(raw.split(',').map(|token| token.trim().to_string()).collect())
            }
        }
    }
}

/// Classifies and parses a raw cell in one step.
pub fn parse_list(raw: &str) -> Result<Vec<String>, ListParseError> {
    ListField::classify(raw).parse()
}

/// Splits tokens into parsed integers and offending non-numeric tokens.
///
/// A token qualifies only when it is non-empty and every character is an
/// ASCII digit; anything else (signs, decimals, ranges) is an offender.
pub fn split_numeric(tokens: &[String]) -> (Vec<i64>, Vec<String>) {
    let mut numbers = Vec::new();
    let mut offenders = Vec::new();
    for token in tokens {
        match parse_digits(token) {
            Some(n) => numbers.push(n),
            None => offenders.push(token.clone()),
        }
    }
    (numbers, offenders)
}

/// Parses a raw cell directly into integers, discarding non-numeric tokens.
///
/// For checkers that only need the usable values — the format pass has
/// already reported any offenders.
pub fn parse_numeric_list(raw: &str) -> Result<Vec<i64>, ListParseError> {
    let tokens = parse_list(raw)?;
    Ok(split_numeric(&tokens).0)
}

fn parse_digits(token: &str) -> Option<i64> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

fn element_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
