//! Problem Resources
//!
//! Some problems need input data that is too large for an argument, such as
//! a 1000-digit number or a 20x20 grid. It lives in
//! `<resources_dir>/problemNNN.txt`:
//!
//! ```text
//! matrix          <- kind: integer | float | matrix | string
//! 08 02 22 97     <- payload
//! 49 49 99 40
//! ```
//!
//! `integer`, `float` and `string` payloads are the lines joined without a
//! separator; `matrix` payloads are whitespace-separated integer rows.

use crate::error::ResourceError;
use std::fs;
use std::io;
use std::path::Path;

/// Parsed content of a resource file
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceBundle {
    /// Arbitrarily long non-negative integer, kept as its decimal digits
    Integer(String),
    /// Floating point number
    Float(f64),
    /// Rectangular grid of integers
    Matrix(Vec<Vec<i64>>),
    /// Free text
    Text(String),
}

impl ResourceBundle {
    /// Load `<dir>/<unit>.txt`; `Ok(None)` if the file does not exist
    pub fn load(dir: &Path, unit: &str) -> Result<Option<Self>, ResourceError> {
        let path = dir.join(format!("{unit}.txt"));
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no resource file");
                return Ok(None);
            }
            Err(source) => return Err(ResourceError::Io { path, source }),
        };

        let bundle = Self::parse(&path, &content)?;
        tracing::debug!(path = %path.display(), kind = bundle.kind(), "resource loaded");
        Ok(Some(bundle))
    }

    /// Parse resource text; `path` is only used in error messages
    pub fn parse(path: &Path, content: &str) -> Result<Self, ResourceError> {
        let mut lines = content.lines();
        let kind = lines
            .next()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ResourceError::Empty {
                path: path.to_path_buf(),
            })?;

        let parse_error = |line: usize, reason: String| ResourceError::Parse {
            path: path.to_path_buf(),
            line,
            reason,
        };

        match kind {
            "integer" => {
                let digits: String = lines.map(str::trim).collect();
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(parse_error(2, "expected decimal digits".into()));
                }
                Ok(Self::Integer(digits))
            }
            "float" => {
                let text: String = lines.map(str::trim).collect();
                text.parse()
                    .map(Self::Float)
                    .map_err(|e| parse_error(2, format!("`{text}`: {e}")))
            }
            "string" => Ok(Self::Text(lines.collect())),
            "matrix" => {
                let mut rows = Vec::new();
                for (index, line) in lines.enumerate() {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let row = line
                        .split_whitespace()
                        .map(str::parse)
                        .collect::<Result<Vec<i64>, _>>()
                        .map_err(|e| parse_error(index + 2, e.to_string()))?;
                    let width = rows.first().map_or(row.len(), Vec::len);
                    if width != row.len() {
                        return Err(parse_error(
                            index + 2,
                            format!("expected {width} columns, found {}", row.len()),
                        ));
                    }
                    rows.push(row);
                }
                Ok(Self::Matrix(rows))
            }
            other => Err(ResourceError::UnknownKind {
                path: path.to_path_buf(),
                kind: other.to_string(),
            }),
        }
    }

    /// Kind name as written in the header line
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Matrix(_) => "matrix",
            Self::Text(_) => "string",
        }
    }

    /// Decimal digits of an `integer` resource
    pub fn digits(&self) -> Option<&str> {
        match self {
            Self::Integer(digits) => Some(digits),
            _ => None,
        }
    }

    /// Rows of a `matrix` resource
    pub fn matrix(&self) -> Option<&[Vec<i64>]> {
        match self {
            Self::Matrix(rows) => Some(rows),
            _ => None,
        }
    }

    /// Value of a `float` resource
    pub fn float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Text of a `string` resource
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}
