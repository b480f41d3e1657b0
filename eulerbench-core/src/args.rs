//! Problem Arguments
//!
//! Problems declare named parameters (`ParamDef`). Whatever follows `--` on
//! the command line is matched against them:
//!
//! ```text
//! euler run -p 1 -- --number 500       number = "500"
//! euler run -p 1 -- --number=500       number = "500"
//! euler run -p 1                       number = default ("1000")
//! ```
//!
//! Values stay as text until a solution asks for a typed value with `get`.

use crate::ParamDef;
use crate::error::{ArgsError, SolveError};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Named arguments passed to every version of a problem
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemArgs {
    values: BTreeMap<String, String>,
}

impl ProblemArgs {
    /// Match raw command-line tokens against declared parameters.
    ///
    /// Defaults are filled in for omitted parameters; a parameter without a
    /// default must be given.
    pub fn parse<S: AsRef<str>>(params: &[ParamDef], raw: &[S]) -> Result<Self, ArgsError> {
        let mut given: BTreeMap<String, String> = BTreeMap::new();
        let mut tokens = raw.iter().map(AsRef::as_ref);

        while let Some(token) = tokens.next() {
            let Some(body) = token.strip_prefix("--") else {
                return Err(ArgsError::Positional {
                    value: token.to_string(),
                });
            };

            let (name, value) = match body.split_once('=') {
                Some((name, value)) => (name, value.to_string()),
                None => {
                    let value = tokens.next().ok_or_else(|| ArgsError::MissingValue {
                        name: body.to_string(),
                    })?;
                    (body, value.to_string())
                }
            };

            if name.is_empty() {
                return Err(ArgsError::Invalid {
                    token: token.to_string(),
                });
            }
            if !params.iter().any(|p| p.name == name) {
                return Err(ArgsError::Unknown {
                    name: name.to_string(),
                });
            }
            if given.insert(name.to_string(), value).is_some() {
                return Err(ArgsError::Duplicate {
                    name: name.to_string(),
                });
            }
        }

        for param in params {
            if given.contains_key(param.name) {
                continue;
            }
            match param.default {
                Some(default) => {
                    given.insert(param.name.to_string(), default.to_string());
                }
                None => {
                    return Err(ArgsError::Missing {
                        name: param.name.to_string(),
                    });
                }
            }
        }

        Ok(Self { values: given })
    }

    /// Build arguments directly, bypassing declaration checks
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Typed value of an argument
    pub fn get<T>(&self, name: &str) -> Result<T, SolveError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.raw(name).ok_or_else(|| SolveError::MissingArgument {
            name: name.to_string(),
        })?;
        raw.trim()
            .parse()
            .map_err(|e: T::Err| SolveError::InvalidArgument {
                name: name.to_string(),
                reason: format!("`{raw}`: {e}"),
            })
    }

    /// Text value of an argument
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// All arguments in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether no arguments are set
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
