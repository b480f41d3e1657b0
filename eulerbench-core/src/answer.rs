//! Solution return values
//!
//! The harness never inspects what a solution computed; it only echoes it.
//! `Answer` is therefore just the rendered text of the value.

use std::fmt;

/// Opaque, display-only result of a solution
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Answer(String);

impl Answer {
    /// Render any displayable value
    pub fn new(value: impl fmt::Display) -> Self {
        Self(value.to_string())
    }

    /// Render a sequence as a parenthesised tuple, e.g. `(3, 4, 5)`
    pub fn tuple<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let parts: Vec<String> = items.into_iter().map(|i| i.to_string()).collect();
        Self(format!("({})", parts.join(", ")))
    }

    /// Render a sequence as a bracketed list, e.g. `[913, 993]`
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let parts: Vec<String> = items.into_iter().map(|i| i.to_string()).collect();
        Self(format!("[{}]", parts.join(", ")))
    }

    /// The rendered text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the rendered text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! answer_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Answer {
                fn from(value: $ty) -> Self {
                    Self::new(value)
                }
            }
        )*
    };
}

answer_from!(u32, u64, u128, usize, i32, i64, i128, String, &str);
