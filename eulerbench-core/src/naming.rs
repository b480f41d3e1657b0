//! Naming Convention
//!
//! Problems and versions are identified on storage purely by name:
//! a literal prefix followed by a fixed-width, zero-padded decimal number
//! (`problem007`, `version012`). Anything else is ignored during discovery.

/// Widest number supported; keeps every id representable as `u32`
const MAX_WIDTH: usize = 9;

/// Prefix + fixed-width number naming rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConvention {
    prefix: String,
    width: usize,
}

impl NamingConvention {
    /// Default number of digits
    pub const DEFAULT_WIDTH: usize = 3;

    /// Create a convention; `width` is clamped to 1..=9
    pub fn new(prefix: impl Into<String>, width: usize) -> Self {
        Self {
            prefix: prefix.into(),
            width: width.clamp(1, MAX_WIDTH),
        }
    }

    /// `problemNNN` with the given width
    pub fn problems(width: usize) -> Self {
        Self::new("problem", width)
    }

    /// `versionNNN` with the given width
    pub fn versions(width: usize) -> Self {
        Self::new("version", width)
    }

    /// Literal prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of digits
    pub fn width(&self) -> usize {
        self.width
    }

    /// Largest id the digit width can express (999 for width 3)
    pub fn max_id(&self) -> u32 {
        10u32.pow(self.width as u32) - 1
    }

    /// Zero-padded number, e.g. `007`. Not clamped to the width.
    pub fn number(&self, id: u32) -> String {
        format!("{:0width$}", id, width = self.width)
    }

    /// Unit-style label for messages; unlike `format`, never fails
    pub fn label(&self, id: u32) -> String {
        format!("{}{}", self.prefix, self.number(id))
    }

    /// Unit name for an id, or `None` if the id does not fit the width
    pub fn format(&self, id: u32) -> Option<String> {
        (id <= self.max_id()).then(|| format!("{}{}", self.prefix, self.number(id)))
    }

    /// Id encoded in a unit name, if the name follows the convention exactly
    pub fn parse(&self, unit: &str) -> Option<u32> {
        let digits = unit.strip_prefix(self.prefix.as_str())?;
        if digits.len() != self.width || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}

/// The pair of conventions used for one solution store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingScheme {
    /// Convention for problem entries and their metadata units
    pub problems: NamingConvention,
    /// Convention for version units
    pub versions: NamingConvention,
}

impl NamingScheme {
    /// Scheme with explicit digit widths
    pub fn new(problem_digits: usize, version_digits: usize) -> Self {
        Self {
            problems: NamingConvention::problems(problem_digits),
            versions: NamingConvention::versions(version_digits),
        }
    }
}

impl Default for NamingScheme {
    fn default() -> Self {
        Self::new(
            NamingConvention::DEFAULT_WIDTH,
            NamingConvention::DEFAULT_WIDTH,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let versions = NamingConvention::versions(3);
        assert_eq!(versions.format(7).as_deref(), Some("version007"));
        assert_eq!(versions.format(999).as_deref(), Some("version999"));
        assert_eq!(versions.format(1000), None);
        assert_eq!(versions.number(1000), "1000");
        assert_eq!(versions.label(1000), "version1000");
    }

    #[test]
    fn test_parse_requires_exact_width() {
        let versions = NamingConvention::versions(3);
        assert_eq!(versions.parse("version012"), Some(12));
        assert_eq!(versions.parse("version12"), None);
        assert_eq!(versions.parse("version0012"), None);
        assert_eq!(versions.parse("version01a"), None);
        assert_eq!(versions.parse("problem012"), None);
        assert_eq!(versions.parse("Version012"), None);
        assert_eq!(versions.parse("version+12"), None);
    }

    #[test]
    fn test_custom_width() {
        let problems = NamingConvention::problems(4);
        assert_eq!(problems.parse("problem0042"), Some(42));
        assert_eq!(problems.parse("problem042"), None);
        assert_eq!(problems.max_id(), 9999);
    }

    #[test]
    fn test_width_is_clamped() {
        assert_eq!(NamingConvention::versions(0).width(), 1);
        assert_eq!(NamingConvention::versions(20).max_id(), 999_999_999);
    }
}
