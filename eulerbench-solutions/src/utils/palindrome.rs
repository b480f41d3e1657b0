//! Integer palindrome checks

/// How `check` decides whether a number reads the same both ways
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PalindromeAlgorithm {
    /// Reverse the decimal digits arithmetically
    IntCompare,
    /// Compare the decimal string with its reverse
    #[default]
    StrCompare,
}

impl PalindromeAlgorithm {
    /// Whether `n` is a decimal palindrome
    #[inline]
    pub fn check(self, n: u64) -> bool {
        match self {
            Self::IntCompare => is_palindrome_int(n),
            Self::StrCompare => is_palindrome_str(n),
        }
    }
}

/// Palindrome check without string conversion
pub fn is_palindrome_int(n: u64) -> bool {
    let mut copy = n;
    let mut reversed: u64 = 0;
    while copy > 0 {
        // the reverse of a u64 can exceed u64::MAX, and then it cannot equal n
        let Some(next) = reversed
            .checked_mul(10)
            .and_then(|r| r.checked_add(copy % 10))
        else {
            return false;
        };
        reversed = next;
        copy /= 10;
    }
    reversed == n
}

/// Palindrome check via the decimal string
pub fn is_palindrome_str(n: u64) -> bool {
    let digits = n.to_string();
    digits.bytes().eq(digits.bytes().rev())
}
