//! Prime Numbers
//!
//! `PrimeCache` keeps every prime found so far in ascending order and grows on
//! demand. A solution creates its own cache, fills it as it goes and drops it
//! when it returns; nothing is shared between solutions or iterations.
//!
//! Two ways to fill it:
//! - `PrimeCache::with_limit` sieves every prime up to a bound in one pass
//! - `iter`, `nth` and `is_prime` extend the cache one prime at a time by
//!   trial division against the primes already cached

/// Ascending cache of every prime up to `largest()`
#[derive(Debug, Clone)]
pub struct PrimeCache {
    primes: Vec<u64>,
}

impl Default for PrimeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PrimeCache {
    /// Cache seeded with 2 and 3
    pub fn new() -> Self {
        Self { primes: vec![2, 3] }
    }

    /// Cache holding every prime `<= limit` (sieve of Eratosthenes), and at
    /// least the seed primes 2 and 3
    pub fn with_limit(limit: u64) -> Self {
        let mut cache = Self::new();
        if limit < 5 {
            return cache;
        }

        let limit = limit as usize;
        let mut composite = vec![false; limit + 1];
        let mut primes = Vec::new();
        for n in 2..=limit {
            if composite[n] {
                continue;
            }
            primes.push(n as u64);
            let Some(start) = n.checked_mul(n) else {
                continue;
            };
            for multiple in (start..=limit).step_by(n) {
                composite[multiple] = true;
            }
        }

        cache.primes = primes;
        cache
    }

    /// Number of cached primes
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    /// Always false; the cache starts with two primes
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// Cached primes, ascending
    pub fn as_slice(&self) -> &[u64] {
        &self.primes
    }

    /// Largest cached prime
    pub fn largest(&self) -> u64 {
        self.primes.last().copied().unwrap_or(2)
    }

    /// The `n`th prime, 1-based; `None` for `n == 0`
    pub fn nth(&mut self, n: usize) -> Option<u64> {
        let index = n.checked_sub(1)?;
        while self.primes.len() <= index {
            self.grow();
        }
        Some(self.primes[index])
    }

    /// Whether `n` is prime, extending the cache up to `sqrt(n)` if needed
    pub fn is_prime(&mut self, n: u64) -> bool {
        if n < 2 {
            return false;
        }
        if n <= self.largest() {
            return self.primes.binary_search(&n).is_ok();
        }
        while self.largest().saturating_mul(self.largest()) < n {
            self.grow();
        }
        self.primes
            .iter()
            .take_while(|&&p| p * p <= n)
            .all(|&p| n % p != 0)
    }

    /// Prime factorization of `n` as `(prime, exponent)` pairs, ascending
    ///
    /// `0` and `1` have no prime factors.
    pub fn factorize(&mut self, mut n: u64) -> Vec<(u64, u32)> {
        let mut factors = Vec::new();
        if n < 2 {
            return factors;
        }

        let mut primes = self.iter();
        while n > 1 {
            let Some(p) = primes.next() else {
                break;
            };
            if p.saturating_mul(p) > n {
                // what is left has no factor below its square root
                factors.push((n, 1));
                break;
            }
            let mut exponent = 0;
            while n % p == 0 {
                n /= p;
                exponent += 1;
            }
            if exponent > 0 {
                factors.push((p, exponent));
            }
        }
        factors
    }

    /// Every prime in ascending order, growing the cache past its end
    pub fn iter(&mut self) -> PrimeIter<'_> {
        PrimeIter {
            cache: self,
            index: 0,
        }
    }

    /// Append the next prime after `largest()`
    fn grow(&mut self) {
        let mut candidate = self.largest() + 2;
        loop {
            let is_prime = self
                .primes
                .iter()
                .skip(1)
                .take_while(|&&p| p * p <= candidate)
                .all(|&p| candidate % p != 0);
            if is_prime {
                self.primes.push(candidate);
                return;
            }
            candidate += 2;
        }
    }
}

/// Unbounded iterator over primes; see `PrimeCache::iter`
#[derive(Debug)]
pub struct PrimeIter<'a> {
    cache: &'a mut PrimeCache,
    index: usize,
}

impl Iterator for PrimeIter<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while self.cache.primes.len() <= self.index {
            self.cache.grow();
        }
        let prime = self.cache.primes[self.index];
        self.index += 1;
        Some(prime)
    }
}
