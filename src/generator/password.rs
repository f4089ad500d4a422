// Passkeep — Password Generator
//
// Builds a password from three character classes, each contributing a random
// number of characters within its configured range, then shuffles the result.
//
// Default policy: 8–10 letters, 2–4 symbols, 2–4 digits (12–18 characters total).

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use zeroize::Zeroizing;

use super::GeneratorError;

// ─── Constants ───────────────────────────────────────────────────────────────

pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!#$%&()*+";

/// Upper bound on how many characters a single class may contribute.
pub const MAX_CLASS_COUNT: usize = 1024;

// ─── Policy ──────────────────────────────────────────────────────────────────

/// Inclusive range for how many characters a class contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

impl CountRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub const fn exactly(count: usize) -> Self {
        Self::new(count, count)
    }
}

impl fmt::Display for CountRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

/// Parses `"N"` or `"MIN-MAX"`.
impl FromStr for CountRange {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GeneratorError::InvalidRange(s.to_string());
        let parse = |part: &str| part.trim().parse::<usize>().map_err(|_| invalid());

        match s.split_once('-') {
            Some((min, max)) => Ok(Self::new(parse(min)?, parse(max)?)),
            None => Ok(Self::exactly(parse(s)?)),
        }
    }
}

/// How many characters of each class go into a generated password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub letters: CountRange,
    pub symbols: CountRange,
    pub digits: CountRange,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            letters: CountRange::new(8, 10),
            symbols: CountRange::new(2, 4),
            digits: CountRange::new(2, 4),
        }
    }
}

impl PasswordPolicy {
    fn classes(&self) -> [(&'static str, &'static [u8], CountRange); 3] {
        [
            ("letters", LETTERS, self.letters),
            ("symbols", SYMBOLS, self.symbols),
            ("digits", DIGITS, self.digits),
        ]
    }

    /// Reject inverted or oversized ranges and policies that can only produce
    /// an empty password.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        for (name, _, range) in self.classes() {
            if range.min > range.max {
                return Err(GeneratorError::InvalidPolicy(format!(
                    "{} range {}-{} has min greater than max",
                    name, range.min, range.max
                )));
            }
            if range.max > MAX_CLASS_COUNT {
                return Err(GeneratorError::InvalidPolicy(format!(
                    "{} count {} exceeds the maximum of {}",
                    name, range.max, MAX_CLASS_COUNT
                )));
            }
        }

        if self.max_len() == 0 {
            return Err(GeneratorError::InvalidPolicy(
                "policy can only produce an empty password".to_string(),
            ));
        }

        Ok(())
    }

    /// Shortest possible password. Saturates instead of overflowing.
    pub fn min_len(&self) -> usize {
        sum_counts(self.letters.min, self.symbols.min, self.digits.min)
    }

    /// Longest possible password. Saturates instead of overflowing.
    pub fn max_len(&self) -> usize {
        sum_counts(self.letters.max, self.symbols.max, self.digits.max)
    }
}

fn sum_counts(a: usize, b: usize, c: usize) -> usize {
    a.checked_add(b)
        .and_then(|ab| ab.checked_add(c))
        .unwrap_or(usize::MAX)
}

// ─── Generation ──────────────────────────────────────────────────────────────

/// Generate a password under `policy` using the supplied RNG.
pub fn generate_password<R: Rng + ?Sized>(
    policy: &PasswordPolicy,
    rng: &mut R,
) -> Result<Zeroizing<String>, GeneratorError> {
    policy.validate()?;

    let mut chars = Zeroizing::new(Vec::with_capacity(policy.max_len()));
    for (_, alphabet, range) in policy.classes() {
        let count = rng.random_range(range.min..=range.max);
        for _ in 0..count {
            chars.push(alphabet[rng.random_range(0..alphabet.len())]);
        }
    }
    chars.shuffle(rng);

    Ok(Zeroizing::new(chars.iter().map(|&b| char::from(b)).collect()))
}

/// Generate a password under `policy` using the thread-local CSPRNG.
pub fn generate(policy: &PasswordPolicy) -> Result<Zeroizing<String>, GeneratorError> {
    generate_password(policy, &mut rand::rng())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
