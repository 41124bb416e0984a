//! Random slug generation.
//!
//! Slugs are short, enumerable identifiers, not secrets. The default
//! [`RandomSlugGenerator`] draws from the thread-local RNG; [`OsSlugGenerator`]
//! reads the operating system's entropy source for deployments that want
//! unguessable links. Both sit behind [`SlugGenerator`] so the collision-retry
//! logic in [`crate::application::services::LinkService`] does not change.

use rand::Rng;
use serde_json::json;

use crate::error::AppError;

/// Symbols a slug is drawn from: `a-z`, `A-Z`, `0-9`.
pub const SLUG_ALPHABET: &[u8; 62] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default slug length. 62^5 is roughly 916 million combinations.
pub const DEFAULT_SLUG_LENGTH: usize = 5;

/// Largest multiple of 62 that fits in a byte; bytes at or above it are rejected
/// so every symbol stays equally likely.
const REJECTION_BOUND: u8 = 248;

/// Source of candidate slugs.
///
/// Implementations must be callable from many tasks at once.
#[cfg_attr(test, mockall::automock)]
pub trait SlugGenerator: Send + Sync {
    /// Produces a fresh candidate slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the randomness source fails.
    fn generate(&self) -> Result<String, AppError>;
}

/// Generates slugs from the thread-local RNG.
#[derive(Debug, Clone)]
pub struct RandomSlugGenerator {
    length: usize,
}

impl RandomSlugGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomSlugGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SLUG_LENGTH)
    }
}

impl SlugGenerator for RandomSlugGenerator {
    fn generate(&self) -> Result<String, AppError> {
        let mut rng = rand::rng();

        Ok((0..self.length)
            .map(|_| SLUG_ALPHABET[rng.random_range(0..SLUG_ALPHABET.len())] as char)
            .collect())
    }
}

/// Generates slugs from OS entropy via `getrandom`.
#[derive(Debug, Clone)]
pub struct OsSlugGenerator {
    length: usize,
}

impl OsSlugGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for OsSlugGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SLUG_LENGTH)
    }
}

impl SlugGenerator for OsSlugGenerator {
    fn generate(&self) -> Result<String, AppError> {
        let mut slug = String::with_capacity(self.length);
        let mut buffer = [0u8; 32];

        while slug.len() < self.length {
            getrandom::fill(&mut buffer).map_err(|e| {
                AppError::internal(
                    "Entropy source unavailable",
                    json!({ "reason": e.to_string() }),
                )
            })?;

            for &byte in buffer.iter().filter(|&&b| b < REJECTION_BOUND) {
                if slug.len() == self.length {
                    break;
                }
                slug.push(SLUG_ALPHABET[(byte % 62) as usize] as char);
            }
        }

        Ok(slug)
    }
}

/// Returns true if `slug` only contains symbols from [`SLUG_ALPHABET`].
pub fn is_slug_alphabet(slug: &str) -> bool {
    slug.bytes().all(|b| SLUG_ALPHABET.contains(&b))
}
