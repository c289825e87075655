// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Byte-budget-aware random test-string generation.

use rand::Rng;

use crate::config::MIN_BYTES;
use crate::pool::CharacterPool;

/// Produces randomized Unicode strings whose UTF-8 byte length never exceeds
/// a sampled budget. The RNG is injected so campaigns can be seeded.
#[derive(Debug)]
pub struct StringGenerator<'a> {
    pool: &'a CharacterPool,
}

impl<'a> StringGenerator<'a> {
    pub fn new(pool: &'a CharacterPool) -> Self {
        StringGenerator { pool }
    }

    /// Generate one test string with UTF-8 byte length in `[0, max_bytes]`.
    ///
    /// A target budget is drawn uniformly from `[MIN_BYTES, max_bytes]`, then
    /// characters are appended until the next pick would overshoot it. The
    /// budget is an upper bound, not a promise: a multi-byte pick near the
    /// boundary stops the loop short, and in the degenerate case the result
    /// is empty. Values of `max_bytes` below [`MIN_BYTES`] are clamped up.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, max_bytes: usize) -> String {
        let target = rng.gen_range(MIN_BYTES..=max_bytes.max(MIN_BYTES));
        let min_len = self.pool.min_encoded_len();

        let mut result = String::new();
        let mut bytes = 0;
        while bytes < target {
            // Once the remaining slack is smaller than the shortest pool
            // member, no pick can fit; stop without drawing.
            if target - bytes < min_len {
                break;
            }
            let c = self.pool.pick(rng);
            if bytes + c.len_utf8() > target {
                break;
            }
            result.push(c);
            bytes += c.len_utf8();
        }
        result
    }
}
