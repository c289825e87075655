// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The pool of code points eligible for test-string generation.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use rand::Rng;

use crate::config;
use crate::error::HarnessError;

/// An ordered, deduplicated sequence of Unicode code points that generated
/// strings are drawn from. Built once per campaign, never mutated.
#[derive(Debug, Clone)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    /// Build a pool from inclusive code-point ranges. Code points that are
    /// not valid Unicode scalar values (surrogates) are skipped; overlapping
    /// ranges are deduplicated.
    pub fn from_ranges(ranges: &[RangeInclusive<u32>]) -> Result<Self, HarnessError> {
        let mut set = BTreeSet::new();
        for range in ranges {
            for cp in range.clone() {
                if let Some(c) = char::from_u32(cp) {
                    set.insert(c);
                }
            }
        }
        if set.is_empty() {
            return Err(HarnessError::EmptyPool);
        }
        Ok(CharacterPool {
            chars: set.into_iter().collect(),
        })
    }

    /// The supported pool: ASCII printable, plus the Emoticons block unless
    /// `ascii_only`. See the note in [`crate::config`] on why the pool is
    /// this narrow.
    pub fn supported(ascii_only: bool) -> Result<Self, HarnessError> {
        if ascii_only {
            Self::from_ranges(&[config::ASCII_PRINTABLE])
        } else {
            Self::from_ranges(&[config::ASCII_PRINTABLE, config::EMOTICONS])
        }
    }

    /// Pick one character uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.chars[rng.gen_range(0..self.chars.len())]
    }

    /// Shortest UTF-8 encoding among pool members, in bytes.
    pub fn min_encoded_len(&self) -> usize {
        // Constructor guarantees a non-empty pool.
        self.chars.iter().map(|c| c.len_utf8()).min().unwrap_or(4)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}
