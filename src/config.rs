// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recognized configuration constants and the campaign configuration.
//!
//! The character pool is deliberately narrow: ASCII printable plus the
//! Emoticons block. Other Unicode blocks (Latin-1 Supplement, Greek,
//! Cyrillic, CJK, ...) caused spurious round-trip mismatches with renderers
//! that otherwise produce scannable codes. Root cause is still unknown
//! (suspects: renderer encoding-mode selection, decoder charset assumption),
//! so those blocks stay excluded rather than silently papered over.

use std::ops::RangeInclusive;
use std::time::Duration;

/// Default number of trials per campaign.
pub const DEFAULT_TRIALS: usize = 100;

/// Default maximum UTF-8 byte budget for a generated string.
pub const DEFAULT_MAX_BYTES: usize = 17;

/// Minimum byte budget. 4 is the maximum UTF-8 length of a single Unicode
/// scalar value, so any budget of at least 4 is reachable by every pool
/// member without overshooting on the first character.
pub const MIN_BYTES: usize = 4;

/// Default module-to-pixel scale. Must be large enough that the decoder's
/// interior sampling never straddles a module boundary; >= 4 in practice.
pub const DEFAULT_SCALE: u32 = 10;

/// Default bound on a single renderer invocation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Token emitted by the renderer for a filled module, two characters wide.
pub const BLACK_MODULE: &str = "██";

/// Token emitted for an unfilled module. Any token other than
/// [`BLACK_MODULE`] is treated as white.
pub const WHITE_MODULE: &str = "  ";

/// ASCII printable characters, space through tilde.
pub const ASCII_PRINTABLE: RangeInclusive<u32> = 0x0020..=0x007E;

/// The Emoticons block.
pub const EMOTICONS: RangeInclusive<u32> = 0x1F600..=0x1F64F;

/// Knobs for a single campaign.
#[derive(Debug, Clone)]
pub struct CampaignConfig {
    /// Number of trials to run.
    pub trials: usize,
    /// Maximum UTF-8 byte budget per generated string, >= [`MIN_BYTES`].
    pub max_bytes: usize,
    /// Module-to-pixel scale for rasterization.
    pub scale: u32,
    /// One-time setup command (e.g. compiling the renderer) executed before
    /// the first trial. Failure aborts the whole campaign.
    pub build: Option<Vec<String>>,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        CampaignConfig {
            trials: DEFAULT_TRIALS,
            max_bytes: DEFAULT_MAX_BYTES,
            scale: DEFAULT_SCALE,
            build: None,
        }
    }
}
