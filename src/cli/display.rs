// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Console reporting for campaign output.
//!
//! One line per trial, then a summary block. The per-trial format carries
//! what you need to replay a failure by hand: the exact input, quoted, next
//! to whatever the decoder saw.

use std::fmt::Write as _;

use crate::campaign::CampaignSummary;
use crate::trial::{TrialOutcome, TrialResult};

/// Render one trial as a single report line.
pub fn trial_line(result: &TrialResult) -> String {
    match &result.outcome {
        TrialOutcome::Pass { decoded } => format!("✅ Decoded: {:?}", decoded),
        TrialOutcome::Mismatch { decoded } => {
            format!("⛔ Expected: {:?} Actual: {:?}", result.input, decoded)
        }
        TrialOutcome::NoDecode => format!("⛔ Expected: {:?} Actual: <no decode>", result.input),
    }
}

/// Render the end-of-campaign summary.
pub fn summary_block(summary: &CampaignSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} / {} trials matched",
        summary.matched, summary.trials
    );
    if !summary.failures.is_empty() {
        let _ = writeln!(out, "{} failing input(s):", summary.failures.len());
        for failure in &summary.failures {
            match &failure.decoded {
                Some(decoded) => {
                    let _ = writeln!(out, "  {:?} decoded as {:?}", failure.expected, decoded);
                }
                None => {
                    let _ = writeln!(out, "  {:?} produced no decodable image", failure.expected);
                }
            }
        }
    }
    out
}
