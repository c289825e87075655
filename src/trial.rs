// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One round trip: render, rasterize, decode, compare.

use serde::Serialize;

use crate::decode::Decoder;
use crate::error::HarnessError;
use crate::raster::rasterize;
use crate::render::Renderer;

/// How a single trial ended. Decode failure and payload mismatch are data,
/// not errors: they are the signal the campaign aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TrialOutcome {
    /// The first decoded payload equals the input.
    Pass { decoded: String },
    /// A payload was decoded but differs from the input.
    Mismatch { decoded: String },
    /// The decoder produced no payload for the rasterized image.
    NoDecode,
}

/// The record of one trial: the generated input paired with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialResult {
    pub input: String,
    pub outcome: TrialOutcome,
}

impl TrialResult {
    pub fn matched(&self) -> bool {
        matches!(self.outcome, TrialOutcome::Pass { .. })
    }
}

/// Orchestrates one trial against the renderer and decoder collaborators.
#[derive(Debug)]
pub struct RoundTripRunner<'a, R: Renderer, D: Decoder> {
    renderer: &'a R,
    decoder: &'a D,
    scale: u32,
}

impl<'a, R: Renderer, D: Decoder> RoundTripRunner<'a, R, D> {
    pub fn new(renderer: &'a R, decoder: &'a D, scale: u32) -> Self {
        RoundTripRunner {
            renderer,
            decoder,
            scale,
        }
    }

    /// Run one round trip for `input`.
    ///
    /// Infrastructure failures (renderer invocation, unparseable grid) come
    /// back as `Err` and should abort the campaign; everything else is a
    /// [`TrialResult`]. When the decoder returns several payloads the first
    /// one is compared, code point for code point, against the input.
    pub fn run_trial(&self, input: &str) -> Result<TrialResult, HarnessError> {
        let grid_text = self.renderer.render(input)?;
        let image = rasterize(&grid_text, self.scale)?;
        let payloads = self.decoder.decode(&image);

        let outcome = match payloads.into_iter().next() {
            None => TrialOutcome::NoDecode,
            Some(decoded) if decoded == input => TrialOutcome::Pass { decoded },
            Some(decoded) => TrialOutcome::Mismatch { decoded },
        };

        Ok(TrialResult {
            input: input.to_string(),
            outcome,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::fakes::{blank_grid, BrokenRenderer, CannedDecoder, FixedRenderer};
    use super::*;

    #[test]
    fn matching_payload_is_a_pass() {
        let renderer = FixedRenderer(blank_grid(21, 21));
        let decoder = CannedDecoder(vec!["hello".to_string()]);
        let runner = RoundTripRunner::new(&renderer, &decoder, 4);
        let result = runner.run_trial("hello").unwrap();
        assert!(result.matched());
        assert_eq!(
            result.outcome,
            TrialOutcome::Pass {
                decoded: "hello".to_string()
            }
        );
    }

    #[test]
    fn differing_payload_is_a_mismatch() {
        let renderer = FixedRenderer(blank_grid(21, 21));
        let decoder = CannedDecoder(vec!["world".to_string()]);
        let runner = RoundTripRunner::new(&renderer, &decoder, 4);
        let result = runner.run_trial("hello").unwrap();
        assert!(!result.matched());
        assert_eq!(
            result.outcome,
            TrialOutcome::Mismatch {
                decoded: "world".to_string()
            }
        );
    }

    #[test]
    fn no_payload_is_recorded_not_raised() {
        let renderer = FixedRenderer(blank_grid(21, 21));
        let decoder = CannedDecoder(vec![]);
        let runner = RoundTripRunner::new(&renderer, &decoder, 4);
        let result = runner.run_trial("hello").unwrap();
        assert_eq!(result.outcome, TrialOutcome::NoDecode);
    }

    #[test]
    fn first_of_several_payloads_wins() {
        let renderer = FixedRenderer(blank_grid(21, 21));
        let decoder = CannedDecoder(vec!["hello".to_string(), "other".to_string()]);
        let runner = RoundTripRunner::new(&renderer, &decoder, 4);
        assert!(runner.run_trial("hello").unwrap().matched());
    }

    #[test]
    fn renderer_failure_propagates() {
        let decoder = CannedDecoder(vec![]);
        let runner = RoundTripRunner::new(&BrokenRenderer, &decoder, 4);
        assert!(matches!(
            runner.run_trial("hello"),
            Err(HarnessError::RenderInvocation { .. })
        ));
    }

    #[test]
    fn empty_renderer_output_is_a_malformed_grid() {
        let renderer = FixedRenderer(String::new());
        let decoder = CannedDecoder(vec![]);
        let runner = RoundTripRunner::new(&renderer, &decoder, 4);
        assert!(matches!(
            runner.run_trial("hello"),
            Err(HarnessError::MalformedGrid { .. })
        ));
    }
}
