// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Campaign execution and pass/fail accounting.

use rand::Rng;
use serde::Serialize;

use crate::config::CampaignConfig;
use crate::decode::Decoder;
use crate::error::HarnessError;
use crate::generate::StringGenerator;
use crate::pool::CharacterPool;
use crate::render::{build_renderer, Renderer};
use crate::trial::{RoundTripRunner, TrialOutcome, TrialResult};

/// One failing trial, kept verbatim so it can be replayed by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub expected: String,
    /// `None` when the decoder produced no payload at all.
    pub decoded: Option<String>,
}

/// Aggregated result of a campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CampaignSummary {
    pub trials: usize,
    pub matched: usize,
    pub failures: Vec<Failure>,
}

impl CampaignSummary {
    pub fn record(&mut self, result: &TrialResult) {
        self.trials += 1;
        match &result.outcome {
            TrialOutcome::Pass { .. } => self.matched += 1,
            TrialOutcome::Mismatch { decoded } => self.failures.push(Failure {
                expected: result.input.clone(),
                decoded: Some(decoded.clone()),
            }),
            TrialOutcome::NoDecode => self.failures.push(Failure {
                expected: result.input.clone(),
                decoded: None,
            }),
        }
    }

    pub fn all_passed(&self) -> bool {
        self.matched == self.trials
    }
}

/// Runs a configured batch of independent, sequential trials.
///
/// Trials share nothing but the RNG and the character pool. A mismatch or
/// decode failure is recorded and the campaign continues; an infrastructure
/// failure aborts it.
pub struct CampaignDriver<G, R, D>
where
    G: Rng,
    R: Renderer,
    D: Decoder,
{
    config: CampaignConfig,
    pool: CharacterPool,
    rng: G,
    renderer: R,
    decoder: D,
}

impl<G, R, D> CampaignDriver<G, R, D>
where
    G: Rng,
    R: Renderer,
    D: Decoder,
{
    pub fn new(config: CampaignConfig, pool: CharacterPool, rng: G, renderer: R, decoder: D) -> Self {
        CampaignDriver {
            config,
            pool,
            rng,
            renderer,
            decoder,
        }
    }

    /// Run the campaign to completion, invoking `on_trial` after every
    /// trial. The callback is where per-trial reporting lives; the driver
    /// itself stays silent.
    pub fn run(
        &mut self,
        mut on_trial: impl FnMut(&TrialResult),
    ) -> Result<CampaignSummary, HarnessError> {
        if let Some(command) = &self.config.build {
            build_renderer(command)?;
        }

        let generator = StringGenerator::new(&self.pool);
        let runner = RoundTripRunner::new(&self.renderer, &self.decoder, self.config.scale);

        let mut summary = CampaignSummary::default();
        for _ in 0..self.config.trials {
            let input = generator.generate(&mut self.rng, self.config.max_bytes);
            let result = runner.run_trial(&input)?;
            summary.record(&result);
            on_trial(&result);
        }
        Ok(summary)
    }
}
