//! Differential round-trip fuzzing for QR code renderers.
//!
//! The harness generates randomized Unicode strings under a byte budget,
//! hands each one to an external renderer that prints a textual module grid,
//! rasterizes that grid into a monochrome image, decodes the image with a
//! third-party QR decoder, and checks that the decoded payload equals the
//! original input. The harness never encodes or decodes QR itself; it only
//! checks that two independent implementations agree.
//!
//! # Pipeline
//!
//! ```text
//! ┌───────────┐    ┌──────────┐    ┌───────────┐    ┌──────────┐
//! │ generate  │───▶│ renderer │───▶│  raster   │───▶│ decoder  │
//! │ (string)  │    │ (extern) │    │ (image)   │    │ (rqrr)   │
//! └───────────┘    └──────────┘    └───────────┘    └──────────┘
//!       │                                                 │
//!       └───────────────── compare ◀──────────────────────┘
//! ```
//!
//! The renderer and decoder are capability traits ([`Renderer`],
//! [`Decoder`]) so tests can substitute in-process fakes, and the random
//! source is injected so campaigns can be replayed from a seed.
//!
//! # Usage
//!
//! ```ignore
//! use qrtrip::{CampaignConfig, CampaignDriver, CharacterPool, CommandRenderer, RqrrDecoder};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let pool = CharacterPool::supported(false)?;
//! let renderer = CommandRenderer::new("./qrender");
//! let mut driver = CampaignDriver::new(
//!     CampaignConfig::default(),
//!     pool,
//!     StdRng::seed_from_u64(42),
//!     renderer,
//!     RqrrDecoder,
//! );
//! let summary = driver.run(|trial| println!("{}", qrtrip::cli::display::trial_line(trial)))?;
//! ```

pub mod campaign;
pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod generate;
pub mod pool;
pub mod raster;
pub mod render;
pub mod trial;

// Re-exports for public API
pub use campaign::{CampaignDriver, CampaignSummary, Failure};
pub use config::CampaignConfig;
pub use decode::{Decoder, RqrrDecoder};
pub use error::HarnessError;
pub use generate::StringGenerator;
pub use pool::CharacterPool;
pub use raster::rasterize;
pub use render::{build_renderer, CommandRenderer, Renderer};
pub use trial::{RoundTripRunner, TrialOutcome, TrialResult};

#[cfg(test)]
mod tests {
    //! Property tests over the two pure pipeline stages: string generation
    //! and grid rasterization.

    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Arbitrary well-formed grid text: each row is `width` two-character
    /// tokens, randomly black or white.
    fn grid_strategy() -> impl Strategy<Value = (String, usize, usize)> {
        (1usize..16, 1usize..16).prop_flat_map(|(width, height)| {
            proptest::collection::vec(
                proptest::collection::vec(proptest::bool::ANY, width),
                height,
            )
            .prop_map(move |rows| {
                let text = rows
                    .iter()
                    .map(|row| {
                        row.iter()
                            .map(|&black| {
                                if black {
                                    config::BLACK_MODULE
                                } else {
                                    config::WHITE_MODULE
                                }
                            })
                            .collect::<String>()
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                (text, width, height)
            })
        })
    }

    proptest! {
        #[test]
        fn generated_strings_respect_the_byte_budget(
            seed in any::<u64>(),
            max_bytes in config::MIN_BYTES..64usize,
        ) {
            let pool = CharacterPool::supported(false).unwrap();
            let generator = StringGenerator::new(&pool);
            let mut rng = StdRng::seed_from_u64(seed);
            let s = generator.generate(&mut rng, max_bytes);
            prop_assert!(s.len() <= max_bytes);
            for c in s.chars() {
                prop_assert!(
                    c.is_ascii_graphic() || c == ' ' || ('\u{1F600}'..='\u{1F64F}').contains(&c),
                    "character {:?} outside supported pool",
                    c
                );
            }
        }

        #[test]
        fn rasterized_dimensions_are_exact(
            (grid, width, height) in grid_strategy(),
            scale in 1u32..8,
        ) {
            let image = rasterize(&grid, scale).unwrap();
            prop_assert_eq!(
                image.dimensions(),
                (width as u32 * scale, height as u32 * scale)
            );
        }

        #[test]
        fn rasterization_is_deterministic((grid, _, _) in grid_strategy(), scale in 1u32..8) {
            let a = rasterize(&grid, scale).unwrap();
            let b = rasterize(&grid, scale).unwrap();
            prop_assert_eq!(a.as_raw(), b.as_raw());
        }

        #[test]
        fn every_pixel_is_pure_black_or_white((grid, _, _) in grid_strategy(), scale in 1u32..6) {
            let image = rasterize(&grid, scale).unwrap();
            for pixel in image.pixels() {
                prop_assert!(pixel[0] == 0 || pixel[0] == 255);
            }
        }
    }
}
