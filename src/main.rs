use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use qrtrip::cli::display;
use qrtrip::cli::{Cli, Commands};
use qrtrip::{
    rasterize, CampaignConfig, CampaignDriver, CharacterPool, CommandRenderer, RqrrDecoder,
    StringGenerator,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            renderer,
            build,
            trials,
            max_bytes,
            scale,
            timeout_secs,
            seed,
            ascii_only,
            json,
        } => run_campaign(
            &renderer,
            build,
            trials,
            max_bytes,
            scale,
            timeout_secs,
            seed,
            ascii_only,
            json,
        ),
        Commands::Rasterize {
            input,
            output,
            scale,
        } => run_rasterize(input.as_deref(), &output, scale),
        Commands::Gen {
            count,
            max_bytes,
            seed,
            ascii_only,
        } => run_gen(count, max_bytes, seed, ascii_only),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_campaign(
    renderer_cmd: &[String],
    build: Option<String>,
    trials: usize,
    max_bytes: usize,
    scale: u32,
    timeout_secs: u64,
    seed: Option<u64>,
    ascii_only: bool,
    json: bool,
) -> Result<()> {
    let (program, args) = renderer_cmd
        .split_first()
        .context("renderer command is empty")?;
    let renderer = CommandRenderer::new(program)
        .with_args(args.to_vec())
        .with_timeout(Duration::from_secs(timeout_secs));

    let pool = CharacterPool::supported(ascii_only)?;
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let config = CampaignConfig {
        trials,
        max_bytes,
        scale,
        build: build.map(|cmd| cmd.split_whitespace().map(String::from).collect()),
    };

    let mut driver = CampaignDriver::new(config, pool, rng, renderer, RqrrDecoder);
    let summary = driver
        .run(|trial| {
            let line = display::trial_line(trial);
            if json {
                eprintln!("{}", line);
            } else {
                println!("{}", line);
            }
        })
        .context("campaign aborted")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", display::summary_block(&summary));
    }

    // Non-zero exit on any failing trial so CI pipelines can consume us.
    if !summary.all_passed() {
        std::process::exit(1);
    }
    Ok(())
}

fn run_rasterize(input: Option<&std::path::Path>, output: &PathBuf, scale: u32) -> Result<()> {
    let grid_text = match input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read grid text from stdin")?;
            buf
        }
    };

    let image = rasterize(&grid_text, scale)?;
    image
        .save(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    eprintln!(
        "✅ Wrote {} ({}x{} pixels)",
        output.display(),
        image.width(),
        image.height()
    );
    Ok(())
}

fn run_gen(count: usize, max_bytes: usize, seed: Option<u64>, ascii_only: bool) -> Result<()> {
    let pool = CharacterPool::supported(ascii_only)?;
    let generator = StringGenerator::new(&pool);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    for _ in 0..count {
        let s = generator.generate(&mut rng, max_bytes);
        println!("{:>3} bytes  {:?}", s.len(), s);
    }
    Ok(())
}
