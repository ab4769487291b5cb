//! CLI for ttsfix.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use ttsfix_core::config::{self, TtsFixConfig};
use ttsfix_core::downloader::CurlFetcher;
use ttsfix_core::pipeline::{self, PipelineOptions};

/// Scan a Tabletop Simulator save file, download its mesh/collider assets and
/// repair line-continuation corruption in the downloaded geometry.
#[derive(Debug, Parser)]
#[command(name = "ttsfix")]
#[command(about = "Download and repair TTS mesh assets referenced by a save file", long_about = None)]
pub struct Cli {
    /// Input JSON save/mod file (rewritten in place when repairs happen).
    pub input: PathBuf,

    /// Root directory for the group-keyed asset tree.
    #[arg(short = 'o', long, default_value = "downloads", value_name = "DIR")]
    pub output: PathBuf,

    /// Parallel download workers (default from config, 4).
    #[arg(short = 'j', long, value_name = "N")]
    pub jobs: Option<usize>,
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    run(cli, cfg)
}

fn run(cli: Cli, cfg: TtsFixConfig) -> Result<()> {
    let opts = PipelineOptions {
        input: cli.input,
        output_dir: cli.output,
        jobs: cli.jobs.unwrap_or(cfg.jobs).max(1),
        fixed_dir: cfg.fixed_dir,
        fixed_base_url: cfg.fixed_base_url,
    };
    let summary = pipeline::run(&opts, &CurlFetcher)?;

    println!(
        "{} group(s), {} URL(s): {} downloaded, {} already present, {} failed",
        summary.groups, summary.urls, summary.fetched, summary.already_present, summary.failed
    );
    if summary.repaired > 0 {
        println!(
            "repaired {} corrupted asset(s); save file {}",
            summary.repaired,
            if summary.patched {
                "rewritten with replacement URLs"
            } else {
                "left unchanged"
            }
        );
    }
    Ok(())
}
