// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use glint::{build_context, render, BucketCounts, Config, ContextDocument, QueryResponse};

mod cli;
use cli::{display, Cli, Commands};

const LOG_ENV: &str = "GLINT_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::discover(cli.config.as_deref()).context("loading config")?;
    tracing::debug!(unit = config.offset_unit.as_str(), "config loaded");

    match cli.command {
        Commands::Render { file, json } => run_render(&file, &config, json),
        Commands::Classify { files } => run_classify(&files),
        Commands::Context { file, style } => run_context(&file, style.into()),
    }
}

fn read_response(path: &Path) -> Result<QueryResponse> {
    QueryResponse::load(path).with_context(|| format!("loading {}", path.display()))
}

fn run_render(path: &Path, config: &Config, json: bool) -> Result<()> {
    let response = read_response(path)?;
    let rendered = render(&response.classify(), config);

    if json {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        print!("{}", display::format_rendered(&rendered, display::use_colors()));
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FileCounts {
    file: String,
    query_id: Option<String>,
    counts: BucketCounts,
}

fn count_file(path: &Path) -> Result<FileCounts> {
    let response = read_response(path)?;
    let classification = response.classify();
    Ok(FileCounts {
        file: path.display().to_string(),
        query_id: classification.query_id.map(str::to_string),
        counts: classification.counts(),
    })
}

fn run_classify(files: &[PathBuf]) -> Result<()> {
    #[cfg(feature = "parallel")]
    let results: Vec<Result<FileCounts>> = {
        use rayon::prelude::*;
        files.par_iter().map(|path| count_file(path)).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<FileCounts>> = files.iter().map(|path| count_file(path)).collect();

    let counts = results.into_iter().collect::<Result<Vec<_>>>()?;
    println!("{}", serde_json::to_string_pretty(&counts)?);
    Ok(())
}

fn run_context(path: &Path, style: glint::ContextStyle) -> Result<()> {
    let response = read_response(path)?;
    let documents: Vec<ContextDocument> =
        response.result_items.iter().map(ContextDocument::from).collect();
    print!("{}", build_context(&documents, style));
    Ok(())
}
