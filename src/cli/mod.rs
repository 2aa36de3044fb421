// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the glint command-line interface.
//!
//! Three subcommands, all reading upstream response JSON from files: `render`
//! draws the panels the UI would show, `classify` summarises bucket sizes,
//! and `context` prints the prompt context a language model would receive.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "glint",
    about = "Classify and render document-search responses",
    version
)]
pub struct Cli {
    /// Config file (JSON). Falls back to $GLINT_CONFIG, then defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a response as the UI would draw it
    Render {
        /// Path to response JSON
        file: PathBuf,

        /// Emit the view model as JSON instead of drawing it
        #[arg(long)]
        json: bool,
    },

    /// Print bucket sizes for one or more responses
    Classify {
        /// Paths to response JSON
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print the language-model context built from a response
    Context {
        /// Path to response JSON
        file: PathBuf,

        /// Context layout
        #[arg(long, value_enum, default_value = "plain")]
        style: StyleArg,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StyleArg {
    Plain,
    Numbered,
}

impl From<StyleArg> for glint::ContextStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Plain => glint::ContextStyle::Plain,
            StyleArg::Numbered => glint::ContextStyle::Numbered,
        }
    }
}
