//! Wrap command - reflow a gem description for the spec file.

use anyhow::{bail, Context, Result};
use clap::Args;
use gem2spec_req::{word_wrap, DEFAULT_LINE_WIDTH};
use std::io::Read;

use crate::config::Gem2SpecConfig;

#[derive(Args, Debug)]
pub struct WrapArgs {
    /// Maximum line width
    #[arg(short, long)]
    pub width: Option<usize>,
}

pub fn execute(args: WrapArgs, config: &Gem2SpecConfig) -> Result<i32> {
    let width = args.width.or(config.wrap.width).unwrap_or(DEFAULT_LINE_WIDTH);

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read description from stdin")?;

    let Some(wrapped) = word_wrap(&text, width) else {
        bail!("Invalid line width {}", width);
    };
    println!("{}", wrapped);

    Ok(0)
}
