use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use remaprs_pipeline::ChainFile;

pub fn run_remap(matches: &ArgMatches) -> Result<()> {
    let path = matches.get_one::<String>("FILE").expect("FILE is required");
    let chain = ChainFile::try_from(Path::new(path))
        .with_context(|| format!("Failed to load remap document {}", path))?;

    // Cross-check path: every header value pushed through the scalar chain.
    let scalar_min = chain
        .values
        .iter()
        .map(|v| chain.pipeline.map_value(*v))
        .min()
        .expect("parser rejects documents without values");
    println!("Part 1: {}", scalar_min);

    // Range path: paired header values remapped a whole range at a time.
    let ranged_min = chain
        .pipeline
        .minimum_output_per_range(&chain.ranges())
        .context("No values survived the remapping pipeline")?;
    println!("Part 2: {}", ranged_min);

    Ok(())
}
