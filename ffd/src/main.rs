use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use ffd::config::FFDConfig;
use ffd::io;
use ffd::io::cli::Cli;
use ffd::io::output::Output;
use log::{info, warn};
use thousands::Separable;
use volpack::io::{export, import};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FFDConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed FFDConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .context("input file has no usable file stem")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let instance = io::read_instance(args.input_file.as_path())?;

    let mut packer = import(&instance, config.sort_policy)?;
    let start = std::time::Instant::now();
    packer.pack()?;
    info!(
        "[MAIN] packing finished in {:.3}ms ({} placement attempts)",
        start.elapsed().as_secs_f64() * 1000.0,
        packer.n_placement_attempts().separate_with_commas()
    );

    let solution = export(&packer, &instance)?;
    for bin in &solution.bins {
        info!(
            "[MAIN] bin '{}': {} items placed, density {:.3}",
            bin.id,
            bin.placed.len(),
            bin.density
        );
        for placed in &bin.placed {
            info!(
                "[MAIN]   '{}' at ({:.1}, {:.1}, {:.1}) rotation {}",
                placed.id,
                placed.position[0],
                placed.position[1],
                placed.position[2],
                placed.rotation
            );
        }
    }
    if !solution.unfit.is_empty() {
        info!("[MAIN] unfit items: {:?}", solution.unfit);
    }

    let output = Output {
        timestamp: jiff::Timestamp::now().to_string(),
        instance,
        config,
        solution,
    };
    let solution_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.json"));
    io::write_json(&output, solution_path.as_path())?;

    Ok(())
}
