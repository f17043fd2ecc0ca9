use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use circ_pack::entities::PlacementMode;
use circ_pack::io::export::export_solution;
use circ_pack::io::import::import_instance;
use circ_pack::io::svg::{OVERFILL_NOTE, result_to_svg};
use clap::Parser as ClapParser;
use log::{info, warn};
use tgf::config::TGFConfig;
use tgf::io::cli::Cli;
use tgf::io::output::TGFOutput;
use tgf::{TGFOptimizer, io};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            TGFConfig::default()
        }
        Some(config_file) => {
            io::read_json::<TGFConfig>(&config_file).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed TGFConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("invalid input file name: {}", args.input_file.display()))?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = io::read_json_instance(&args.input_file)?;
    let instance = import_instance(&ext_instance)?;
    let n_items = instance.total_item_qty();

    let over_filled = ext_instance.permit_overlap;
    let permit_overlap = over_filled || args.permit_overlap;
    let mut optimizer = TGFOptimizer::new(instance, config.clone(), permit_overlap);
    let result = optimizer.solve();

    if result.n_placed() < n_items {
        warn!(
            "[MAIN] rendered {} of {} items ({} could not be placed, {} do not fit the container)",
            result.n_placed(),
            n_items,
            result.n_unplaced(),
            result.n_dropped()
        );
    }
    match (result.mode, result.is_complete()) {
        (PlacementMode::OverlapAllowed, _) => {
            warn!("[MAIN] items overlap in the layout because the container is over-filled")
        }
        (PlacementMode::NonOverlapping, false) => warn!(
            "[MAIN] no non-overlapping layout found, although the container is not flagged as over-filled"
        ),
        (PlacementMode::NonOverlapping, true) => {}
    }

    {
        let output = TGFOutput {
            solution: export_solution(&ext_instance, &result, optimizer.run_time),
            instance: ext_instance,
            config: config.clone(),
        };

        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));

        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.svg"));
        let draw_options = config.svg_draw_options_for(over_filled);
        if draw_options.overfill_hatch || result.mode == PlacementMode::OverlapAllowed {
            warn!("[MAIN] {OVERFILL_NOTE}");
        }
        let svg = result_to_svg(&result, draw_options, input_file_stem);

        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
