use clap::{Parser, Subcommand};
use maskex_cli::{determine_output_path, expand_inputs};
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Parser)]
#[command(name = "maskex")]
#[command(version, about = "Color-key mask extractor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract masks from image(s) using a mask-set file
    Extract {
        /// Input files or directories
        #[arg(value_name = "INPUTS", required = true)]
        inputs: Vec<PathBuf>,

        /// Mask-set YAML file
        #[arg(short, long, value_name = "FILE")]
        set: PathBuf,

        /// Output directory (defaults to each input's directory)
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Desaturate matched pixels (overrides the mask-set flag)
        #[arg(long)]
        desaturate: bool,

        /// Generate at the mask set's preview height instead of full size
        #[arg(long)]
        preview: bool,

        /// Preview height override in pixels (implies --preview)
        #[arg(long, value_name = "N")]
        preview_height: Option<u32>,

        /// Scan directories recursively
        #[arg(short, long)]
        recursive: bool,

        /// Number of parallel threads
        #[arg(short = 'j', long, value_name = "N")]
        threads: Option<usize>,

        /// Enable verbose output
        #[arg(long)]
        verbose: bool,
    },

    /// Manage mask-set files
    Set {
        #[command(subcommand)]
        action: SetAction,
    },
}

#[derive(Subcommand)]
enum SetAction {
    /// List mask-set files in a directory
    List {
        /// Directory to list (defaults to the current directory)
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Show the contents of a mask-set file
    Show {
        /// Mask-set file path
        set: PathBuf,
    },

    /// Create a new mask-set template
    Create {
        /// Output file path
        output: PathBuf,

        /// Name of the first mask in the template
        #[arg(short, long, default_value = "mask")]
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            inputs,
            set,
            out,
            desaturate,
            preview,
            preview_height,
            recursive,
            threads,
            verbose,
        } => cmd_extract(
            inputs,
            set,
            out,
            desaturate,
            preview,
            preview_height,
            recursive,
            threads,
            verbose,
        ),

        Commands::Set { action } => match action {
            SetAction::List { dir } => cmd_set_list(dir),
            SetAction::Show { set } => cmd_set_show(set),
            SetAction::Create { output, name } => cmd_set_create(output, name),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_extract(
    inputs: Vec<PathBuf>,
    set_path: PathBuf,
    out: Option<PathBuf>,
    desaturate: bool,
    preview: bool,
    preview_height: Option<u32>,
    recursive: bool,
    threads: Option<usize>,
    verbose: bool,
) -> Result<(), String> {
    maskex_core::config::set_verbose(verbose);

    // Configure thread pool if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("Using {} threads for parallel processing", num_threads);
    }

    println!("Loading mask set from {}...", set_path.display());
    let mask_set = maskex_core::presets::load_mask_set(&set_path)?;

    let active_count = mask_set.active_masks().count();
    if active_count == 0 {
        return Err("Mask set contains no active masks".to_string());
    }

    let desaturate = desaturate || mask_set.desaturate;
    println!(
        "  {} active mask(s), desaturate: {}",
        active_count, desaturate
    );
    let target_height = if preview || preview_height.is_some() {
        Some(preview_height.unwrap_or(mask_set.preview_height))
    } else {
        None
    };
    if let Some(h) = target_height {
        println!("  Preview mode: scaling inputs to height {}", h);
    }

    let files = expand_inputs(&inputs, recursive)?;
    if files.is_empty() {
        return Err("No input images found".to_string());
    }

    // Create the output directory up front
    if let Some(out_dir) = &out {
        if !out_dir.exists() {
            std::fs::create_dir_all(out_dir)
                .map_err(|e| format!("Failed to create output directory: {}", e))?;
        }
    }

    println!("\nProcessing {} file(s)...\n", files.len());

    // Progress tracking
    let processed_count = AtomicUsize::new(0);
    let total_files = files.len();

    let results: Vec<Result<usize, String>> = files
        .par_iter()
        .map(|input| {
            let decoded = maskex_core::decoders::decode_image(input)?;

            let source = match target_height {
                Some(h) => maskex_core::resize_to_height(&decoded, h)?,
                None => decoded,
            };

            let mut written = 0;
            for mask in mask_set.active_masks() {
                let generated =
                    maskex_core::mask::generate_mask(&source, None, mask, desaturate)?;

                if let Some(image) = generated {
                    let output_path = determine_output_path(input, &out, &mask.name)?;
                    maskex_core::exporters::export_png(&image, &output_path)?;
                    written += 1;
                }
            }

            let count = processed_count.fetch_add(1, Ordering::SeqCst) + 1;
            println!(
                "[{}/{}] {}: {} mask(s) written",
                count,
                total_files,
                input.display(),
                written
            );

            Ok(written)
        })
        .collect();

    // Summarize results
    let mut success_count = 0;
    let mut errors: Vec<(PathBuf, String)> = Vec::new();

    for (input, result) in files.iter().zip(results.iter()) {
        match result {
            Ok(_) => success_count += 1,
            Err(e) => errors.push((input.clone(), e.clone())),
        }
    }

    println!("\nDone: {} succeeded, {} failed", success_count, errors.len());

    if !errors.is_empty() {
        println!("\nErrors:");
        for (path, error) in &errors {
            println!("  {}: {}", path.display(), error);
        }
        return Err(format!("{} files failed to process", errors.len()));
    }

    Ok(())
}

fn cmd_set_list(dir: Option<PathBuf>) -> Result<(), String> {
    let dir = dir.unwrap_or_else(|| PathBuf::from("."));

    println!("Listing mask sets in: {}", dir.display());
    let sets = maskex_core::presets::list_mask_sets(&dir)?;

    if sets.is_empty() {
        println!("No mask sets found.");
    } else {
        for set in sets {
            println!("  {}", set);
        }
    }

    Ok(())
}

fn cmd_set_show(set_path: PathBuf) -> Result<(), String> {
    let set = maskex_core::presets::load_mask_set(&set_path)?;

    println!("Mask set: {}", set_path.display());
    println!("  Desaturate:     {}", set.desaturate);
    println!("  Preview height: {}", set.preview_height);
    println!("  Masks:          {}", set.masks.len());

    for mask in &set.masks {
        if mask.is_active() {
            println!("\n  {} ({} rule(s))", mask.name, mask.picked_colors.len());
        } else {
            println!("\n  <inactive> ({} rule(s))", mask.picked_colors.len());
        }

        for rule in &mask.picked_colors {
            println!(
                "    color [{:.3}, {:.3}, {:.3}]  threshold {:.3}  coeffs [{:.2}, {:.2}, {:.2}]",
                rule.color[0],
                rule.color[1],
                rule.color[2],
                rule.threshold,
                rule.h_coeff,
                rule.s_coeff,
                rule.v_coeff
            );
        }
    }

    println!();
    Ok(())
}

fn cmd_set_create(output: PathBuf, name: String) -> Result<(), String> {
    println!("Creating new mask set with mask: {}", name);

    let set = maskex_core::MaskSet {
        masks: vec![maskex_core::MaskDefinition {
            name,
            picked_colors: vec![maskex_core::PickedColor {
                color: [1.0, 0.0, 0.0],
                threshold: 0.1,
                ..Default::default()
            }],
        }],
        ..Default::default()
    };

    maskex_core::presets::save_mask_set(&set, &output)?;

    println!("Mask set created: {}", output.display());
    println!("Edit this file to pick your own colors and thresholds.");

    Ok(())
}
