//! CLI logic for the Apiary layout tool.
//!
//! This module contains the core CLI logic for the Apiary layout tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use apiary::{ApiaryError, SwarmBuilder};

/// Run the Apiary CLI application
///
/// This function reads a poll-results JSON file, computes the swarm
/// geometry, and writes the positioned circles and chart size as JSON to
/// the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ApiaryError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed poll-results payloads
/// - Layout errors
pub fn run(args: &Args) -> Result<(), ApiaryError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing poll results"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Compute geometry using the SwarmBuilder API
    let builder = SwarmBuilder::new(app_config);
    let results = builder.load(&source)?;

    if results.is_empty() {
        info!("No responses in poll results");
    }

    let layout = builder.layout(&results)?;

    // Write output file
    let geometry = serde_json::to_string_pretty(&layout)
        .map_err(|err| ApiaryError::Data(format!("failed to serialize layout: {err}")))?;
    fs::write(&args.output, geometry)?;

    info!(
        output_file = args.output,
        circles_len = layout.circles().len();
        "Geometry exported successfully"
    );

    Ok(())
}
