// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// One operation is supported: run the ingestion pipeline.
// The flags only override defaults, so `spam-ingest` with no
// arguments performs the canonical run.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the arguments submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::IngestArgs;

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "spam-ingest",
    version = "0.1.0",
    about = "Fetch a CSV dataset and write seeded train/test splits."
)]
pub struct Cli {
    /// Flags configuring the ingestion run
    #[command(flatten)]
    pub args: IngestArgs,
}

impl Cli {
    /// Hand the parsed arguments to the application layer.
    /// This keeps the CLI layer thin — it only routes, never computes.
    ///
    /// A pipeline failure is logged and printed as a user-facing
    /// line; the process keeps its zero exit status either way.
    pub fn run(self) -> Result<()> {
        use crate::application::ingest_use_case::IngestUseCase;

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = IngestUseCase::new(self.args.into());

        if let Err(e) = use_case.execute() {
            tracing::error!("Failed to complete the data ingestion process: {}", e);
            println!("Error : {}", e);
        }
        Ok(())
    }
}
