// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Three commands are supported:
//   1. `classify`  — labels every headline with its dominant emotion
//   2. `summarize` — pivots the labels into per-emotion counts
//   3. `visualize` — renders the bar and pie charts
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{ClassifyArgs, Commands, SummarizeArgs, VisualizeArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "news-emotion",
    version = "0.1.0",
    about = "Classify emotions in news headlines, then summarize and chart the results."
)]
pub struct Cli {
    /// The subcommand to run (classify, summarize, or visualize)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Classify(args)  => Self::run_classify(args),
            Commands::Summarize(args) => Self::run_summarize(args),
            Commands::Visualize(args) => Self::run_visualize(args),
        }
    }

    /// Handles the `classify` subcommand.
    /// Converts CLI args into a ClassifyConfig and hands off to Layer 2.
    fn run_classify(args: ClassifyArgs) -> Result<()> {
        use crate::application::classify_use_case::ClassifyUseCase;

        tracing::info!("Starting classification of: {}", args.input);
        println!("Initializing Classifier");

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = ClassifyUseCase::new(args.into());
        let out_path = use_case.execute()?;

        println!(
            "Emotion Classification Complete. Results saved to {}",
            out_path.display()
        );
        Ok(())
    }

    /// Handles the `summarize` subcommand.
    /// Pivots the classified CSV and prints where the overview went.
    fn run_summarize(args: SummarizeArgs) -> Result<()> {
        use crate::application::summarize_use_case::SummarizeUseCase;

        let use_case = SummarizeUseCase::new(args.into());
        let overview = use_case.execute()?;

        println!("Classification overview saved to {}", overview.display());
        Ok(())
    }

    /// Handles the `visualize` subcommand.
    /// Renders the charts and prints their directory.
    fn run_visualize(args: VisualizeArgs) -> Result<()> {
        use crate::application::visualize_use_case::VisualizeUseCase;

        let use_case = VisualizeUseCase::new(args.into());
        let results = use_case.execute()?;

        println!("Visualizations complete! They are saved in {}.", results.display());
        Ok(())
    }
}
