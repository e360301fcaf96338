// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `classify`, `summarize` and
// `visualize`, and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::classify_use_case::ClassifyConfig;
use crate::application::summarize_use_case::SummarizeConfig;
use crate::application::visualize_use_case::VisualizeConfig;

/// The three top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify the dominant emotion of every headline
    Classify(ClassifyArgs),

    /// Pivot classified headlines into per-emotion counts
    Summarize(SummarizeArgs),

    /// Render the emotion distribution charts (writes the overview too)
    Visualize(VisualizeArgs),
}

/// All arguments for the `classify` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Model to classify with: "lexicon" for the bundled offline
    /// backend, or a hosted model id such as
    /// "j-hartmann/emotion-english-distilroberta-base"
    #[arg(long, short = 'm', default_value = "lexicon")]
    pub model: String,

    /// CSV of headlines to classify (title and label columns)
    #[arg(long, default_value = "data/fake_or_real_news.csv")]
    pub input: String,

    /// Directory the classified CSV is written into
    #[arg(long, default_value = "data")]
    pub data_dir: String,

    /// Custom inference endpoint speaking the hosted wire format.
    /// Forces the remote backend regardless of the model id.
    #[arg(long)]
    pub endpoint: Option<String>,
}

/// Convert CLI ClassifyArgs into the application-layer ClassifyConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<ClassifyArgs> for ClassifyConfig {
    fn from(a: ClassifyArgs) -> Self {
        ClassifyConfig {
            model:    a.model,
            input:    a.input,
            data_dir: a.data_dir,
            endpoint: a.endpoint,
        }
    }
}

/// All arguments for the `summarize` command
#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Model id the classified CSV was produced with
    #[arg(long, short = 'm', default_value = "lexicon")]
    pub model: String,

    /// Directory holding the classified CSV
    #[arg(long, default_value = "data")]
    pub data_dir: String,

    /// Root directory for per-model results
    #[arg(long, default_value = "out")]
    pub out_dir: String,
}

impl From<SummarizeArgs> for SummarizeConfig {
    fn from(a: SummarizeArgs) -> Self {
        SummarizeConfig {
            model:    a.model,
            data_dir: a.data_dir,
            out_dir:  a.out_dir,
        }
    }
}

/// All arguments for the `visualize` command
#[derive(Args, Debug)]
pub struct VisualizeArgs {
    /// Model id the classified CSV was produced with
    #[arg(long, short = 'm', default_value = "lexicon")]
    pub model: String,

    /// Directory holding the classified CSV
    #[arg(long, default_value = "data")]
    pub data_dir: String,

    /// Root directory for per-model results
    #[arg(long, default_value = "out")]
    pub out_dir: String,

    /// Cache directory for the downloaded chart themes
    #[arg(long, default_value = "out/stylelib")]
    pub style_dir: String,
}

impl From<VisualizeArgs> for VisualizeConfig {
    fn from(a: VisualizeArgs) -> Self {
        VisualizeConfig {
            model:     a.model,
            data_dir:  a.data_dir,
            out_dir:   a.out_dir,
            style_dir: a.style_dir,
        }
    }
}
