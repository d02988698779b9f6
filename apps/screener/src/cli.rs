//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cv-screener", version)]
#[command(about = "Rule-based CV screening against job position profiles")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// How skills, certifications and career keywords are matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MatcherKind {
    /// Either string contained in the other ("react" ~ "reactjs")
    #[default]
    Substring,
    /// Whole tokens only ("java" does not match "javascript")
    Token,
}

/// Options that change how the scorer is bound.
#[derive(Args, Debug, Clone)]
pub struct ScoringArgs {
    #[arg(long, value_enum, default_value_t = MatcherKind::Substring)]
    pub matcher: MatcherKind,

    /// Scoring tables JSON (related fields, language tiers, score bands)
    #[arg(long)]
    pub tables: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one CV against a position
    Score {
        /// Preset key (dev, pm, marketing) or path to a position profile JSON
        #[arg(short, long)]
        position: String,

        /// CV file: structured JSON, or PDF/TXT/MD text to extract
        #[arg(long, required_unless_present = "form", conflicts_with = "form")]
        cv: Option<PathBuf>,

        /// Form submission JSON instead of a CV file
        #[arg(long)]
        form: Option<PathBuf>,

        /// Also fetch qualitative insights from the language API
        #[arg(long)]
        insights: bool,

        #[command(flatten)]
        scoring: ScoringArgs,

        /// Print JSON instead of the console report
        #[arg(long)]
        json: bool,
    },

    /// Score several CVs and compare them pairwise
    Compare {
        /// Preset key (dev, pm, marketing) or path to a position profile JSON
        #[arg(short, long)]
        position: String,

        /// CV files, at least two
        #[arg(long = "cv", required = true, num_args = 1..)]
        cvs: Vec<PathBuf>,

        #[command(flatten)]
        scoring: ScoringArgs,

        #[arg(long)]
        json: bool,
    },

    /// Free-text analysis of a CV against a professional field's criteria
    Analyze {
        /// IT, Marketing, Finance, Accounting or Human Resources
        #[arg(short, long)]
        field: String,

        #[arg(long)]
        cv: PathBuf,
    },

    /// Check a CV for common quality problems and suggest remedies
    Review {
        #[arg(long)]
        cv: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// List built-in position presets
    Presets,
}
