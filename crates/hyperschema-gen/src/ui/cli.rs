use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "hyperschema-gen")]
#[command(version, about = "JSON hyper-schema generator for API descriptions")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Generate the schema document and its mount module
  Generate(GenerateCommand),
  /// Print the derived schema document to stdout
  Schema {
    /// Path to the API description JSON file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Pretty-print the document
    #[arg(long, default_value_t = false)]
    pretty: bool,
  },
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Path to the API description JSON file
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Output root; artifacts are written under `<root>/schema`
  #[arg(short, long, value_name = "DIR", default_value = ".")]
  pub output: PathBuf,

  /// Enable verbose output with per-artifact detail
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}
