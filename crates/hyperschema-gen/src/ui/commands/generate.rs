use std::{fs, path::PathBuf};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  api::ApiDescription,
  generator::orchestrator::Generator,
  ui::{Colors, GenerateCommand},
  utils::description::DescriptionLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      verbose,
      quiet,
    } = command;

    if verbose && quiet {
      anyhow::bail!("--verbose and --quiet are mutually exclusive");
    }

    Ok(Self {
      input,
      output,
      verbose,
      quiet,
    })
  }

  async fn load_description(&self) -> anyhow::Result<ApiDescription> {
    DescriptionLoader::open(&self.input).await?.parse()
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading API description from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self, api: &ApiDescription) {
    self.info(
      &format!("Generating hyper-schema for API `{}`...", api.name)
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_writing(&self, dir: &std::path::Path) {
    self.info(
      &format!("Writing to: {}", dir.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn print_artifacts(&self, files: &[PathBuf]) {
    self.stat("Artifacts written:", files.len().to_string());
    if let Some(schema) = files.last()
      && let Ok(metadata) = fs::metadata(schema)
    {
      self.stat("Schema document:", format!("{} bytes", metadata.len()));
    }
    if self.config.verbose {
      for file in files {
        self.stat("", file.display().to_string());
      }
    }
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated schema artifacts".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let api = config.load_description().await?;

  logger.log_generating(&api);
  let mut generator = Generator::new(&config.output);
  logger.log_writing(generator.schema_dir());
  let files = generator.generate(&api)?;

  logger.print_artifacts(&files);
  logger.log_success();
  Ok(())
}
