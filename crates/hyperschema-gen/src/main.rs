use clap::Parser;

use crate::ui::{Cli, Colors, Commands, colors};

mod api;
mod generator;
mod ui;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::new(colors::colors_enabled(cli.color), colors::detect_theme(cli.theme));

  match cli.command {
    Commands::Generate(command) => {
      let config = ui::commands::GenerateConfig::from_command(command)?;
      ui::commands::generate_code(config, &colors).await?;
    }
    Commands::Schema { input, pretty } => {
      ui::commands::print_schema(&input, pretty).await?;
    }
  }

  Ok(())
}
