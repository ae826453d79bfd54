use clap::{Parser, Subcommand};
use std::path::PathBuf;
use taskwheel::report::{self, OutputFormat};
use taskwheel::{config, document, host};

#[derive(Parser, Debug)]
#[command(name = "taskwheel", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Place the petals of a page around its wheel and print their offsets
    Layout {
        /// Page description (.toml or .json)
        page: PathBuf,

        #[arg(short, long, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// Place the petals of a page and draw the result to a PNG
    #[cfg(feature = "render")]
    Render {
        /// Page description (.toml or .json)
        page: PathBuf,

        #[arg(short, long)]
        output: PathBuf,
    },
    /// Write the default config file if there is none and print its path
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Layout { page, format } => {
            let config = config::load_or_default();
            let mut page = document::load_page(&page)?;
            host::ready_page(&mut page, &config.selectors)?;

            let reports = report::petal_reports(&page, &config.selectors);
            print!("{}", report::format_reports(&reports, format)?);
            Ok(())
        }
        #[cfg(feature = "render")]
        Commands::Render { page, output } => {
            let config = config::load_or_default();
            let mut page = document::load_page(&page)?;
            host::ready_page(&mut page, &config.selectors)?;

            let colors = taskwheel::theme::ThemeColors::from_config(&config.theme);
            taskwheel::render::render_png(&page, &config.selectors, &colors, &output)?;
            println!("{}", output.display());
            Ok(())
        }
        Commands::InitConfig => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
