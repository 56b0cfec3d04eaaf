use clap::{Parser, Subcommand};

use revlens_analysis::Analyzer;

#[derive(Debug, Parser)]
#[command(name = "revlens-cli")]
#[command(about = "revlens command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a product page's reviews and print the report as JSON.
    Analyze {
        /// Product page URL.
        url: String,
        /// Number of review pages to extract.
        #[arg(long, default_value_t = 1)]
        pages: u32,
        /// Sentiment model override for this run.
        #[arg(long)]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze { url, pages, model } => {
            let config = revlens_core::load_app_config()?;
            let analyzer = Analyzer::from_config(&config)?;
            let report = analyzer.analyze(&url, pages, model.as_deref()).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
