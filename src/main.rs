//! CLI entry point for blogview

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blogview::location::Location;
use blogview::view::OutputRegion;

#[derive(Parser)]
#[command(name = "blogview")]
#[command(version)]
#[command(about = "A minimal client-side blog viewer", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the view for a page address
    #[command(alias = "v")]
    View {
        /// Page address, optionally carrying an `?id=` query parameter
        url: String,

        /// Write the rendered markup to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List the posts the manifest describes
    List,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogview=debug,info"
    } else {
        "blogview=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::View { url, out } => {
            let app = blogview::Blogview::new(&base_dir)?;
            let location = Location::parse(&url)?;
            let mut region = OutputRegion::new();

            tracing::info!("Rendering view for {}", location.href());
            app.view(&location, &mut region).await;

            match out {
                Some(path) => std::fs::write(&path, region.html())?,
                None => println!("{}", region.html()),
            }
        }

        Commands::List => {
            let app = blogview::Blogview::new(&base_dir)?;
            app.list().await?;
        }

        Commands::Version => {
            println!("blogview version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
