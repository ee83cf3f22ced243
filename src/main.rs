//! CLI entry point for realtor-site

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use realtor_site::{commands, server, Site};

#[derive(Parser)]
#[command(name = "realtor-site")]
#[command(version)]
#[command(about = "Generate a real-estate agent's website from one identity record", long_about = None)]
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
    /// Initialize a new site with a sample agent
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,

        /// Fail when a page has a broken reference
        #[arg(long)]
        strict: bool,
    },

    /// Start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Enable static mode (no file watching)
        #[arg(long)]
        r#static: bool,
    },

    /// Clean the public folder
    Clean,

    /// List site content
    List {
        /// Type of content to list (sections, services, testimonials, posts, faq, projects)
        #[arg(default_value = "sections")]
        r#type: String,
    },

    /// Print the value at a content path, e.g. blog.posts.0.title
    Get { path: String },

    /// Validate the content without writing anything
    Check,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "realtor_site=debug,info"
    } else {
        "realtor_site=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::Generate { watch, strict } => {
            let site = Site::new(&base_dir)?;
            tracing::info!("Generating static files...");

            let report = commands::generate::run_with_options(&site, strict)?;
            if report.is_clean() {
                println!("Generated {} pages", report.pages.len());
            } else {
                println!(
                    "Generated {} pages, {} with broken references",
                    report.pages.len(),
                    report.failures.len()
                );
            }

            if watch {
                tracing::info!("Watching for file changes...");
                commands::generate::watch(&site, strict).await?;
            }
        }

        Commands::Server {
            port,
            ip,
            open,
            r#static,
        } => {
            let site = Site::new(&base_dir)?;

            tracing::info!("Generating static files...");
            site.generate()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            server::start(&site, &ip, port, !r#static, open).await?;
        }

        Commands::Clean => {
            let site = Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let site = Site::new(&base_dir)?;
            commands::list::run(&site, &r#type)?;
        }

        Commands::Get { path } => {
            let site = Site::new(&base_dir)?;
            commands::get::run(&site, &path)?;
        }

        Commands::Check => {
            let site = Site::new(&base_dir)?;
            commands::check::run(&site)?;
        }

        Commands::Version => {
            println!("realtor-site version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
