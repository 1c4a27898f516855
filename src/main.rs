use anyhow::Context;
use clap::{Parser, Subcommand};

mod cli;

#[derive(Parser)]
#[command(name = "snowtooth")]
#[command(version = "0.1.0")]
#[command(about = "GraphQL API for ski lifts and trails", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start GraphQL server
    Serve {
        /// Config file path (defaults apply when omitted)
        #[arg(long)]
        config: Option<String>,

        /// Server port, overrides the config file
        #[arg(long)]
        port: Option<u16>,

        /// Interface to bind, overrides the config file
        #[arg(long)]
        bind: Option<String>,
    },

    /// Generate the default configuration
    Init {
        /// Output config file path (if not specified, outputs to stdout)
        #[arg(long)]
        output: Option<String>,
    },

    /// Load the data files and verify lift/trail cross references
    Check {
        /// Config file path (defaults apply when omitted)
        #[arg(long)]
        config: Option<String>,
    },

    /// Print the GraphQL schema (SDL)
    Schema {
        /// Config file path (defaults apply when omitted)
        #[arg(long)]
        config: Option<String>,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(long)]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, port, bind } => {
            cli::serve::run(config, port, bind)
                .await
                .context("failed to run the GraphQL server")?;
        }
        Commands::Init { output } => {
            cli::init::run(output).context("failed to generate configuration")?;
        }
        Commands::Check { config } => {
            cli::check::run(config).context("data check failed")?;
        }
        Commands::Schema { config, output } => {
            cli::schema::run(config, output).context("failed to print schema")?;
        }
    }

    Ok(())
}
