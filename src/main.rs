use bank::{
    adapter::LineSource,
    service::{Replay, Shell, boot, mock::generator},
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bank", version, about = "A single-account toy bank", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Replay an action script (CSV with a `type` column) instead of starting the shell
    #[arg(value_name = "FILE")]
    file: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a random action script to a file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "actions.csv", value_name = "FILE")]
        output: String,

        /// Number of actions to generate
        #[arg(short, long, default_value = "20", value_name = "COUNT")]
        count: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so the rendered account on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    match args.command {
        Some(Commands::Generate { output, count }) => {
            generator(&output, count)?;
        }
        None => match args.file {
            Some(file) => {
                let state = Replay::new(boot(), file).process()?;
                Replay::output_csv(&state, std::io::stdout())?;
            }
            None => {
                let shell = Shell::new(boot(), LineSource::stdin(), std::io::stdout());
                shell.run().await?;
            }
        },
    }

    Ok(())
}
