use anyhow::Result;
use clap::{Parser, Subcommand};
use compalign::cli::{run_adjust, run_align, run_matrix, AlignArgs, MatrixArgs, ScoringArgs};

#[derive(Parser)]
#[command(name = "compalign")]
#[command(version = "0.1.0")]
#[command(about = "Composition-adjusted gapped alignment of protein sequences", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Align every query against every subject
    Align(AlignArgs),

    /// Report the composition adjustment of every query/subject pair
    Adjust(ScoringArgs),

    /// Print a built-in scoring matrix
    Matrix(MatrixArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Align(args) => run_align(args)?,
        Commands::Adjust(args) => run_adjust(args)?,
        Commands::Matrix(args) => run_matrix(args)?,
    }
    Ok(())
}
