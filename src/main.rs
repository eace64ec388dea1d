use anyhow::Result;
use clap::Parser;
use commscore::cli::{Cli, Commands};
use commscore::commands::{self, AnalyzeConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            text,
            file,
            corpus,
            word_ranks,
            senses,
            syllables,
            format,
            output,
            config,
            no_parallel,
            verbosity,
        } => commands::handle_analyze(AnalyzeConfig {
            text,
            file,
            corpus,
            word_ranks,
            senses,
            syllables,
            format,
            output,
            config,
            parallel: !no_parallel,
            verbosity,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
