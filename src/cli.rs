use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "commscore")]
#[command(about = "English communication quality scorer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a piece of transcribed English text
    Analyze {
        /// Text to analyze (reads stdin when neither TEXT nor --file is given)
        text: Option<String>,

        /// Read the text from a file
        #[arg(short = 'f', long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Reference corpus used to rank word frequencies
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Word list ordered most frequent first, one word per line
        #[arg(long = "word-ranks", conflicts_with = "corpus")]
        word_ranks: Option<PathBuf>,

        /// Tab-separated `word<TAB>sense count` table
        #[arg(long)]
        senses: Option<PathBuf>,

        /// CMU-style pronunciation dictionary for syllable counts
        #[arg(long)]
        syllables: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .commscore.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Run the scoring modules one after another
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        /// -v: Show module summaries
        /// -vv: Show per-module calculations
        /// -vvv: Show all trace information
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Json),
            crate::io::output::OutputFormat::Json
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Markdown),
            crate::io::output::OutputFormat::Markdown
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Terminal),
            crate::io::output::OutputFormat::Terminal
        );
    }

    #[test]
    fn test_cli_parsing_analyze_command() {
        let args = vec![
            "commscore",
            "analyze",
            "The cat sat on the mat.",
            "--format",
            "json",
            "--no-parallel",
            "-vv",
        ];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Analyze {
                text,
                file,
                format,
                no_parallel,
                verbosity,
                ..
            } => {
                assert_eq!(text.as_deref(), Some("The cat sat on the mat."));
                assert!(file.is_none());
                assert_eq!(format, OutputFormat::Json);
                assert!(no_parallel);
                assert_eq!(verbosity, 2);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_text_and_file_conflict() {
        let result = Cli::try_parse_from(["commscore", "analyze", "hello", "--file", "speech.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(["commscore", "init", "--force"]);

        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }
}
