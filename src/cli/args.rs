//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// RSS/Atom feed generator for BD103's blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: feed.toml)
    #[arg(short = 'C', long, global = true, default_value = "feed.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a feed.toml holding the built-in defaults
    #[command(visible_alias = "i")]
    Init {
        /// Directory to create feed.toml in (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,
    },

    /// Generate feed.xml and atom.xml
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print the generated feed to stdout
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Output directory path (relative to the config file)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Minify the written xml
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Read entries from this posts directory instead of the configured source (relative to the config file)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = QueryFormat::Json)]
    pub format: QueryFormat,

    /// Read entries from this posts directory instead of the configured source (relative to the config file)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// What `query` prints.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryFormat {
    /// Feed options and items as JSON
    Json,
    /// RSS 2.0 document
    Rss2,
    /// Atom 1.0 document
    Atom,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build() {
        let cli = Cli::try_parse_from(["bdfeed", "build", "-o", "dist", "--minify", "-V"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("feed.toml"));
        let Commands::Build { build_args } = cli.command else {
            panic!("expected build");
        };
        assert_eq!(build_args.output, Some(PathBuf::from("dist")));
        assert_eq!(build_args.minify, Some(true));
        assert!(build_args.verbose);
        assert_eq!(build_args.content, None);
    }

    #[test]
    fn test_parse_query_format() {
        let cli = Cli::try_parse_from(["bdfeed", "-C", "site.toml", "query", "--format", "atom"])
            .unwrap();
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(!cli.is_init());
        let Commands::Query { args } = cli.command else {
            panic!("expected query");
        };
        assert_eq!(args.format, QueryFormat::Atom);
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::try_parse_from(["bdfeed", "init", "blog"]).unwrap();
        assert!(cli.is_init());
    }

    #[test]
    fn test_content_help_names_base_dir() {
        let cmd = Cli::command();
        for sub in ["build", "query"] {
            let arg = cmd
                .find_subcommand(sub)
                .unwrap()
                .get_arguments()
                .find(|a| a.get_id() == "content")
                .unwrap();
            let help = arg.get_help().unwrap().to_string();
            assert!(help.contains("relative to the config file"), "{sub}: {help}");
        }
    }
}
