//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Build-time SEO metadata generator for data-driven portfolio sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Project root; other paths are relative to it
    #[arg(short, long, global = true, default_value = ".", value_hint = clap::ValueHint::DirPath)]
    pub root: PathBuf,

    /// Build output directory (relative to project root)
    #[arg(short, long, global = true, default_value = "dist", value_hint = clap::ValueHint::DirPath)]
    pub output: PathBuf,

    /// Static source directory copied into the output by the bundler
    #[arg(short, long, global = true, default_value = "public", value_hint = clap::ValueHint::DirPath)]
    pub public: PathBuf,

    /// Site data file. If omitted, the usual data.json locations are searched
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub data: Option<PathBuf>,

    /// Override the deployment base path (beats BASE_PATH / VITE_BASE)
    #[arg(short = 'B', long = "base-path", global = true)]
    pub base_path: Option<String>,

    /// Override seo.siteUrl.
    ///
    /// Useful for CI/CD deployments where the production URL differs from the
    /// one committed in data.json.
    ///
    /// Example: previewing a branch deploy:
    ///   folio-meta build --site-url "https://preview.example.com"
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write sitemap, feed, robots and manifest, then inject the head fragment
    #[command(visible_alias = "b")]
    Build,

    /// Print the resolved SEO values as JSON without writing anything
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["folio-meta", "build"]).unwrap();
        assert!(matches!(cli.command, Commands::Build));
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.output, PathBuf::from("dist"));
        assert_eq!(cli.public, PathBuf::from("public"));
        assert!(cli.data.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "folio-meta",
            "b",
            "--base-path",
            "/preview",
            "-U",
            "https://example.com",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.base_path.as_deref(), Some("/preview"));
        assert_eq!(cli.site_url.as_deref(), Some("https://example.com"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_query_pretty() {
        let cli = Cli::try_parse_from(["folio-meta", "-d", "site.json", "query", "--pretty"]).unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("site.json")));
        match cli.command {
            Commands::Query { args } => assert!(args.pretty),
            Commands::Build => panic!("expected query"),
        }
    }

    #[test]
    fn test_requires_subcommand() {
        assert!(Cli::try_parse_from(["folio-meta"]).is_err());
    }
}
