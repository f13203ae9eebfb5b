// src/config.rs
use std::path::PathBuf;

use ngstore_ports::directory::QueryOptions;
use ngstore_shared_kernel::{PresentationError, PresentationResult};

use crate::cli::Args;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

/// Settings for one run, resolved from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub path: PathBuf,
    pub query: QueryOptions,
    pub format: OutputFormat,
    pub entry: Option<usize>,
    pub output: Option<PathBuf>,
    pub verbose: bool,
}

pub fn build_config(args: &Args) -> PresentationResult<Config> {
    validate_excludes(&args.exclude)?;

    Ok(Config {
        path: args.path.clone(),
        query: QueryOptions {
            include_hidden: !args.skip_hidden,
            follow_links: !args.no_follow_links,
            exclude_patterns: args.exclude.clone(),
            order: args.order.into(),
        },
        format: args.format.into(),
        entry: args.entry,
        output: args.output.clone(),
        verbose: args.verbose,
    })
}

fn validate_excludes(patterns: &[String]) -> PresentationResult<()> {
    if let Some(blank) = patterns.iter().find(|p| p.trim().is_empty()) {
        return Err(PresentationError::InvalidValue {
            flag: "--exclude".into(),
            value: format!("'{blank}'"),
            reason: "pattern must not be empty".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use ngstore_domain::EntryOrder;

    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("ngstore").chain(argv.iter().copied()))
    }

    #[test]
    fn defaults_list_everything_directories_first() {
        let config = build_config(&parse(&["/data/gis"])).unwrap();
        assert_eq!(config.path, PathBuf::from("/data/gis"));
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.query.include_hidden);
        assert!(config.query.follow_links);
        assert!(config.query.exclude_patterns.is_empty());
        assert_eq!(config.query.order, EntryOrder::DirectoriesFirst);
        assert_eq!(config.entry, None);
        assert_eq!(config.output, None);
        assert!(!config.verbose);
    }

    #[test]
    fn listing_flags_map_to_query_options() {
        let args = parse(&[
            "data",
            "--skip-hidden",
            "--no-follow-links",
            "--order",
            "unsorted",
            "--exclude",
            "*.aux.xml,*.ovr",
            "--exclude",
            "tmp*",
        ]);
        let config = build_config(&args).unwrap();
        assert!(!config.query.include_hidden);
        assert!(!config.query.follow_links);
        assert_eq!(config.query.order, EntryOrder::Unsorted);
        assert_eq!(config.query.exclude_patterns, vec!["*.aux.xml", "*.ovr", "tmp*"]);
    }

    #[test]
    fn output_flags_are_kept() {
        let config = build_config(&parse(&["data", "--format", "json", "--entry", "3", "-o", "out.json", "-v"])).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.entry, Some(3));
        assert_eq!(config.output, Some(PathBuf::from("out.json")));
        assert!(config.verbose);
    }

    #[test]
    fn empty_exclude_pattern_is_rejected() {
        let err = build_config(&parse(&["data", "--exclude", "*.ovr, ,tmp*"])).unwrap_err();
        let PresentationError::InvalidValue { flag, .. } = &err;
        assert_eq!(flag, "--exclude");
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn unknown_format_is_a_parse_error() {
        let res = Args::try_parse_from(["ngstore", "data", "--format", "xml"]);
        assert!(res.is_err());
    }
}
