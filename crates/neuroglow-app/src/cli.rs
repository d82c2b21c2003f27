use std::path::PathBuf;

use clap::Parser;

/// Neuroglow: an animated neural brain rendered as window background art.
#[derive(Parser, Debug)]
#[command(name = "neuroglow", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error, or a filter directive).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Seed for a reproducible particle layout.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "neuroglow",
            "--config",
            "/tmp/brain.toml",
            "--log-level",
            "debug",
            "--seed",
            "42",
        ])
        .expect("valid args");
        assert_eq!(args.config, Some(PathBuf::from("/tmp/brain.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.seed, Some(42));
    }

    #[test]
    fn flags_are_optional() {
        let args = Args::try_parse_from(["neuroglow"]).expect("no args");
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(args.seed.is_none());
    }

    #[test]
    fn rejects_non_numeric_seed() {
        assert!(Args::try_parse_from(["neuroglow", "--seed", "abc"]).is_err());
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
