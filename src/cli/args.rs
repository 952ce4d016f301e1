//! CLI argument parsing using clap

use crate::types::FileKind;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// One-line usage summary printed on argument errors
pub const USAGE: &str = "usage: update_dependency <filename> <meta|galaxy> <role_name> <role_version>";

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// Update a role dependency's version in a meta or galaxy YAML file
#[derive(Parser, Debug)]
#[command(name = "update_dependency")]
#[command(about = "Pin a role dependency to a version in a meta or galaxy YAML file")]
#[command(version)]
pub struct Cli {
    /// YAML file to update in place
    pub filename: PathBuf,

    /// Shape of the file: `meta` (dependencies key) or `galaxy` (bare list)
    #[arg(value_enum)]
    pub mode: FileKind,

    /// Name of the role whose version is updated
    pub role_name: String,

    /// Version to pin the role to
    pub role_version: String,

    /// Output coloring
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_verify_cli() {
        // Verify that the CLI struct is properly configured
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_args() {
        let cli = Cli::parse_from([
            "update_dependency",
            "meta/main.yml",
            "meta",
            "geerlingguy.java",
            "2.0.0",
        ]);
        assert_eq!(cli.filename, PathBuf::from("meta/main.yml"));
        assert_eq!(cli.mode, FileKind::Meta);
        assert_eq!(cli.role_name, "geerlingguy.java");
        assert_eq!(cli.role_version, "2.0.0");
        assert_eq!(cli.color, ColorChoice::Auto);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_galaxy_mode() {
        let cli = Cli::parse_from(["update_dependency", "requirements.yml", "galaxy", "foo", "v1"]);
        assert_eq!(cli.mode, FileKind::Galaxy);
    }

    #[test]
    fn test_invalid_mode_rejected() {
        let err = Cli::try_parse_from(["update_dependency", "f.yml", "toml", "foo", "1.0.0"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_too_few_args_rejected() {
        let err = Cli::try_parse_from(["update_dependency", "f.yml", "meta", "foo"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_too_many_args_rejected() {
        let result =
            Cli::try_parse_from(["update_dependency", "f.yml", "meta", "foo", "1.0.0", "extra"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_color_and_verbose_flags() {
        let cli = Cli::parse_from([
            "update_dependency",
            "--color",
            "never",
            "-vv",
            "f.yml",
            "meta",
            "foo",
            "1.0.0",
        ]);
        assert_eq!(cli.color, ColorChoice::Never);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_version_may_look_like_a_flag_value() {
        let cli = Cli::parse_from(["update_dependency", "f.yml", "meta", "foo", "v1.0.0-rc.1"]);
        assert_eq!(cli.role_version, "v1.0.0-rc.1");
    }

    #[test]
    fn test_usage_mentions_both_modes() {
        assert!(USAGE.contains("<meta|galaxy>"));
    }
}
