//! Command-line configuration for the `decaf-frontend` binary.

use std::path::PathBuf;

use thiserror::Error;

pub const USAGE: &str = "usage: decaf-frontend <FILE> [--check] [--quiet]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source file to scan
    pub file: PathBuf,
    /// Run the grammar recognizer after scanning
    pub check_grammar: bool,
    /// Suppress the token dump
    pub quiet: bool,
}

impl Config {
    /// Builds a configuration from the process arguments, without the
    /// program name.
    pub fn from_args<I>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut file = None;
        let mut check_grammar = false;
        let mut quiet = false;

        for arg in args {
            match arg.as_str() {
                "--check" => check_grammar = true,
                "--quiet" => quiet = true,
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()));
                }
                _ if file.is_some() => return Err(ConfigError::ExtraArgument(arg)),
                _ => file = Some(PathBuf::from(arg)),
            }
        }

        let file = file.ok_or(ConfigError::MissingFile)?;

        Ok(Config {
            file,
            check_grammar,
            quiet,
        })
    }

    pub fn file_name(&self) -> String {
        self.file.to_string_lossy().into_owned()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing source file")]
    MissingFile,
    #[error("unknown flag {0}")]
    UnknownFlag(String),
    #[error("unexpected argument {0}")]
    ExtraArgument(String),
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::{Config, ConfigError};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn test_file_only() {
        let config = Config::from_args(args(&["prog.decaf"])).unwrap();
        assert_eq!(
            config,
            Config {
                file: PathBuf::from("prog.decaf"),
                check_grammar: false,
                quiet: false,
            }
        );
        assert_eq!(config.file_name(), "prog.decaf");
    }

    #[test]
    fn test_flags_in_any_order() {
        let config = Config::from_args(args(&["--quiet", "prog.decaf", "--check"])).unwrap();
        assert!(config.check_grammar);
        assert!(config.quiet);
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(Config::from_args(args(&["--check"])), Err(ConfigError::MissingFile));
        assert_eq!(Config::from_args(Vec::new()), Err(ConfigError::MissingFile));
    }

    #[test]
    fn test_unknown_flag() {
        assert_eq!(
            Config::from_args(args(&["a.decaf", "--verbose"])),
            Err(ConfigError::UnknownFlag("--verbose".to_string()))
        );
    }

    #[test]
    fn test_extra_argument() {
        let error = Config::from_args(args(&["a.decaf", "b.decaf"])).unwrap_err();
        assert_eq!(error, ConfigError::ExtraArgument("b.decaf".to_string()));
        assert_eq!(error.to_string(), "unexpected argument b.decaf");
    }
}
