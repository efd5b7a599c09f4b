//! CLI
//!
//! Plumbing shared by the `chords` and `chords-progression` binaries: flag
//! parsing and logging setup.

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::fretboard::{Renderer, Style};
use crate::voicing::{BelowNut, Voicer};

/// Errors when reading command-line flags
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// A flag was given without its value.
    #[error("missing value for `{0}`")]
    MissingValue(String),

    /// A flag value was not understood.
    #[error("invalid value `{value}` for `{flag}`")]
    InvalidValue {
        /// The flag.
        flag: String,
        /// What was passed.
        value: String,
    },

    /// An unrecognised `--` flag.
    #[error("unknown flag `{0}`")]
    UnknownFlag(String),
}

/// Flags common to both binaries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    /// `--below-nut reject|raise|skip`
    pub below_nut: BelowNut,
    /// `--style tab|grid`
    pub style: Style,
    /// `--seed N`; `None` seeds from the system.
    pub seed: Option<u64>,
}

impl Options {
    /// Split `args` (program name excluded) into options and positionals.
    pub fn parse<I, S>(args: I) -> Result<(Options, Vec<String>), CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut opts = Options::default();
        let mut positional = Vec::new();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            if !arg.starts_with("--") {
                positional.push(arg);
                continue;
            }
            let value = args
                .next()
                .ok_or_else(|| CliError::MissingValue(arg.clone()))?;
            let invalid = || CliError::InvalidValue {
                flag: arg.clone(),
                value: value.clone(),
            };
            match arg.as_str() {
                "--below-nut" => {
                    opts.below_nut = match value.as_str() {
                        "reject" => BelowNut::Reject,
                        "raise" => BelowNut::RaiseOctave,
                        "skip" => BelowNut::Skip,
                        _ => return Err(invalid()),
                    }
                }
                "--style" => {
                    opts.style = match value.as_str() {
                        "tab" => Style::Tab,
                        "grid" => Style::Grid,
                        _ => return Err(invalid()),
                    }
                }
                "--seed" => opts.seed = Some(value.parse().map_err(|_| invalid())?),
                _ => return Err(CliError::UnknownFlag(arg.clone())),
            }
        }

        Ok((opts, positional))
    }

    /// Voicer honouring `--below-nut`.
    pub fn voicer(&self) -> Voicer {
        Voicer::builder().below_nut(self.below_nut).build()
    }

    /// Renderer honouring `--style`.
    pub fn renderer(&self) -> Renderer {
        Renderer::builder().style(self.style).build()
    }

    /// Generator honouring `--seed`.
    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_and_positionals() {
        let (opts, rest) =
            Options::parse(["C", "--style", "grid", "ii", "--below-nut", "raise", "V", "--seed", "9"])
                .unwrap();
        assert_eq!(opts.style, Style::Grid);
        assert_eq!(opts.below_nut, BelowNut::RaiseOctave);
        assert_eq!(opts.seed, Some(9));
        assert_eq!(rest, vec!["C", "ii", "V"]);
    }

    #[test]
    fn defaults() {
        let (opts, rest) = Options::parse(Vec::<String>::new()).unwrap();
        assert_eq!(opts, Options::default());
        assert_eq!(opts.below_nut, BelowNut::Reject);
        assert_eq!(opts.style, Style::Tab);
        assert!(rest.is_empty());
    }

    #[test]
    fn bad_flags() {
        assert_eq!(
            Options::parse(["--style"]),
            Err(CliError::MissingValue("--style".to_string()))
        );
        assert_eq!(
            Options::parse(["--style", "fancy"]),
            Err(CliError::InvalidValue {
                flag: "--style".to_string(),
                value: "fancy".to_string(),
            })
        );
        assert_eq!(
            Options::parse(["--seed", "-1"]),
            Err(CliError::InvalidValue {
                flag: "--seed".to_string(),
                value: "-1".to_string(),
            })
        );
        assert_eq!(
            Options::parse(["--tempo", "90"]),
            Err(CliError::UnknownFlag("--tempo".to_string()))
        );
    }
}
