//! Progression
//!
//! Roman-numeral degrees resolved against a key. Upper-case degrees give a
//! major seventh chord, lower-case degrees a minor seventh.

use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::catalog::Quality;
use crate::note::Note;
use crate::voicing::{Chord, Voicer, VoicingError};

/// Semitones above the tonic for each degree of the major scale.
const MAJOR_SCALE: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

const NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// Errors when resolving a progression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressionError {
    /// A token was not one of `I`..`VII` or `i`..`vii`.
    #[error("unknown degree `{0}`")]
    UnknownDegree(String),

    /// The chord for a degree could not be voiced.
    #[error(transparent)]
    Voicing(#[from] VoicingError),
}

/// A scale degree written as a roman numeral.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Degree {
    step: usize,
    minor: bool,
}

impl Degree {
    /// Degree `step` (1 to 7). Returns `None` outside that range.
    pub fn new(step: usize, minor: bool) -> Option<Degree> {
        (1..=7).contains(&step).then(|| Degree {
            step: step - 1,
            minor,
        })
    }

    /// Scale step, 1 to 7.
    pub fn step(&self) -> usize {
        self.step + 1
    }

    /// True for lower-case numerals.
    pub fn is_minor(&self) -> bool {
        self.minor
    }

    /// Distance above the tonic along the major scale.
    pub fn semitones(&self) -> i32 {
        MAJOR_SCALE[self.step]
    }

    /// Seventh chord quality this degree calls for.
    pub fn quality(&self) -> Quality {
        if self.minor {
            Quality::MinorSeventh
        } else {
            Quality::MajorSeventh
        }
    }

    /// Root of this degree in `key`.
    pub fn root_in(&self, key: Note) -> Note {
        key.transpose(self.semitones())
    }
}

impl FromStr for Degree {
    type Err = ProgressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ProgressionError::UnknownDegree(s.to_string());
        let minor = if s.chars().all(|c| c.is_ascii_uppercase()) {
            false
        } else if s.chars().all(|c| c.is_ascii_lowercase()) {
            true
        } else {
            return Err(unknown());
        };
        let upper = s.to_ascii_uppercase();
        let step = NUMERALS
            .iter()
            .position(|&n| n == upper)
            .ok_or_else(unknown)?;
        Ok(Degree { step, minor })
    }
}

impl Display for Degree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let numeral = NUMERALS[self.step];
        if self.minor {
            f.write_str(&numeral.to_ascii_lowercase())
        } else {
            f.write_str(numeral)
        }
    }
}

/// Voice every degree token in `key`, in order.
///
/// Stops at the first token that is not a degree or that cannot be voiced.
pub fn resolve<S: AsRef<str>>(
    voicer: &Voicer,
    key: Note,
    tokens: &[S],
) -> Result<Vec<Chord>, ProgressionError> {
    tokens
        .iter()
        .map(|token| -> Result<Chord, ProgressionError> {
            let degree: Degree = token.as_ref().parse()?;
            let root = degree.root_in(key);
            debug!(key = %key, degree = %degree, root = %root, "resolving degree");
            Ok(voicer.voice(root, degree.quality())?)
        })
        .collect()
}
