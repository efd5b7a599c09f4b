//! Note
//!
//! The twelve chromatic pitch classes, their canonical names, and
//! transposition modulo the octave.

use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Number of pitch classes in an octave.
pub const SEMITONES: usize = 12;

/// Canonical spelling for each pitch class, indexed from C.
const NOTE_NAMES: [&str; SEMITONES] = [
    "C", "C#", "D", "Eb", "E", "F", "F#", "G", "G#", "A", "Bb", "B",
];

/// Twelve chromatic pitch classes
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Note {
    /// C
    C,
    /// C sharp / D flat
    Cs,
    /// D
    D,
    /// E flat / D sharp
    Eb,
    /// E
    E,
    /// F
    F,
    /// F sharp / G flat
    Fs,
    /// G
    G,
    /// G sharp / A flat
    Gs,
    /// A
    A,
    /// B flat / A sharp
    Bb,
    /// B
    B,
}

/// Errors when reading a note name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNoteError {
    /// The input matched no canonical name or enharmonic alias.
    #[error("No known note: {0}")]
    Unknown(String),
}

impl Note {
    /// All pitch classes in chromatic order starting from C.
    pub const ALL: [Note; SEMITONES] = [
        Note::C,
        Note::Cs,
        Note::D,
        Note::Eb,
        Note::E,
        Note::F,
        Note::Fs,
        Note::G,
        Note::Gs,
        Note::A,
        Note::Bb,
        Note::B,
    ];

    /// Build a note from any integer, wrapping into the octave.
    ///
    /// Negative values wrap upwards, so `-1` is `B`.
    pub const fn from_index(idx: i32) -> Note {
        Note::ALL[idx.rem_euclid(SEMITONES as i32) as usize]
    }

    /// Semitones above C, always in `0..12`.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Canonical name, e.g. `"F#"` or `"Bb"`.
    pub const fn name(self) -> &'static str {
        NOTE_NAMES[self as usize]
    }

    /// Move by `semitones`, up or down, staying inside the octave.
    pub const fn transpose(self, semitones: i32) -> Note {
        Note::from_index(self as i32 + semitones)
    }

    /// One semitone up.
    pub const fn inc(self) -> Note {
        self.transpose(1)
    }

    /// One semitone down.
    pub const fn dec(self) -> Note {
        self.transpose(-1)
    }

    /// Look up a note name, ignoring case.
    ///
    /// Accepts the canonical spellings plus the common enharmonic
    /// alternatives (`Db`, `D#`, `Gb`, `Ab`, `A#`). Returns `None` on
    /// anything else.
    pub fn parse(name: &str) -> Option<Note> {
        let note = match name.to_ascii_lowercase().as_str() {
            "c" => Note::C,
            "c#" | "db" => Note::Cs,
            "d" => Note::D,
            "d#" | "eb" => Note::Eb,
            "e" => Note::E,
            "f" => Note::F,
            "f#" | "gb" => Note::Fs,
            "g" => Note::G,
            "g#" | "ab" => Note::Gs,
            "a" => Note::A,
            "a#" | "bb" => Note::Bb,
            "b" => Note::B,
            _ => return None,
        };
        Some(note)
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Note {
    type Err = ParseNoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Note::parse(s).ok_or_else(|| ParseNoteError::Unknown(s.to_string()))
    }
}
