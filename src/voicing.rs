//! Voicing
//!
//! Resolves catalogue shapes into playable fret positions for a concrete
//! root, and decides what happens to shapes that would fall below the nut.

use std::fmt::Display;
use thiserror::Error;
use tracing::{debug, trace};

use crate::catalog::Quality;
use crate::fretboard::Fretboard;
use crate::note::Note;
use crate::tuning::STRING_COUNT;

/// Frets in an octave, used when raising a shape.
const OCTAVE: i32 = 12;

/// A single string of a resolved voicing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Fret {
    /// String is not played.
    Muted,
    /// String is fretted here; `0` is the open string.
    ///
    /// Tab cells are four characters wide, so frets up to 255 keep columns
    /// aligned: `-7--`, `12--`, `100-`.
    At(u8),
}

/// Fret positions for all six strings, string 0 (low E) first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Voicing(pub [Fret; STRING_COUNT]);

impl Voicing {
    /// Frets as a slice, string 0 first.
    pub fn frets(&self) -> &[Fret; STRING_COUNT] {
        &self.0
    }

    /// Highest fretted position, if any string is played.
    pub fn highest(&self) -> Option<u8> {
        self.0
            .iter()
            .filter_map(|f| match f {
                Fret::At(n) => Some(*n),
                Fret::Muted => None,
            })
            .max()
    }
}

/// What to do with a shape whose resolved frets go below the nut.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BelowNut {
    /// Fail the whole chord with [`VoicingError::BelowNut`].
    #[default]
    Reject,
    /// Move the offending shape up twelve frets.
    RaiseOctave,
    /// Leave the offending shape out.
    Skip,
}

/// Errors when voicing a chord
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoicingError {
    /// A shape resolved to a fret below the nut.
    #[error("{chord} shape {shape} puts string {string} at fret {fret}")]
    BelowNut {
        /// Name of the chord being voiced.
        chord: String,
        /// Index of the shape within the quality's catalogue entry.
        shape: usize,
        /// String carrying the negative fret.
        string: usize,
        /// The resolved fret.
        fret: i32,
    },

    /// Every shape was skipped.
    #[error("{chord} has no shape playable above the nut")]
    NoPlayableShape {
        /// Name of the chord being voiced.
        chord: String,
    },
}

/// A named chord with one voicing per usable catalogue shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    /// Root pitch class.
    pub root: Note,
    /// Chord quality.
    pub quality: Quality,
    /// Resolved shapes, in catalogue order.
    pub voicings: Vec<Voicing>,
}

impl Chord {
    /// Root name followed by the quality suffix, e.g. `"F#min7(b5)"`.
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// One fretboard column per voicing.
    pub fn fretboard(&self) -> Fretboard {
        let mut board = Fretboard::new();
        board.add_chord(self);
        board
    }
}

impl Display for Chord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.root, self.quality)
    }
}

/// Builder for `Voicer` to choose the below-nut policy
pub struct VoicerBuilder {
    below_nut: BelowNut,
}

impl VoicerBuilder {
    /// Create a new builder with `BelowNut::Reject`
    pub fn new() -> Self {
        VoicerBuilder {
            below_nut: BelowNut::Reject,
        }
    }

    /// Set the policy for shapes that land below the nut
    pub fn below_nut(mut self, policy: BelowNut) -> Self {
        self.below_nut = policy;
        self
    }

    /// Build the `Voicer`
    pub fn build(self) -> Voicer {
        Voicer {
            below_nut: self.below_nut,
        }
    }
}

impl Default for VoicerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns a root and a quality into a [`Chord`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Voicer {
    below_nut: BelowNut,
}

impl Voicer {
    /// Return a builder to customize the below-nut policy
    pub fn builder() -> VoicerBuilder {
        VoicerBuilder::new()
    }

    /// Create a voicer that rejects shapes below the nut
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Active below-nut policy.
    pub fn below_nut(&self) -> BelowNut {
        self.below_nut
    }

    /// Voice `quality` on `root`.
    ///
    /// Returns:
    /// - `Err(BelowNut)` under `BelowNut::Reject` if any shape goes below fret 0.
    /// - `Err(NoPlayableShape)` under `BelowNut::Skip` if every shape does.
    pub fn voice(&self, root: Note, quality: Quality) -> Result<Chord, VoicingError> {
        let mut chord = Chord {
            root,
            quality,
            voicings: Vec::with_capacity(quality.shapes().len()),
        };

        for (idx, shape) in quality.shapes().iter().enumerate() {
            let raw = shape.frets(root);
            match lowest(&raw) {
                Some((string, fret)) if fret < 0 => match self.below_nut {
                    BelowNut::Reject => {
                        return Err(VoicingError::BelowNut {
                            chord: chord.name(),
                            shape: idx,
                            string,
                            fret,
                        });
                    }
                    BelowNut::RaiseOctave => {
                        debug!(chord = %chord, shape = idx, fret, "raising shape an octave");
                        chord.voicings.push(place(&raw, OCTAVE));
                    }
                    BelowNut::Skip => {
                        debug!(chord = %chord, shape = idx, fret, "skipping shape below the nut");
                    }
                },
                _ => chord.voicings.push(place(&raw, 0)),
            }
        }

        if chord.voicings.is_empty() {
            return Err(VoicingError::NoPlayableShape { chord: chord.name() });
        }

        trace!(chord = %chord, voicings = chord.voicings.len(), "voiced chord");
        Ok(chord)
    }
}

/// Lowest fretted string and its fret.
fn lowest(raw: &[Option<i32>; STRING_COUNT]) -> Option<(usize, i32)> {
    raw.iter()
        .enumerate()
        .filter_map(|(s, f)| f.map(|f| (s, f)))
        .min_by_key(|&(_, f)| f)
}

/// Shift by `shift` frets; callers guarantee the result is non-negative.
fn place(raw: &[Option<i32>; STRING_COUNT], shift: i32) -> Voicing {
    Voicing(raw.map(|f| match f {
        Some(n) => Fret::At((n + shift) as u8),
        None => Fret::Muted,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Anchor;

    #[test]
    fn major_seventh_of_c() {
        let chord = Voicer::new().voice(Note::C, Quality::MajorSeventh).unwrap();
        assert_eq!(chord.name(), "Cmaj7");
        assert_eq!(chord.voicings.len(), 4);

        let first = chord.voicings[0];
        assert_eq!(first.0[0], Fret::Muted);
        assert_eq!(first.0[1], Fret::At(Anchor::A.base_fret(Note::C)));
        assert_eq!(
            first,
            Voicing([Fret::Muted, Fret::At(3), Fret::At(5), Fret::At(4), Fret::At(5), Fret::Muted])
        );
    }

    #[test]
    fn names_use_canonical_spelling() {
        let voicer = Voicer::builder().below_nut(BelowNut::RaiseOctave).build();
        let chord = voicer.voice(Note::Fs, Quality::MinorSeventhFlatFive).unwrap();
        assert_eq!(chord.to_string(), "F#min7(b5)");
        let chord = voicer.voice(Note::Bb, Quality::DominantSeventhFlatNineFlatThirteen).unwrap();
        assert_eq!(chord.name(), "Bb7(b9,b13)");
        assert_eq!(chord.name(), chord.to_string());
    }

    #[test]
    fn reject_reports_the_offending_string() {
        // A minor ninth on the open A string needs fret -2 on the D string.
        let err = Voicer::new().voice(Note::A, Quality::MinorNinth).unwrap_err();
        assert_eq!(
            err,
            VoicingError::BelowNut {
                chord: "Amin9".to_string(),
                shape: 0,
                string: 2,
                fret: -2,
            }
        );
    }

    #[test]
    fn raise_octave_moves_whole_shape() {
        let voicer = Voicer::builder().below_nut(BelowNut::RaiseOctave).build();
        let chord = voicer.voice(Note::A, Quality::MinorNinth).unwrap();
        assert_eq!(
            chord.voicings[0],
            Voicing([Fret::Muted, Fret::At(12), Fret::At(10), Fret::At(12), Fret::At(12), Fret::Muted])
        );
        // D anchor: A is at fret 7 on the D string, already playable.
        assert_eq!(
            chord.voicings[1],
            Voicing([Fret::Muted, Fret::Muted, Fret::At(7), Fret::At(5), Fret::At(8), Fret::At(7)])
        );
    }

    #[test]
    fn skip_drops_only_unplayable_shapes() {
        let voicer = Voicer::builder().below_nut(BelowNut::Skip).build();
        let chord = voicer.voice(Note::A, Quality::MinorNinth).unwrap();
        assert_eq!(chord.voicings.len(), 1);
        assert_eq!(chord.voicings[0].highest(), Some(8));
    }

    #[test]
    fn skip_always_leaves_a_shape() {
        // Anchors on low E and A are a fourth apart, so no root sits low on both.
        let voicer = Voicer::builder().below_nut(BelowNut::Skip).build();
        for root in Note::ALL {
            for quality in Quality::ALL {
                let chord = voicer.voice(root, quality).unwrap();
                assert!(!chord.voicings.is_empty());
            }
        }
    }

    #[test]
    fn default_policy_is_reject() {
        assert_eq!(Voicer::default().below_nut(), BelowNut::Reject);
        assert_eq!(Voicer::new(), Voicer::default());
    }
}
