//! Catalog
//!
//! Fixed jazz shell voicings for each supported chord quality.
//!
//! Every quality owns two to four shapes. A shape names the anchor string
//! its root sits on and, per string, either a mute or a fret offset from
//! the anchor's base fret. There is no derivation here, only lookup.

use std::fmt::Display;

use crate::note::Note;
use crate::tuning::{Anchor, STRING_COUNT};

/// Number of chord qualities in the catalogue
const NUM_QUALITIES: usize = 19;

/// One string of a shape template.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Slot {
    /// String is not played.
    Muted,
    /// Fret offset relative to the anchor's base fret.
    Offset(i8),
}

/// A voicing template, anchored on one of the three low strings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Shape {
    /// String whose base fret the offsets are measured from.
    pub anchor: Anchor,
    /// One slot per string, string 0 (low E) first.
    pub slots: [Slot; STRING_COUNT],
}

impl Shape {
    const fn new(anchor: Anchor, slots: [Slot; STRING_COUNT]) -> Shape {
        Shape { anchor, slots }
    }

    /// Resolve offsets against the base fret for `root`.
    ///
    /// `None` marks a muted string. No range check is applied, so a shape
    /// with negative offsets yields negative frets for roots that sit low
    /// on the anchor string.
    pub fn frets(&self, root: Note) -> [Option<i32>; STRING_COUNT] {
        let base = self.anchor.base_fret(root) as i32;
        self.slots.map(|slot| match slot {
            Slot::Muted => None,
            Slot::Offset(off) => Some(base + off as i32),
        })
    }
}

/// Supported chord qualities, in catalogue order
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quality {
    /// maj7
    MajorSeventh,
    /// maj6
    MajorSixth,
    /// min7
    MinorSeventh,
    /// min6
    MinorSixth,
    /// min9
    MinorNinth,
    /// min11
    MinorEleventh,
    /// 7
    DominantSeventh,
    /// 9
    DominantNinth,
    /// 13
    DominantThirteenth,
    /// min7(b5), the half-diminished chord
    MinorSeventhFlatFive,
    /// dim7
    DiminishedSeventh,
    /// 7(b5)
    DominantSeventhFlatFive,
    /// 7(#9)
    DominantSeventhSharpNine,
    /// 7(b13)
    DominantSeventhFlatThirteen,
    /// 7(b9,b13)
    DominantSeventhFlatNineFlatThirteen,
    /// 7b5(b9)
    DominantSeventhFlatFiveFlatNine,
    /// 7b5(#9)
    DominantSeventhFlatFiveSharpNine,
    /// 7#5(b9)
    DominantSeventhSharpFiveFlatNine,
    /// 7#5(#9)
    DominantSeventhSharpFiveSharpNine,
}

impl Quality {
    /// Every quality, in the stable order used for indexing and random picks.
    pub const ALL: [Quality; NUM_QUALITIES] = [
        Quality::MajorSeventh,
        Quality::MajorSixth,
        Quality::MinorSeventh,
        Quality::MinorSixth,
        Quality::MinorNinth,
        Quality::MinorEleventh,
        Quality::DominantSeventh,
        Quality::DominantNinth,
        Quality::DominantThirteenth,
        Quality::MinorSeventhFlatFive,
        Quality::DiminishedSeventh,
        Quality::DominantSeventhFlatFive,
        Quality::DominantSeventhSharpNine,
        Quality::DominantSeventhFlatThirteen,
        Quality::DominantSeventhFlatNineFlatThirteen,
        Quality::DominantSeventhFlatFiveFlatNine,
        Quality::DominantSeventhFlatFiveSharpNine,
        Quality::DominantSeventhSharpFiveFlatNine,
        Quality::DominantSeventhSharpFiveSharpNine,
    ];

    /// Suffix appended to the root name, e.g. `"min7(b5)"`.
    pub const fn suffix(self) -> &'static str {
        VOICINGS[self as usize].0
    }

    /// Shape templates, in display order.
    pub const fn shapes(self) -> &'static [Shape] {
        VOICINGS[self as usize].1
    }

    /// Find the quality whose suffix is exactly `suffix`.
    pub fn from_suffix(suffix: &str) -> Option<Quality> {
        Quality::ALL.into_iter().find(|q| q.suffix() == suffix)
    }
}

impl Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

const X: Slot = Slot::Muted;

const fn o(off: i8) -> Slot {
    Slot::Offset(off)
}

use Anchor::{LowE as E, A, D};

/// (suffix, shapes) matching `Quality::ALL` order
#[rustfmt::skip]
const VOICINGS: [(&str, &[Shape]); NUM_QUALITIES] = [
    ("maj7", &[
        Shape::new(A, [X,    o(0),  o(2),  o(1),  o(2),  X   ]),
        Shape::new(D, [X,    X,     o(0),  o(2),  o(2),  o(2)]),
        Shape::new(E, [o(0), X,     o(1),  o(1),  o(0),  X   ]),
        Shape::new(A, [X,    o(0),  X,     o(1),  o(2),  o(0)]),
    ]),
    ("maj6", &[
        Shape::new(A, [X,    o(0),  o(2),  o(1),  o(2),  X   ]),
        Shape::new(D, [X,    X,     o(0),  o(2),  o(0),  o(2)]),
        Shape::new(E, [o(0), X,     o(-1), o(1),  o(0),  X   ]),
        Shape::new(A, [X,    o(0),  X,     o(-1), o(2),  o(0)]),
    ]),
    ("min7", &[
        Shape::new(A, [X,    o(0),  o(2),  o(0),  o(1),  o(0)]),
        Shape::new(D, [X,    X,     o(0),  o(2),  o(1),  o(1)]),
        Shape::new(E, [o(0), X,     o(0),  o(0),  o(0),  X   ]),
        Shape::new(A, [X,    o(0),  X,     o(0),  o(1),  o(0)]),
    ]),
    ("min6", &[
        Shape::new(A, [X,    o(0),  o(2),  o(-1), o(1),  X   ]),
        Shape::new(D, [X,    X,     o(0),  o(2),  o(0),  o(1)]),
        Shape::new(E, [o(0), X,     o(-1), o(0),  o(0),  X   ]),
        Shape::new(A, [X,    o(0),  X,     o(-1), o(1),  o(0)]),
    ]),
    ("min9", &[
        Shape::new(A, [X,    o(0),  o(-2), o(0),  o(0),  X   ]),
        Shape::new(D, [X,    X,     o(0),  o(-2), o(1),  o(0)]),
    ]),
    ("min11", &[
        Shape::new(E, [o(0), X,     o(0),  o(0),  o(-2), X   ]),
        Shape::new(A, [X,    o(0),  X,     o(0),  o(1),  o(-2)]),
    ]),
    ("7", &[
        Shape::new(A, [X,    o(0),  o(2),  o(0),  o(2),  X   ]),
        Shape::new(D, [X,    X,     o(0),  o(2),  o(1),  o(2)]),
        Shape::new(E, [o(0), X,     o(0),  o(1),  o(0),  X   ]),
        Shape::new(A, [X,    o(0),  X,     o(0),  o(2),  o(0)]),
    ]),
    ("9", &[
        Shape::new(A, [X,    o(0),  o(-1), o(0),  o(0),  X   ]),
        Shape::new(D, [X,    X,     o(0),  o(-1), o(1),  o(0)]),
        Shape::new(E, [o(0), X,     o(0),  o(-1), o(-3), X   ]),
        Shape::new(A, [X,    o(0),  X,     o(0),  o(0),  o(-3)]),
    ]),
    ("13", &[
        Shape::new(A, [X,    o(0),  o(-1), o(0),  o(0),  o(2)]),
        Shape::new(A, [X,    o(0),  X,     o(0),  o(2),  o(2)]),
        Shape::new(E, [o(0), X,     o(0),  o(1),  o(2),  X   ]),
    ]),
    ("min7(b5)", &[
        Shape::new(A, [X,    o(0),  o(1),  o(0),  o(1),  X   ]),
        Shape::new(D, [X,    X,     o(0),  o(1),  o(1),  o(1)]),
        Shape::new(E, [o(0), X,     o(0),  o(0),  o(-1), X   ]),
        Shape::new(A, [X,    o(0),  X,     o(0),  o(1),  o(-1)]),
    ]),
    ("dim7", &[
        Shape::new(A, [X,    o(0),  o(1),  o(-1), o(1),  X   ]),
        Shape::new(D, [X,    X,     o(0),  o(1),  o(0),  o(1)]),
        Shape::new(E, [o(0), X,     o(-1), o(0),  o(-1), X   ]),
        Shape::new(A, [X,    o(0),  X,     o(-1), o(1),  o(-1)]),
    ]),
    ("7(b5)", &[
        Shape::new(E, [o(0), X,     o(0),  o(1),  o(-1), X   ]),
        Shape::new(A, [X,    o(0),  X,     o(0),  o(2),  o(-1)]),
    ]),
    // The low-E shapes of the altered dominants leave the root unplayed.
    ("7(#9)", &[
        Shape::new(E, [X,    X,     o(0),  o(1),  o(0),  o(3)]),
        Shape::new(A, [X,    o(0),  o(-1), o(0),  o(1),  X   ]),
    ]),
    ("7(b13)", &[
        Shape::new(E, [o(0), X,     o(0),  o(1),  o(1),  X   ]),
        Shape::new(A, [X,    o(0),  X,     o(0),  o(2),  o(1)]),
    ]),
    ("7(b9,b13)", &[
        Shape::new(E, [o(0), X,     o(0),  o(1),  o(1),  o(1)]),
        Shape::new(A, [X,    o(0),  o(-1), o(0),  o(-1), o(1)]),
    ]),
    ("7b5(b9)", &[
        Shape::new(E, [X,    X,     o(0),  o(1),  o(-1), o(1)]),
        Shape::new(A, [X,    o(0),  o(-1), o(0),  o(-1), o(-1)]),
    ]),
    ("7b5(#9)", &[
        Shape::new(E, [X,    X,     o(0),  o(1),  o(-1), o(3)]),
        Shape::new(A, [X,    o(0),  o(-1), o(0),  o(1),  o(-1)]),
    ]),
    ("7#5(b9)", &[
        Shape::new(E, [X,    X,     o(0),  o(1),  o(1),  o(1)]),
        Shape::new(A, [X,    o(0),  o(-1), o(0),  o(-1), o(1)]),
    ]),
    ("7#5(#9)", &[
        Shape::new(E, [X,    X,     o(0),  o(1),  o(1),  o(3)]),
        Shape::new(A, [X,    o(0),  o(-1), o(0),  o(1),  o(1)]),
    ]),
];
