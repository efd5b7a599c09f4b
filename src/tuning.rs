//! Tuning
//!
//! Open strings of a six-string guitar in standard tuning, and the anchor
//! strings that catalogue shapes are built around.

use crate::note::{Note, SEMITONES};

/// Strings on the instrument.
pub const STRING_COUNT: usize = 6;

/// Open-string pitch classes, string 0 (low E) to string 5 (high E).
pub const STANDARD: [Note; STRING_COUNT] = [Note::E, Note::A, Note::D, Note::G, Note::B, Note::E];

/// String on which a shape's root is fretted.
///
/// Standard tuning repeats its fourths, so the same chord shape recurs with
/// its root on the low E, A or D string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Root on string 0.
    LowE,
    /// Root on string 1.
    A,
    /// Root on string 2.
    D,
}

impl Anchor {
    /// Anchors in group order.
    pub const ALL: [Anchor; 3] = [Anchor::LowE, Anchor::A, Anchor::D];

    /// Group index, 0 to 2.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Anchor for a group index, if one exists.
    pub const fn from_index(group: usize) -> Option<Anchor> {
        match group {
            0 => Some(Anchor::LowE),
            1 => Some(Anchor::A),
            2 => Some(Anchor::D),
            _ => None,
        }
    }

    /// Index into [`STANDARD`] of the anchor string.
    pub const fn string(self) -> usize {
        self as usize
    }

    /// Lowest fret, `0..=11`, at which `root` sounds on this anchor string.
    pub const fn base_fret(self, root: Note) -> u8 {
        let open = STANDARD[self.string()].index();
        (root.index() + SEMITONES as u8 - open) % SEMITONES as u8
    }
}

/// [`Anchor::base_fret`] addressed by group index.
pub fn base_fret(root: Note, group: usize) -> Option<u8> {
    Anchor::from_index(group).map(|a| a.base_fret(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_strings() {
        let pcs: Vec<u8> = STANDARD.iter().map(|n| n.index()).collect();
        assert_eq!(pcs, vec![4, 9, 2, 7, 11, 4]);
    }

    #[test]
    fn base_fret_examples() {
        assert_eq!(Anchor::LowE.base_fret(Note::G), 3);
        assert_eq!(Anchor::A.base_fret(Note::C), 3);
        assert_eq!(Anchor::D.base_fret(Note::C), 10);
        assert_eq!(Anchor::LowE.base_fret(Note::E), 0);
        assert_eq!(Anchor::LowE.base_fret(Note::Eb), 11);
    }

    #[test]
    fn base_fret_in_range_and_sounds_root() {
        for anchor in Anchor::ALL {
            for root in Note::ALL {
                let fret = anchor.base_fret(root);
                assert!(fret <= 11);
                let open = STANDARD[anchor.string()];
                assert_eq!(open.transpose(fret as i32), root);
            }
        }
    }

    #[test]
    fn group_lookup() {
        assert_eq!(base_fret(Note::A, 1), Some(0));
        assert_eq!(base_fret(Note::A, 3), None);
    }
}
