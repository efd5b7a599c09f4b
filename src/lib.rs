//! # chord_shapes
//!
//! Jazz guitar chord voicings in standard tuning: pick a root and a quality,
//! get back fret positions for every catalogue shape, and render them as a
//! text fretboard.
//!
//! ## Example
//! ```rust
//! use chord_shapes::{BelowNut, Fretboard, Note, Quality, Voicer};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) Read a root
//!     let root: Note = "Db".parse()?;
//!
//!     // 2) Build a voicer; shapes that would need a negative fret move up an octave
//!     let voicer = Voicer::builder()
//!         .below_nut(BelowNut::RaiseOctave)
//!         .build();
//!
//!     // 3) Voice and render
//!     let chord = voicer.voice(root, Quality::DominantNinth)?;
//!     assert_eq!(chord.name(), "C#9");
//!     println!("{}{}", chord, Fretboard::progression(&[chord.clone()]));
//!
//!     Ok(())
//! }
//! # run().unwrap();
//! ```
//!
//! ## Features
//! - `cli` (default): flag parsing and `tracing-subscriber` logging setup for
//!   the `chords` and `chords-progression` binaries

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Pitch classes.
pub use note::{Note, ParseNoteError, SEMITONES};

/// Standard tuning and anchor strings.
pub use tuning::{base_fret, Anchor, STANDARD, STRING_COUNT};

/// Voicing catalogue.
pub use catalog::{Quality, Shape, Slot};

/// Chord resolution.
pub use voicing::{BelowNut, Chord, Fret, Voicer, VoicerBuilder, Voicing, VoicingError};

/// Text rendering.
pub use fretboard::{Column, Fretboard, Renderer, RendererBuilder, Style};

/// Random picks.
pub use selection::{playable_chord, random_chord, random_quality, shuffled_roots};

/// Roman-numeral progressions.
pub use progression::{Degree, ProgressionError};

/// Pitch-class model.
pub mod note;

/// Open strings and anchors.
pub mod tuning;

/// Chord qualities and their shapes.
pub mod catalog;

/// Resolving shapes to frets.
pub mod voicing;

/// Fretboard diagrams.
pub mod fretboard;

/// Random selection over the catalogue.
pub mod selection;

/// Degree-based progressions.
pub mod progression;

/// Binary support.
#[cfg(feature = "cli")]
pub mod cli;
