//! Fretboard
//!
//! Lays voicings side by side and renders them as fixed-width text.
//!
//! Two presentations are supported. `Style::Tab` prints the highest string
//! first, four characters per column. `Cmaj7` with its root on the A string:
//!
//! ```text
//!   --X--
//!   --5--
//!   --4--
//!   --5--
//!   --3--
//!   --X--
//! ```
//!
//! `Style::Grid` prints the lowest string first, each row labelled with its
//! open string.

use std::fmt::Display;
use tracing::trace;

use crate::tuning::{STANDARD, STRING_COUNT};
use crate::voicing::{Chord, Fret, Voicing};

/// One column of a fretboard diagram.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Column {
    /// A played voicing.
    Voicing(Voicing),
    /// A narrow gap separating chords.
    Spacer,
}

/// Ordered columns ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fretboard {
    columns: Vec<Column>,
}

impl Fretboard {
    /// An empty fretboard.
    pub fn new() -> Self {
        Fretboard {
            columns: Vec::new(),
        }
    }

    /// Every chord followed by a spacer, as printed for a progression.
    pub fn progression(chords: &[Chord]) -> Self {
        let mut board = Fretboard::new();
        for chord in chords {
            board.add_chord(chord);
            board.add_spacer();
        }
        board
    }

    /// Append one column.
    pub fn push(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Append a column per voicing of `chord`.
    pub fn add_chord(&mut self, chord: &Chord) {
        self.columns
            .extend(chord.voicings.iter().copied().map(Column::Voicing));
    }

    /// Append a spacer column.
    pub fn add_spacer(&mut self) {
        self.columns.push(Column::Spacer);
    }

    /// Append all columns of `other`.
    pub fn extend(&mut self, other: &Fretboard) {
        self.columns.extend_from_slice(&other.columns);
    }

    /// Columns, left to right.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Display for Fretboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&Renderer::new().render(self))
    }
}

/// Text layout for a rendered fretboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Style {
    /// Tablature: high string on top, dash-filled four-character cells.
    #[default]
    Tab,
    /// Chord grid: low string on top, labelled rows, space-filled cells.
    Grid,
}

/// Builder for `Renderer` to pick the text style
pub struct RendererBuilder {
    style: Style,
}

impl RendererBuilder {
    /// Create a new builder with `Style::Tab`
    pub fn new() -> Self {
        RendererBuilder { style: Style::Tab }
    }

    /// Set the text style
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Build the `Renderer`
    pub fn build(self) -> Renderer {
        Renderer { style: self.style }
    }
}

impl Default for RendererBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns a [`Fretboard`] into text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Renderer {
    style: Style,
}

impl Renderer {
    /// Return a builder to customize the text style
    pub fn builder() -> RendererBuilder {
        RendererBuilder::new()
    }

    /// Create a tab-style renderer
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Active style.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Render `board`, six rows terminated by a line break.
    pub fn render(&self, board: &Fretboard) -> String {
        trace!(style = ?self.style, columns = board.len(), "rendering fretboard");
        match self.style {
            Style::Tab => render_tab(board.columns()),
            Style::Grid => render_grid(board.columns()),
        }
    }
}

fn render_tab(columns: &[Column]) -> String {
    let mut out = String::new();
    for string in (0..STRING_COUNT).rev() {
        out.push_str("\n  -");
        for (i, column) in columns.iter().enumerate() {
            match column {
                Column::Spacer if i + 1 == columns.len() => out.push_str("-  "),
                Column::Spacer => out.push_str("-  -"),
                Column::Voicing(v) => match v.0[string] {
                    Fret::Muted => out.push_str("-X--"),
                    // Wider frets eat the dashes, leading one first.
                    Fret::At(n) if n < 10 => out.push_str(&format!("-{n}--")),
                    Fret::At(n) if n < 100 => out.push_str(&format!("{n}--")),
                    Fret::At(n) => out.push_str(&format!("{n}-")),
                },
            }
        }
    }
    out.push('\n');
    out
}

fn render_grid(columns: &[Column]) -> String {
    let mut out = String::new();
    for (string, open) in STANDARD.iter().enumerate() {
        out.push_str(&format!("{:<2}|", open.name()));
        for column in columns {
            match column {
                Column::Spacer => out.push_str(" |"),
                Column::Voicing(v) => match v.0[string] {
                    Fret::Muted => out.push_str("  x"),
                    Fret::At(n) => out.push_str(&format!("{n:>3}")),
                },
            }
        }
        out.push('\n');
    }
    out
}
