// Practice loop: prints a random chord name for each root in a shuffled
// cycle, waits for enter, then shows its shapes.
//
// Usage:
//   chords [--seed N] [--below-nut reject|raise|skip] [--style tab|grid]

use std::io::{self, BufRead, Write};

use chord_shapes::cli::{init_logging, Options};
use chord_shapes::{playable_chord, shuffled_roots};
use tracing::error;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let (opts, _) = Options::parse(std::env::args().skip(1))?;
    let voicer = opts.voicer();
    let renderer = opts.renderer();
    let mut rng = opts.rng();

    let roots = shuffled_roots(&mut rng);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    for root in roots.iter().cycle() {
        let chord = match playable_chord(&voicer, *root, &mut rng) {
            Ok(chord) => chord,
            Err(err) => {
                error!(%err, root = %root, "no playable quality");
                continue;
            }
        };

        write!(stdout, "{chord}")?;
        stdout.flush()?;
        if lines.next().transpose()?.is_none() {
            writeln!(stdout)?;
            return Ok(());
        }

        writeln!(stdout, "{}", renderer.render(&chord.fretboard()))?;
    }

    Ok(())
}
