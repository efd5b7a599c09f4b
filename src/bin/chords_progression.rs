// Prints the maj7/min7 shapes for a roman-numeral progression in a key.
//
// Usage:
//   chords-progression KEY DEGREE... [--below-nut reject|raise|skip] [--style tab|grid]
//
// Upper-case degrees (I..VII) are major sevenths, lower-case (i..vii) minor.

use chord_shapes::cli::{init_logging, Options};
use chord_shapes::progression::resolve;
use chord_shapes::{Chord, Fretboard, Note};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let (opts, args) = Options::parse(std::env::args().skip(1))?;
    if args.len() < 2 {
        println!("Usage: chords-progression KEY PROGRESSION...");
        return Ok(());
    }

    let Some(key) = Note::parse(&args[0]) else {
        println!("No known note: {}", args[0]);
        return Ok(());
    };
    let progression = &args[1..];

    let chords = resolve(&opts.voicer(), key, progression)?;
    let names: Vec<String> = chords.iter().map(Chord::name).collect();

    println!("Key of {key}");
    println!("[{}]", progression.join(" "));
    println!("[{}]", names.join(" "));
    println!("{}", opts.renderer().render(&Fretboard::progression(&chords)));

    Ok(())
}
