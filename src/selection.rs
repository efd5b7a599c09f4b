//! Selection
//!
//! Random picks over the catalogue. The generator is always passed in, so a
//! seeded `fastrand::Rng` gives repeatable sequences.

use fastrand::Rng;
use tracing::warn;

use crate::catalog::Quality;
use crate::note::Note;
use crate::voicing::{Chord, Voicer, VoicingError};

/// Uniform pick over [`Quality::ALL`], consuming exactly one draw.
pub fn random_quality(rng: &mut Rng) -> Quality {
    Quality::ALL[rng.usize(..Quality::ALL.len())]
}

/// Voice a random quality on `root`.
pub fn random_chord(voicer: &Voicer, root: Note, rng: &mut Rng) -> Result<Chord, VoicingError> {
    voicer.voice(root, random_quality(rng))
}

/// Voice a random quality on `root` that the voicer accepts.
///
/// Qualities are tried in a shuffled order, so the result is uniform over
/// the qualities playable on `root` under the voicer's below-nut policy.
/// Rejections are logged at `warn`. Fails only if no quality is playable,
/// with the last rejection.
pub fn playable_chord(voicer: &Voicer, root: Note, rng: &mut Rng) -> Result<Chord, VoicingError> {
    let mut order = Quality::ALL;
    rng.shuffle(&mut order);

    let mut last = None;
    for quality in order {
        match voicer.voice(root, quality) {
            Ok(chord) => return Ok(chord),
            Err(err) => {
                warn!(%err, "drawing another quality");
                last = Some(err);
            }
        }
    }
    Err(last.unwrap_or_else(|| VoicingError::NoPlayableShape {
        chord: root.to_string(),
    }))
}

/// All twelve roots in random order.
pub fn shuffled_roots(rng: &mut Rng) -> [Note; 12] {
    let mut roots = Note::ALL;
    rng.shuffle(&mut roots);
    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_picks() {
        let mut a = Rng::with_seed(7);
        let mut b = Rng::with_seed(7);
        for _ in 0..100 {
            assert_eq!(random_quality(&mut a), random_quality(&mut b));
        }
    }

    #[test]
    fn picks_are_roughly_uniform() {
        let mut rng = Rng::with_seed(0x5eed);
        let mut counts = [0usize; 19];
        let draws = 10_000;
        for _ in 0..draws {
            counts[random_quality(&mut rng) as usize] += 1;
        }
        let expected = draws as f64 / 19.0;
        for (i, &n) in counts.iter().enumerate() {
            let dev = (n as f64 - expected).abs() / expected;
            assert!(dev < 0.2, "{:?} drawn {n} times", Quality::ALL[i]);
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = Rng::with_seed(42);
        let mut roots = shuffled_roots(&mut rng).to_vec();
        roots.sort();
        assert_eq!(roots, Note::ALL.to_vec());
    }

    #[test]
    fn playable_chord_stays_on_the_root() {
        // Under the default policy only a few qualities fit on A.
        let voicer = Voicer::new();
        let playable: Vec<Quality> = Quality::ALL
            .into_iter()
            .filter(|&q| voicer.voice(Note::A, q).is_ok())
            .collect();
        assert!(playable.len() < Quality::ALL.len());

        let mut rng = Rng::with_seed(1);
        let mut counts = [0usize; 19];
        for _ in 0..2_000 {
            let chord = playable_chord(&voicer, Note::A, &mut rng).unwrap();
            assert_eq!(chord.root, Note::A);
            counts[chord.quality as usize] += 1;
        }

        let expected = 2_000.0 / playable.len() as f64;
        for q in Quality::ALL {
            let n = counts[q as usize];
            if playable.contains(&q) {
                assert!((n as f64 - expected).abs() / expected < 0.2, "{q:?} drawn {n} times");
            } else {
                assert_eq!(n, 0, "{q:?}");
            }
        }
    }

    #[test]
    fn every_root_gets_a_chord_under_reject() {
        let voicer = Voicer::new();
        let mut rng = Rng::with_seed(9);
        for root in shuffled_roots(&mut rng) {
            assert_eq!(playable_chord(&voicer, root, &mut rng).unwrap().root, root);
        }
    }

    #[test]
    fn random_chord_uses_the_given_root() {
        let mut rng = Rng::with_seed(3);
        let voicer = Voicer::builder()
            .below_nut(crate::voicing::BelowNut::RaiseOctave)
            .build();
        for _ in 0..50 {
            let chord = random_chord(&voicer, Note::G, &mut rng).unwrap();
            assert_eq!(chord.root, Note::G);
            assert!(chord.name().starts_with('G'));
        }
    }
}
