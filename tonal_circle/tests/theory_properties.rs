// Property checks over the whole (finite) input space.
//
// Every key, every mode, every numeral and every interval is enumerated, so
// these are exhaustive rather than sampled. Offsets for the pitch-class
// round trip cover several octaves in both directions.

use tonal_circle::chord::RomanNumeral;
use tonal_circle::mode::MAJOR_SCALE_PATTERN;
use tonal_circle::progression::Progression;
use tonal_circle::{
    ChordQuality, Mode, PitchClass, TheoryError, analyze_numerals, analyze_progression,
    build_triad, classify_interval, connection_edges, derive_scale, index_of, interval_pattern,
    list_intervals, list_progressions, pitch_class_at,
};

#[test]
fn pitch_class_round_trip() {
    for p in PitchClass::ALL {
        for offset in -40..=40 {
            let moved = pitch_class_at(p, offset);
            assert!(moved.index() < 12);
            assert_eq!(pitch_class_at(moved, -offset), p, "{p} by {offset}");
        }
        for offset in [i32::MAX, i32::MAX - 5, i32::MIN + 1, i32::MIN + 11] {
            let moved = pitch_class_at(p, offset);
            assert!(moved.index() < 12);
            assert_eq!(pitch_class_at(moved, -offset), p, "{p} by {offset}");
        }
    }
}

#[test]
fn every_name_resolves_to_its_index() {
    for p in PitchClass::ALL {
        assert_eq!(index_of(p.name()), Ok(p));
        assert_eq!(index_of(p.label()), Ok(p));
        for half in p.label().split('/') {
            assert_eq!(index_of(half), Ok(p));
        }
    }
}

#[test]
fn scales_have_seven_distinct_notes_from_the_key() {
    for key in PitchClass::ALL {
        for mode in Mode::ALL {
            let scale = derive_scale(key, mode);
            assert_eq!(scale.len(), 7);
            assert_eq!(scale[0], key);
            let mut seen = [false; 12];
            for note in scale {
                assert!(!seen[note.index() as usize], "duplicate {note} in {key} {mode:?}");
                seen[note.index() as usize] = true;
            }
        }
    }
}

#[test]
fn interval_pattern_reproduces_scale() {
    for key in PitchClass::ALL {
        for mode in Mode::ALL {
            let scale = derive_scale(key, mode);
            let mut current = key;
            for (i, step) in interval_pattern(mode).iter().enumerate() {
                assert_eq!(current, scale[i], "{key} {mode:?} degree {}", i + 1);
                current = current.transpose(step.semitones() as i32);
            }
            // The seventh step closes the octave.
            assert_eq!(current, key);
        }
    }
}

#[test]
fn ionian_is_the_major_scale() {
    for key in PitchClass::ALL {
        let expected = MAJOR_SCALE_PATTERN.map(|o| key.transpose(o as i32));
        assert_eq!(derive_scale(key, Mode::Ionian), expected);
    }
}

#[test]
fn modes_share_the_parent_major_scale() {
    // D Dorian, E Phrygian, ... B Locrian are all the white keys.
    let parent = derive_scale(PitchClass::C, Mode::Ionian);
    for (degree, mode) in Mode::ALL.into_iter().enumerate() {
        let mut notes = derive_scale(parent[degree], mode);
        notes.sort();
        let mut white = parent;
        white.sort();
        assert_eq!(notes, white, "{mode:?}");
    }
}

#[test]
fn triads_on_c() {
    let names = |q| build_triad(PitchClass::C, q).map(|p| p.index());
    assert_eq!(names(ChordQuality::Major), [0, 4, 7]);
    assert_eq!(names(ChordQuality::Minor), [0, 3, 7]);
    assert_eq!(names(ChordQuality::Diminished), [0, 3, 6]);
}

#[test]
fn diatonic_triads_stay_in_the_major_scale() {
    for key in PitchClass::ALL {
        let scale = derive_scale(key, Mode::Ionian);
        let chords = analyze_progression(key, &RomanNumeral::ALL);
        for chord in chords {
            for note in chord.notes {
                assert!(scale.contains(&note), "{} of {} in {key}", note, chord.numeral);
            }
        }
    }
}

#[test]
fn progression_output_matches_input_order() {
    for key in PitchClass::ALL {
        for p in list_progressions() {
            let chords = p.analyze(key);
            assert_eq!(chords.len(), p.numerals.len());
            for (chord, numeral) in chords.iter().zip(p.numerals) {
                assert_eq!(chord.numeral, *numeral);
                assert_eq!(chord.quality, numeral.quality());
                assert_eq!(chord.notes[0], chord.root);
            }
        }
    }
}

#[test]
fn pop_progression_in_c() {
    let chords = analyze_numerals(PitchClass::C, &["I", "V", "vi", "IV"]).unwrap();
    let roots: Vec<_> = chords.iter().map(|c| c.root.name()).collect();
    assert_eq!(roots, ["C", "G", "A", "F"]);
    let qualities: Vec<_> = chords.iter().map(|c| c.quality).collect();
    assert_eq!(
        qualities,
        [
            ChordQuality::Major,
            ChordQuality::Major,
            ChordQuality::Minor,
            ChordQuality::Major
        ]
    );
    assert_eq!(chords, Progression::by_id("I-V-vi-IV").unwrap().analyze(PitchClass::C));
}

#[test]
fn unknown_numeral_fails_whole_request() {
    let result = analyze_numerals(PitchClass::G, &["ii", "V", "I", "VII"]);
    assert_eq!(result, Err(TheoryError::UnknownNumeral("VII".into())));
}

#[test]
fn interval_geometry_examples() {
    let fifth = classify_interval(7);
    assert_eq!((fifth.sides, fifth.symmetry), (12, 1));
    assert_eq!(fifth.description, "12-sided polygon");

    let third = classify_interval(4);
    assert_eq!((third.sides, third.symmetry), (3, 4));
    assert_eq!(third.description, "Triangle");

    let tritone = classify_interval(6);
    assert_eq!((tritone.sides, tritone.symmetry), (2, 6));
    assert_eq!(tritone.description, "Line");

    let unison = classify_interval(0);
    assert_eq!((unison.sides, unison.symmetry), (1, 12));
}

#[test]
fn sides_times_symmetry_is_twelve() {
    for interval in list_intervals().iter().skip(1) {
        let p = classify_interval(interval.semitones);
        assert_eq!(p.sides as u32 * p.symmetry as u32, 12, "{}", interval.name);
    }
}

#[test]
fn connection_edges_cover_every_start() {
    for s in 0..12u8 {
        let edges = connection_edges(s);
        for (i, (from, to)) in edges.iter().enumerate() {
            assert_eq!(from.index() as usize, i);
            assert_eq!(from.semitones_to(*to), s);
        }
    }
}

#[test]
fn derivations_are_idempotent() {
    for key in PitchClass::ALL {
        for mode in Mode::ALL {
            assert_eq!(derive_scale(key, mode), derive_scale(key, mode));
        }
        for p in list_progressions() {
            assert_eq!(p.analyze(key), p.analyze(key));
        }
    }
    for s in 0..12 {
        assert_eq!(classify_interval(s), classify_interval(s));
        assert_eq!(connection_edges(s), connection_edges(s));
    }
}
