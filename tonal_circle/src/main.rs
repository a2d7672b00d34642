// Tonal Circle explorer: CLI entry point.
//
// A thin presentation shell over the library. Each subcommand is one of the
// four views (circle of fifths, modes, progressions, interval geometry) plus
// a table lister. Selections arrive as flags, go straight into the pure core
// functions, and the results print as text or, with --json, as the records a
// graphical front end would consume. Nothing is persisted between runs.
//
// Usage:
//   explore [--json] [-v] circle [--key KEY]
//   explore [--json] [-v] mode [--key KEY] [--mode MODE]
//   explore [--json] [-v] progression [--key KEY] [--progression ID] [--play]
//   explore [--json] [-v] interval [--id ID | --semitones N]
//   explore [--json] list (modes|progressions|intervals|numerals)
//
// Keys accept "C", "F♯", "G♭", or ASCII "F#"/"Gb". Logging follows RUST_LOG;
// -v raises the default level to debug.

use std::thread;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use serde::Serialize;

use tonal_circle::chord::RomanNumeral;
use tonal_circle::fifths::{CIRCLE_OF_FIFTHS, fifths_position, related_keys};
use tonal_circle::geometry::{GeometricPattern, classify_interval, connection_edges};
use tonal_circle::interval::{DEFAULT_INTERVAL_ID, Interval, list_intervals};
use tonal_circle::mode::{Mode, ModeInfo, Step, derive_scale, interval_pattern, list_modes};
use tonal_circle::pitch::{PitchClass, index_of};
use tonal_circle::playback::{PlaybackAction, PlaybackEvent, PlaybackPlan};
use tonal_circle::progression::{DEFAULT_PROGRESSION_ID, Progression, list_progressions};
use tonal_circle::{Chord, TheoryError};

/// Explore the circle of fifths, modes, chord progressions and interval geometry.
#[derive(Parser, Debug)]
#[command(name = "explore")]
#[command(about = "Music theory on the 12-tone circle")]
struct Args {
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log derivations at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    view: View,
}

#[derive(Subcommand, Debug)]
enum View {
    /// Circle of fifths: the foundation of harmonic relationships
    Circle {
        /// Highlight a key and show its related keys
        #[arg(long, value_parser = parse_key)]
        key: Option<PitchClass>,
    },
    /// Modal exploration: seven colors of the musical spectrum
    Mode {
        #[arg(long, default_value = "C", value_parser = parse_key)]
        key: PitchClass,
        #[arg(long, default_value = "ionian", value_parser = Mode::from_id)]
        mode: Mode,
    },
    /// Harmonic analysis: decode the chords of a progression
    Progression {
        #[arg(long, default_value = "C", value_parser = parse_key)]
        key: PitchClass,
        /// Progression id, e.g. "ii-V-I" (see `list progressions`)
        #[arg(long, default_value = DEFAULT_PROGRESSION_ID)]
        progression: String,
        /// Step through the chords with the timed highlight
        #[arg(long)]
        play: bool,
    },
    /// Interval geometry: the shape an interval traces around the circle
    Interval {
        /// Interval id, e.g. "major-third"
        #[arg(long, conflicts_with = "semitones")]
        id: Option<String>,
        #[arg(long)]
        semitones: Option<u8>,
    },
    /// Print one of the static tables
    List {
        #[arg(value_enum)]
        table: Table,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Table {
    Modes,
    Progressions,
    Intervals,
    Numerals,
}

/// Accept the library's spellings plus ASCII accidentals ("F#", "Bb").
fn parse_key(s: &str) -> Result<PitchClass, TheoryError> {
    let s = s.trim();
    let normalized = match s.len() {
        2 if s.ends_with('#') => s.replace('#', "♯"),
        2 if s.ends_with('b') => format!("{}♭", &s[..1]),
        _ => s.to_string(),
    };
    index_of(&normalized).map_err(|_| TheoryError::UnknownNote(s.to_string()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match args.view {
        View::Circle { key } => show_circle(key, args.json),
        View::Mode { key, mode } => show_mode(key, mode, args.json),
        View::Progression {
            key,
            progression,
            play,
        } => show_progression(key, &progression, play, args.json),
        View::Interval { id, semitones } => {
            let interval = match (id, semitones) {
                (Some(id), _) => Interval::by_id(&id)?,
                (None, Some(n)) => Interval::by_semitones(n),
                (None, None) => Interval::by_id(DEFAULT_INTERVAL_ID)?,
            };
            show_interval(interval, args.json)
        }
        View::List { table } => show_table(table, args.json),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn note_names(notes: &[PitchClass]) -> String {
    notes.iter().map(|n| n.name()).collect::<Vec<_>>().join(" ")
}

// ---------------------------------------------------------------------------
// Circle of fifths
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct CircleKey {
    pitch_class: PitchClass,
    label: &'static str,
    position: usize,
}

#[derive(Serialize)]
struct CircleReport {
    order: Vec<CircleKey>,
    selected: Option<CircleKey>,
    related: Option<[PitchClass; 2]>,
}

fn circle_key(pc: PitchClass) -> CircleKey {
    CircleKey {
        pitch_class: pc,
        label: pc.label(),
        position: fifths_position(pc),
    }
}

fn show_circle(key: Option<PitchClass>, json: bool) -> Result<()> {
    let report = CircleReport {
        order: CIRCLE_OF_FIFTHS.iter().map(|&pc| circle_key(pc)).collect(),
        selected: key.map(circle_key),
        related: key.map(related_keys),
    };
    if json {
        return print_json(&report);
    }

    println!("=== Circle of Fifths ===");
    let labels: Vec<_> = report.order.iter().map(|k| k.label).collect();
    println!("{}", labels.join(" → "));
    if let (Some(selected), Some(related)) = (&report.selected, &report.related) {
        println!();
        println!("Key of {} (position {})", selected.label, selected.position);
        println!("Related: {} (subdominant), {} (dominant)", related[0].label(), related[1].label());
    }
    println!();
    println!("Clockwise adds sharps, counter-clockwise adds flats.");
    Ok(())
}

// ---------------------------------------------------------------------------
// Modes
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ModeReport {
    key: PitchClass,
    mode: &'static ModeInfo,
    notes: [PitchClass; 7],
    pattern: [Step; 7],
}

fn show_mode(key: PitchClass, mode: Mode, json: bool) -> Result<()> {
    let report = ModeReport {
        key,
        mode: mode.info(),
        notes: derive_scale(key, mode),
        pattern: interval_pattern(mode),
    };
    if json {
        return print_json(&report);
    }

    let info = report.mode;
    println!("=== {} in {} ===", info.name, key);
    println!("Notes:     {}", note_names(&report.notes));
    let steps: Vec<_> = report.pattern.iter().map(|s| s.symbol()).collect();
    println!("Pattern:   {}", steps.join("-"));
    println!("Character: {}", info.character);
    println!("Mood:      {}", info.mood);
    println!();
    println!("W = Whole step (2 semitones), H = Half step (1 semitone)");
    Ok(())
}

// ---------------------------------------------------------------------------
// Progressions
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ProgressionReport {
    key: PitchClass,
    progression: &'static Progression,
    chords: Vec<Chord>,
    playback: Option<Vec<PlaybackEvent>>,
}

fn chord_line(chord: &Chord) -> String {
    format!(
        "{:<5} {:<3} {:<11} {:<9} {}",
        chord.numeral.symbol(),
        chord.root.name(),
        chord.quality.name(),
        note_names(&chord.notes),
        chord.function.label()
    )
}

fn show_progression(key: PitchClass, id: &str, play: bool, json: bool) -> Result<()> {
    let progression = Progression::by_id(id)?;
    let chords = progression.analyze(key);
    let plan = PlaybackPlan::for_chords(chords.len());

    if json {
        return print_json(&ProgressionReport {
            key,
            progression,
            playback: play.then(|| plan.events()),
            chords,
        });
    }

    println!("=== {} in {} ===", progression.name, key);
    println!("{}", progression.description);
    println!("Heard in: {}", progression.examples.join(", "));
    println!();
    for chord in &chords {
        println!("  {}", chord_line(chord));
    }

    if play {
        println!();
        run_playback(&plan, &chords);
    }
    Ok(())
}

/// Walk the plan in real time, printing each highlight change.
fn run_playback(plan: &PlaybackPlan, chords: &[Chord]) {
    info!("playing {} chords over {:?}", chords.len(), plan.total_duration());
    let started = Instant::now();
    for event in plan.events() {
        if let Some(wait) = event.at.checked_sub(started.elapsed()) {
            thread::sleep(wait);
        }
        let chord = &chords[event.chord];
        match event.action {
            PlaybackAction::Highlight => println!("▶ {}", chord_line(chord)),
            PlaybackAction::Clear => println!("  ({} released)", chord.numeral),
        }
    }
}

// ---------------------------------------------------------------------------
// Interval geometry
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct IntervalReport {
    interval: &'static Interval,
    pattern: GeometricPattern,
    edges: [(PitchClass, PitchClass); 12],
}

fn show_interval(interval: &'static Interval, json: bool) -> Result<()> {
    let report = IntervalReport {
        interval,
        pattern: classify_interval(interval.semitones),
        edges: connection_edges(interval.semitones),
    };
    if json {
        return print_json(&report);
    }

    let pattern = &report.pattern;
    println!("=== {} Pattern ===", interval.name);
    println!("Semitones: {}   Ratio: {}", interval.semitones, interval.ratio);
    println!("Character: {}", interval.character);
    println!(
        "Shape:     {} ({} sides, {}-fold symmetry)",
        pattern.description, pattern.sides, pattern.symmetry
    );
    if interval.semitones == 0 {
        println!("The unison creates no geometric pattern; all notes remain in place.");
    } else {
        let edges: Vec<_> = report
            .edges
            .iter()
            .map(|(a, b)| format!("{a}-{b}"))
            .collect();
        println!("Edges:     {}", edges.join(" "));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct NumeralRow {
    numeral: RomanNumeral,
    degree: usize,
    quality: &'static str,
    function: &'static str,
    color: &'static str,
}

fn show_table(table: Table, json: bool) -> Result<()> {
    match table {
        Table::Modes => {
            if json {
                return print_json(&list_modes());
            }
            for m in list_modes() {
                println!("{:<11} {:<24} {}", m.id, m.name, m.character);
            }
        }
        Table::Progressions => {
            if json {
                return print_json(&list_progressions());
            }
            for p in list_progressions() {
                println!("{:<10} {}", p.id, p.description);
            }
        }
        Table::Intervals => {
            if json {
                return print_json(&list_intervals());
            }
            for i in list_intervals() {
                println!("{:<15} {:>2}  {:<6} {}", i.id, i.semitones, i.ratio, i.character);
            }
        }
        Table::Numerals => {
            let rows: Vec<NumeralRow> = RomanNumeral::ALL
                .iter()
                .map(|&n| NumeralRow {
                    numeral: n,
                    degree: n.degree() + 1,
                    quality: n.quality().name(),
                    function: n.function().label(),
                    color: n.color(),
                })
                .collect();
            if json {
                return print_json(&rows);
            }
            for r in &rows {
                println!("{:<5} {}  {:<11} {}", r.numeral, r.degree, r.quality, r.function);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_ascii_accidentals() {
        assert_eq!(parse_key("F#").unwrap(), PitchClass::F_SHARP);
        assert_eq!(parse_key("Bb").unwrap(), PitchClass::A_SHARP);
        assert_eq!(parse_key("B").unwrap(), PitchClass::B);
        assert_eq!(parse_key("D♭").unwrap(), PitchClass::C_SHARP);
        assert_eq!(parse_key("Fb"), Err(TheoryError::UnknownNote("Fb".into())));
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Args::command().debug_assert();

        let args = Args::try_parse_from(["explore", "--json", "mode", "--key", "D", "--mode", "dorian"]).unwrap();
        assert!(args.json);
        match args.view {
            View::Mode { key, mode } => {
                assert_eq!(key, PitchClass::D);
                assert_eq!(mode, Mode::Dorian);
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        assert!(Args::try_parse_from(["explore", "mode", "--mode", "hypolydian"]).is_err());
    }
}
