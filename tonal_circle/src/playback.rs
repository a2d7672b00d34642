// Simulated progression playback.
//
// "Play" makes no sound. It highlights each chord in turn: chord i lights up
// at i * step and clears after hold. This module only plans the timeline so
// it can be tested without a clock; the caller executes it with whatever
// timer it has (the explore binary sleeps between events).

use std::time::Duration;

use serde::Serialize;

/// Gap between successive chord highlights.
pub const DEFAULT_STEP: Duration = Duration::from_millis(1200);
/// How long a highlight stays lit.
pub const DEFAULT_HOLD: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlaybackAction {
    Highlight,
    Clear,
}

/// A timed change to the highlighted chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaybackEvent {
    /// Offset from the start of playback.
    pub at: Duration,
    pub action: PlaybackAction,
    /// Index of the chord in the progression.
    pub chord: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaybackPlan {
    pub chord_count: usize,
    pub step: Duration,
    pub hold: Duration,
}

impl PlaybackPlan {
    /// Plan with the default 1.2 s step and 1 s hold.
    pub fn for_chords(chord_count: usize) -> Self {
        Self::with_timing(chord_count, DEFAULT_STEP, DEFAULT_HOLD)
    }

    /// Timelines too long for `Duration` saturate at `Duration::MAX`
    /// instead of panicking.
    pub fn with_timing(chord_count: usize, step: Duration, hold: Duration) -> Self {
        PlaybackPlan {
            chord_count,
            step,
            hold,
        }
    }

    fn start_of(&self, chord: usize) -> Duration {
        let chord = u32::try_from(chord).unwrap_or(u32::MAX);
        self.step.saturating_mul(chord)
    }

    fn end_of(&self, chord: usize) -> Duration {
        self.start_of(chord).saturating_add(self.hold)
    }

    /// Every highlight and clear, ordered by time. At equal times a clear
    /// comes before a highlight, so a back-to-back handoff never leaves two
    /// chords lit.
    pub fn events(&self) -> Vec<PlaybackEvent> {
        let mut events = Vec::with_capacity(self.chord_count * 2);
        for chord in 0..self.chord_count {
            let start = self.start_of(chord);
            events.push(PlaybackEvent {
                at: start,
                action: PlaybackAction::Highlight,
                chord,
            });
            events.push(PlaybackEvent {
                at: self.end_of(chord),
                action: PlaybackAction::Clear,
                chord,
            });
        }
        events.sort_by_key(|e| (e.at, e.action == PlaybackAction::Highlight, e.chord));
        events
    }

    /// The chord lit at time `t`. When highlights overlap (hold longer than
    /// step) the most recently started one wins.
    pub fn highlighted_at(&self, t: Duration) -> Option<usize> {
        (0..self.chord_count)
            .rev()
            .find(|&chord| {
                let start = self.start_of(chord);
                t >= start && t < self.end_of(chord)
            })
    }

    /// Time at which the last highlight clears.
    pub fn total_duration(&self) -> Duration {
        match self.chord_count {
            0 => Duration::ZERO,
            n => self.end_of(n - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_default_timeline() {
        let plan = PlaybackPlan::for_chords(3);
        let events = plan.events();
        assert_eq!(events.len(), 6);
        assert_eq!(events[0].at, ms(0));
        assert_eq!(events[1], PlaybackEvent { at: ms(1000), action: PlaybackAction::Clear, chord: 0 });
        assert_eq!(events[2], PlaybackEvent { at: ms(1200), action: PlaybackAction::Highlight, chord: 1 });
        assert_eq!(plan.total_duration(), ms(3400));
    }

    #[test]
    fn test_gap_between_highlights() {
        let plan = PlaybackPlan::for_chords(4);
        assert_eq!(plan.highlighted_at(ms(500)), Some(0));
        assert_eq!(plan.highlighted_at(ms(1100)), None);
        assert_eq!(plan.highlighted_at(ms(3700)), Some(3));
        assert_eq!(plan.highlighted_at(ms(4600)), None);
    }

    #[test]
    fn test_clear_precedes_highlight_at_same_instant() {
        let plan = PlaybackPlan::with_timing(2, ms(500), ms(500));
        let events = plan.events();
        assert_eq!(events[1].action, PlaybackAction::Clear);
        assert_eq!(events[2].action, PlaybackAction::Highlight);
        assert_eq!(events[1].at, events[2].at);
    }

    #[test]
    fn test_overlap_latest_wins() {
        let plan = PlaybackPlan::with_timing(2, ms(300), ms(1000));
        assert_eq!(plan.highlighted_at(ms(400)), Some(1));
    }

    #[test]
    fn test_huge_timing_saturates() {
        let plan = PlaybackPlan::with_timing(3, Duration::MAX, ms(1000));
        assert_eq!(plan.total_duration(), Duration::MAX);
        let events = plan.events();
        assert_eq!(events.len(), 6);
        assert_eq!(events[0].at, Duration::ZERO);
        assert_eq!(events[5].at, Duration::MAX);
        assert_eq!(plan.highlighted_at(ms(500)), Some(0));

        let wide = PlaybackPlan::with_timing(usize::MAX, ms(1), ms(1));
        assert_eq!(wide.start_of(usize::MAX), ms(u32::MAX as u64));
    }

    #[test]
    fn test_empty_plan() {
        let plan = PlaybackPlan::for_chords(0);
        assert!(plan.events().is_empty());
        assert_eq!(plan.total_duration(), Duration::ZERO);
    }
}
