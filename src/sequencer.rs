//! Sequential character-reveal state machine.
//!
//! A [`Sequencer`] types a list of stages one character at a time:
//! `Idle -> Typing(0) -> Pausing -> Typing(1) -> ... -> AllComplete`. A
//! stage may own several target strings ("slots", e.g. three stat boxes);
//! slots type strictly in order, slot `k + 1` never advancing until slot
//! `k` is fully revealed.
//!
//! Time is a caller-supplied monotonic millisecond counter. The sequencer
//! keeps at most one outstanding deadline; `advance(now_ms)` fires every
//! deadline that has come due, in order, so a coarse driver loop replays
//! intermediate ticks instead of skipping characters. Nothing here blocks,
//! touches a terminal, or spawns threads — callers poll [`Sequencer::snapshot`]
//! and paint however they like.
//!
//! # Invariants
//!
//! 1. Revealed lengths are monotonically non-decreasing except across
//!    `reset()`, which zeroes everything.
//! 2. Stage `i + 1` does not advance until stage `i` is complete and its
//!    inter-stage delay has elapsed.
//! 3. At most one pending deadline exists at any time; scheduling over an
//!    existing one is an internal invariant violation, absorbed (the new
//!    deadline is dropped) rather than surfaced.
//! 4. After `cancel()` no further state mutation occurs until `start()` or
//!    `reset()`; calling `cancel()` again is a no-op.

/// One stage of a reveal sequence.
#[derive(Debug, Clone)]
pub struct StageSpec {
    /// Target strings revealed strictly in order within the stage.
    pub slots: Vec<String>,
    /// Milliseconds between revealing one additional character.
    pub char_interval_ms: u64,
    /// Pause after the stage completes before the next stage begins.
    pub inter_stage_delay_ms: u64,
}

impl StageSpec {
    /// A single-slot stage.
    pub fn text(
        target: impl Into<String>,
        char_interval_ms: u64,
        inter_stage_delay_ms: u64,
    ) -> StageSpec {
        StageSpec {
            slots: vec![target.into()],
            char_interval_ms,
            inter_stage_delay_ms,
        }
    }

    /// A multi-slot stage (e.g. stat boxes typed one after another).
    pub fn slots(
        targets: Vec<String>,
        char_interval_ms: u64,
        inter_stage_delay_ms: u64,
    ) -> StageSpec {
        StageSpec {
            slots: targets,
            char_interval_ms,
            inter_stage_delay_ms,
        }
    }
}

/// Where the sequencer currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created or reset, not yet started.
    Idle,
    /// Revealing characters of stage `i`.
    Typing(usize),
    /// Stage `i` finished; waiting out its inter-stage delay.
    Pausing(usize),
    /// Every stage fully revealed and the trailing pause elapsed.
    AllComplete,
}

/// Revealed state of one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSnapshot {
    pub revealed_text: String,
    pub revealed_chars: usize,
    pub is_complete: bool,
}

/// Revealed state of one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageSnapshot {
    pub stage_index: usize,
    pub slots: Vec<SlotSnapshot>,
    pub is_complete: bool,
}

impl StageSnapshot {
    /// Concatenated revealed text of the first slot; the common case for
    /// single-slot stages (title, description).
    pub fn revealed_text(&self) -> &str {
        self.slots.first().map_or("", |s| s.revealed_text.as_str())
    }

    /// Total characters revealed across all slots.
    pub fn revealed_chars(&self) -> usize {
        self.slots.iter().map(|s| s.revealed_chars).sum()
    }
}

/// Full observable state of a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceSnapshot {
    pub stages: Vec<StageSnapshot>,
    /// Stage currently typing or pausing; the last stage once all complete.
    pub current_stage: usize,
    pub is_all_complete: bool,
}

/// Drives a multi-stage character reveal against a caller-supplied clock.
///
/// Owned exclusively by whoever renders it; it is not shareable and holds
/// no interior mutability.
#[derive(Debug)]
pub struct Sequencer {
    stages: Vec<StageSpec>,
    /// Per-stage, per-slot target characters (reveal progress is counted in
    /// characters, not bytes, so Cyrillic targets reveal one glyph at a time).
    targets: Vec<Vec<Vec<char>>>,
    /// Per-stage, per-slot revealed character counts.
    revealed: Vec<Vec<usize>>,
    phase: Phase,
    /// The single outstanding deadline, if any.
    pending: Option<u64>,
}

impl Sequencer {
    pub fn new(stages: Vec<StageSpec>) -> Sequencer {
        let targets: Vec<Vec<Vec<char>>> = stages
            .iter()
            .map(|stage| stage.slots.iter().map(|s| s.chars().collect()).collect())
            .collect();
        let revealed = targets
            .iter()
            .map(|slots| vec![0; slots.len()])
            .collect();
        Sequencer {
            stages,
            targets,
            revealed,
            phase: Phase::Idle,
            pending: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_all_complete(&self) -> bool {
        self.phase == Phase::AllComplete
    }

    /// Stage currently in progress (the last stage after completion, 0 when
    /// idle or empty).
    pub fn current_stage(&self) -> usize {
        match self.phase {
            Phase::Typing(i) | Phase::Pausing(i) => i,
            Phase::Idle => 0,
            Phase::AllComplete => self.stages.len().saturating_sub(1),
        }
    }

    /// Next deadline the driver should advance to, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending
    }

    /// Activate the sequence: `Idle` transitions straight into typing the
    /// first stage. Starting a sequence that is already running is a no-op.
    pub fn start(&mut self, now_ms: u64) {
        if self.phase != Phase::Idle {
            return;
        }
        self.enter_stage(0, now_ms);
    }

    /// Fire every deadline that has come due at `now_ms`, in order.
    ///
    /// Cascaded deadlines are computed from the deadline that fired, not
    /// from `now_ms`, so a large clock jump replays the intermediate ticks
    /// deterministically.
    pub fn advance(&mut self, now_ms: u64) {
        while let Some(deadline) = self.pending {
            if deadline > now_ms {
                break;
            }
            self.pending = None;
            self.fire(deadline);
        }
    }

    /// Stop all pending timers without touching progress. Safe in any
    /// state and idempotent; after cancellation no tick can mutate state
    /// until `start()` or `reset()`.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Discard all progress and re-enter `Idle -> Typing(0)`.
    ///
    /// This is the language-change path: in-flight typing is abandoned
    /// rather than resumed mid-sentence in the new language.
    pub fn reset(&mut self, now_ms: u64) {
        self.cancel();
        for stage in &mut self.revealed {
            for slot in stage.iter_mut() {
                *slot = 0;
            }
        }
        self.phase = Phase::Idle;
        self.start(now_ms);
    }

    /// Replace the stage targets and restart from zero. Used when the
    /// active language changes and the same layout re-resolves to new text.
    pub fn reset_with(&mut self, stages: Vec<StageSpec>, now_ms: u64) {
        *self = Sequencer::new(stages);
        self.start(now_ms);
    }

    /// Current observable state.
    pub fn snapshot(&self) -> SequenceSnapshot {
        let stages = self
            .targets
            .iter()
            .enumerate()
            .map(|(i, slots)| {
                let slot_snaps: Vec<SlotSnapshot> = slots
                    .iter()
                    .zip(&self.revealed[i])
                    .map(|(target, &n)| SlotSnapshot {
                        revealed_text: target.iter().take(n).collect(),
                        revealed_chars: n,
                        is_complete: n == target.len(),
                    })
                    .collect();
                let is_complete = slot_snaps.iter().all(|s| s.is_complete);
                StageSnapshot {
                    stage_index: i,
                    slots: slot_snaps,
                    is_complete,
                }
            })
            .collect();
        SequenceSnapshot {
            stages,
            current_stage: self.current_stage(),
            is_all_complete: self.is_all_complete(),
        }
    }

    /// Schedule the single outstanding deadline.
    ///
    /// Scheduling while a deadline is already pending would mean two
    /// concurrent timers for one stage; the attempt is dropped.
    fn schedule(&mut self, deadline: u64) {
        if self.pending.is_some() {
            debug_assert!(false, "overlapping deadline scheduled");
            return;
        }
        self.pending = Some(deadline);
    }

    /// Enter stage `index` at logical time `at_ms`, skipping over stages
    /// with nothing to type (zero-duration, per the empty-target rule).
    fn enter_stage(&mut self, index: usize, at_ms: u64) {
        // Empty zero-delay stages consume no time, so `at_ms` carries
        // through the skip loop unchanged.
        let mut index = index;
        loop {
            if index >= self.stages.len() {
                self.phase = Phase::AllComplete;
                return;
            }
            let total: usize = self.targets[index].iter().map(Vec::len).sum();
            if total == 0 {
                // Empty stage: immediately complete. Honor its delay if it
                // has one, otherwise fall through to the next stage.
                let delay = self.stages[index].inter_stage_delay_ms;
                if delay == 0 {
                    index += 1;
                    continue;
                }
                self.phase = Phase::Pausing(index);
                self.schedule(at_ms + delay);
                return;
            }
            self.phase = Phase::Typing(index);
            self.schedule(at_ms + self.stages[index].char_interval_ms);
            return;
        }
    }

    /// Handle one fired deadline at logical time `at_ms`.
    fn fire(&mut self, at_ms: u64) {
        match self.phase {
            Phase::Typing(stage) => {
                self.reveal_one(stage);
                if self.stage_complete(stage) {
                    let delay = self.stages[stage].inter_stage_delay_ms;
                    if delay == 0 {
                        self.enter_stage(stage + 1, at_ms);
                    } else {
                        self.phase = Phase::Pausing(stage);
                        self.schedule(at_ms + delay);
                    }
                } else {
                    self.schedule(at_ms + self.stages[stage].char_interval_ms);
                }
            }
            Phase::Pausing(stage) => self.enter_stage(stage + 1, at_ms),
            // A fired deadline in Idle/AllComplete would be a stale timer;
            // cancel() clears pending, so there is nothing to do.
            Phase::Idle | Phase::AllComplete => {}
        }
    }

    /// Reveal one character in the first incomplete slot of `stage`.
    fn reveal_one(&mut self, stage: usize) {
        let slots = &self.targets[stage];
        for (slot, target) in slots.iter().enumerate() {
            if self.revealed[stage][slot] < target.len() {
                self.revealed[stage][slot] += 1;
                return;
            }
        }
    }

    fn stage_complete(&self, stage: usize) -> bool {
        self.targets[stage]
            .iter()
            .zip(&self.revealed[stage])
            .all(|(target, &n)| n == target.len())
    }
}
