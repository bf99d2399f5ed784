// src/timing.rs
// Zero-crossing repair and duration clustering for decoded segments

use crate::segmenter::{Segment, SegmentKind};

// A tone sampled exactly on a zero-crossing shows up as a zero-length `Off`
// segment. Any real gap between elements is longer than this.
const MIN_GAP_SECS: f64 = 0.002;
// Segments at or below this length outside a tone are the sliver of tone
// before its first interior zero-crossing.
const MIN_ELEMENT_SECS: f64 = 0.01;

// Two durations whose ratio falls strictly inside this band are the same
// timing category.
const CLUSTER_RATIO_MIN: f64 = 0.9;
const CLUSTER_RATIO_MAX: f64 = 1.1;

#[derive(Debug, Clone, Copy)]
enum ScanState {
    Idle,
    InTone { start: usize },
}

/// Merges the runs a sampled sine breaks into back into whole tones.
///
/// A zero-length segment opens a tone; the tone is closed just before the
/// next `Off` segment longer than `MIN_GAP_SECS`, with its duration taken
/// from the true sample indices. Outside a tone, segments longer than
/// `MIN_ELEMENT_SECS` pass through and shorter ones are dropped.
pub fn repair_zero_crossings(segments: &[Segment], sample_rate: u32) -> Vec<Segment> {
    let mut repaired = Vec::with_capacity(segments.len());
    let mut state = ScanState::Idle;

    for (i, seg) in segments.iter().enumerate() {
        let is_last = i + 1 == segments.len();
        match state {
            ScanState::Idle if seg.duration == 0.0 => {
                state = ScanState::InTone { start: seg.start };
            }
            ScanState::Idle if seg.duration > MIN_ELEMENT_SECS => repaired.push(*seg),
            ScanState::Idle => {}
            ScanState::InTone { start }
                if seg.kind == SegmentKind::Off && seg.duration > MIN_GAP_SECS =>
            {
                let stop = segments[i - 1].stop;
                repaired.push(Segment::new(SegmentKind::On, start, stop, sample_rate));
                repaired.push(*seg);
                state = ScanState::Idle;
            }
            ScanState::InTone { start } if is_last => {
                let stop = if seg.is_on() {
                    seg.stop
                } else {
                    segments[i - 1].stop
                };
                repaired.push(Segment::new(SegmentKind::On, start, stop, sample_rate));
            }
            ScanState::InTone { .. } => {}
        }
    }

    log::debug!(
        "Zero-crossing repair: {} raw segments -> {}",
        segments.len(),
        repaired.len()
    );
    repaired
}

/// Silence before the first tone carries no timing information.
pub fn drop_leading_off(segments: &mut Vec<Segment>) {
    if segments.first().is_some_and(|s| s.kind == SegmentKind::Off) {
        segments.remove(0);
    }
}

/// Sorted distinct durations of one segment kind.
pub fn distinct_durations(segments: &[Segment], kind: SegmentKind) -> Vec<f64> {
    let mut durations: Vec<f64> = segments
        .iter()
        .filter(|s| s.kind == kind)
        .map(|s| s.duration)
        .collect();
    durations.sort_by(f64::total_cmp);
    durations.dedup();
    durations
}

fn within_tolerance(x: f64, y: f64) -> bool {
    let ratio = x / y;
    ratio > CLUSTER_RATIO_MIN && ratio < CLUSTER_RATIO_MAX
}

/// Rewrites near-equal durations to a shared value, index for index.
///
/// Every ordered pair is visited once, outer index first, and `values[y]`
/// takes the current value of `values[x]` when the two are within 10%. The
/// pass is order dependent and not transitive: in `[1.0, 1.05, 1.12]` the
/// middle value joins `1.0` first, after which `1.12` is too far from
/// anything to join, even though it was within 10% of `1.05`.
pub fn cluster_durations(values: &[f64]) -> Vec<f64> {
    let mut canonical = values.to_vec();
    for x in 0..canonical.len() {
        for y in 0..canonical.len() {
            if within_tolerance(canonical[x], canonical[y]) {
                canonical[y] = canonical[x];
            }
        }
    }
    canonical
}

/// The sorted, deduplicated representatives of `cluster_durations`.
pub fn canonical_set(values: &[f64]) -> Vec<f64> {
    let mut set = cluster_durations(values);
    set.sort_by(f64::total_cmp);
    set.dedup();
    set
}

struct Clusters {
    observed: Vec<f64>,
    canonical: Vec<f64>,
}

impl Clusters {
    fn new(segments: &[Segment], kind: SegmentKind) -> Self {
        let observed = distinct_durations(segments, kind);
        let canonical = cluster_durations(&observed);
        Self {
            observed,
            canonical,
        }
    }

    fn canonical_for(&self, duration: f64) -> Option<f64> {
        self.observed
            .iter()
            .position(|&d| d == duration)
            .map(|i| self.canonical[i])
    }

    fn representatives(&self) -> Vec<f64> {
        let mut set = self.canonical.clone();
        set.sort_by(f64::total_cmp);
        set.dedup();
        set
    }
}

/// Canonical tone and gap durations of one decode, each sorted ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimingProfile {
    pub on: Vec<f64>,
    pub off: Vec<f64>,
}

impl TimingProfile {
    /// Clusters the observed durations and rewrites every segment to its
    /// cluster's canonical value.
    pub fn classify(segments: &mut [Segment]) -> Self {
        let on = Clusters::new(segments, SegmentKind::On);
        let off = Clusters::new(segments, SegmentKind::Off);

        for seg in segments.iter_mut() {
            let clusters = match seg.kind {
                SegmentKind::On => &on,
                SegmentKind::Off => &off,
            };
            if let Some(canonical) = clusters.canonical_for(seg.duration) {
                seg.duration = canonical;
            }
        }

        let profile = Self {
            on: on.representatives(),
            off: off.representatives(),
        };
        log::debug!(
            "Timing profile: on {:?} (from {} observed), off {:?} (from {} observed)",
            profile.on,
            on.observed.len(),
            profile.off,
            off.observed.len()
        );
        profile
    }

    pub fn dot(&self) -> Option<f64> {
        self.on.first().copied()
    }

    pub fn intra_symbol_gap(&self) -> Option<f64> {
        self.off.first().copied()
    }

    pub fn letter_gap(&self) -> Option<f64> {
        self.off.get(1).copied()
    }
}
