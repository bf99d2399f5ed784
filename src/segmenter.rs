// src/segmenter.rs
// Splits a sample buffer into alternating runs of tone and silence

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    On,
    Off,
}

/// A maximal run of tone or silence. `start` and `stop` are inclusive sample
/// indices; `duration` is `(stop - start) / sample_rate` and is rewritten to
/// its canonical value during classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub start: usize,
    pub stop: usize,
    pub duration: f64,
}

impl Segment {
    pub fn new(kind: SegmentKind, start: usize, stop: usize, sample_rate: u32) -> Self {
        Self {
            kind,
            start,
            stop,
            duration: (stop - start) as f64 / sample_rate as f64,
        }
    }

    pub fn is_on(&self) -> bool {
        self.kind == SegmentKind::On
    }

    pub fn sample_len(&self) -> usize {
        self.stop - self.start + 1
    }
}

/// Anything that can be read as "silent or not". Only an exact zero is silent.
pub trait Silence {
    fn is_silent(&self) -> bool;
}

impl Silence for i16 {
    fn is_silent(&self) -> bool {
        *self == 0
    }
}

impl Silence for i32 {
    fn is_silent(&self) -> bool {
        *self == 0
    }
}

impl Silence for f32 {
    fn is_silent(&self) -> bool {
        *self == 0.0
    }
}

impl Silence for f64 {
    fn is_silent(&self) -> bool {
        *self == 0.0
    }
}

/// Walks the buffer once and closes a segment on every on/off transition.
///
/// A tone sample that lands exactly on a zero-crossing is reported as a
/// one-sample `Off` segment here; see `timing::repair_zero_crossings`.
pub fn segment<S: Silence>(samples: &[S], sample_rate: u32) -> Vec<Segment> {
    let mut segments = Vec::new();
    let Some(first) = samples.first() else {
        return segments;
    };

    let kind_of = |s: &S| {
        if s.is_silent() {
            SegmentKind::Off
        } else {
            SegmentKind::On
        }
    };

    let mut current = kind_of(first);
    let mut start = 0;
    for (i, sample) in samples.iter().enumerate().skip(1) {
        let kind = kind_of(sample);
        if kind != current {
            segments.push(Segment::new(current, start, i - 1, sample_rate));
            current = kind;
            start = i;
        }
    }
    segments.push(Segment::new(current, start, samples.len() - 1, sample_rate));
    segments
}
