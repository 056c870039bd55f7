use crate::foundation::error::{PromptError, PromptResult};

/// Absolute 0-based frame index in animation space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Parse a decimal frame key such as `"10"`.
    ///
    /// Surrounding ASCII whitespace is ignored; signs other than a leading `+` are rejected.
    pub fn parse_key(key: &str) -> PromptResult<Self> {
        key.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| PromptError::invalid_keyframe(key, e))
    }
}

impl std::fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Half-open frame range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// Inclusive range start.
    pub start: FrameIndex,
    /// Exclusive range end.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Create a validated range with `start <= end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> PromptResult<Self> {
        if start.0 > end.0 {
            return Err(PromptError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames contained in the range.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// Return `true` when the range has no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Return `true` when `f` is inside `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Iterate every frame in the range in ascending order.
    pub fn iter(self) -> impl Iterator<Item = FrameIndex> {
        (self.start.0..self.end.0).map(FrameIndex)
    }

    /// Linear position of `f` within the range as `(from_start, to_end)` weights.
    ///
    /// The pair sums to 1. `start` maps to `(1, 0)`; empty ranges always map to `(1, 0)`.
    pub fn blend_weights(self, f: FrameIndex) -> (f64, f64) {
        let span = self.len_frames();
        if span == 0 {
            return (1.0, 0.0);
        }
        let elapsed = f.0.saturating_sub(self.start.0).min(span);
        let remaining = span - elapsed;
        (remaining as f64 / span as f64, elapsed as f64 / span as f64)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
