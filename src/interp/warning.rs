use crate::foundation::core::FrameIndex;

/// Recoverable anomaly noticed while interpolating.
///
/// Warnings never change the output length; they only explain why a range was
/// skipped or why a keyframe may blend oddly.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InterpWarning {
    /// Adjacent keyframes (by sorted position) do not strictly increase; the interval was skipped.
    NonMonotonic {
        /// Sorted position of the first keyframe in the pair.
        pair: usize,
        /// Frame of the first keyframe.
        current: FrameIndex,
        /// Frame of the second keyframe.
        next: FrameIndex,
    },
    /// A keyframe prompt already uses the ` AND ` composite keyword.
    CompositeKeyframe {
        /// Frame of the offending keyframe.
        frame: FrameIndex,
    },
}

impl std::fmt::Display for InterpWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonMonotonic {
                pair,
                current,
                next,
            } => write!(
                f,
                "sequential prompt keyframes {pair}:{current} and {}:{next} are not monotonically increasing; skipping interpolation",
                pair + 1
            ),
            Self::CompositeKeyframe { frame } => write!(
                f,
                "keyframe {frame}'s prompt already uses the composite 'AND' keyword; interpolation across it may behave unexpectedly"
            ),
        }
    }
}

/// Log `warning` and keep it for the caller.
pub(crate) fn report(warnings: &mut Vec<InterpWarning>, warning: InterpWarning) {
    tracing::warn!("{warning}");
    warnings.push(warning);
}
