/// Crate-wide result alias.
pub type PromptResult<T> = Result<T, PromptError>;

/// Errors surfaced by keyframe parsing and prompt interpolation.
///
/// Ordering anomalies between keyframes are not errors; they are reported as
/// [`crate::InterpWarning`] values instead.
#[derive(thiserror::Error, Debug)]
pub enum PromptError {
    /// A keyframe key could not be read as a non-negative frame index.
    #[error("invalid keyframe key '{key}': {source}")]
    InvalidKeyframe {
        /// The offending key, verbatim.
        key: String,
        /// Underlying integer parse failure.
        #[source]
        source: std::num::ParseIntError,
    },

    /// Interpolation was asked for frames but no keyframes were supplied.
    #[error("keyframe set is empty; cannot resolve {max_frames} frame(s)")]
    EmptyKeyframes {
        /// Requested output length.
        max_frames: u64,
    },

    /// Input-shape violation (for example an inverted frame range).
    #[error("validation error: {0}")]
    Validation(String),

    /// Keyframe document could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PromptError {
    /// Build a [`PromptError::InvalidKeyframe`].
    pub fn invalid_keyframe(key: impl Into<String>, source: std::num::ParseIntError) -> Self {
        Self::InvalidKeyframe {
            key: key.into(),
            source,
        }
    }

    /// Build a [`PromptError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PromptError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for PromptError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
