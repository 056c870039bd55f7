use std::collections::BTreeMap;

use crate::foundation::{core::FrameIndex, error::PromptResult};

/// A prompt authored at a specific frame.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    /// Frame the prompt is pinned to.
    pub frame: FrameIndex,
    /// Prompt text, verbatim (may contain a `--neg` section).
    pub prompt: String,
}

/// Keyframe prompts ordered by frame.
///
/// Sorting is stable: entries sharing a frame keep the order they were supplied in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Keyframes {
    keys: Vec<Keyframe>,
}

impl Keyframes {
    /// Build from already-typed keyframes.
    pub fn new(keys: impl IntoIterator<Item = Keyframe>) -> Self {
        let mut keys: Vec<Keyframe> = keys.into_iter().collect();
        keys.sort_by_key(|k| k.frame);
        Self { keys }
    }

    /// Build from `(frame-key, prompt)` pairs such as `("10", "cat")`.
    ///
    /// Duplicate frames are kept; the interpolator warns about them and lets the last one win.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> PromptResult<Self>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let keys = pairs
            .into_iter()
            .map(|(k, v)| {
                Ok(Keyframe {
                    frame: FrameIndex::parse_key(k.as_ref())?,
                    prompt: v.into(),
                })
            })
            .collect::<PromptResult<Vec<_>>>()?;
        Ok(Self::new(keys))
    }

    /// Parse a JSON object of `{"<frame>": "<prompt>"}`.
    ///
    /// Repeated object keys resolve last-write-wins during map construction.
    pub fn from_json_str(json: &str) -> PromptResult<Self> {
        let map: BTreeMap<String, String> = serde_json::from_str(json)?;
        Self::from_pairs(map)
    }

    /// Read the same JSON shape as [`Keyframes::from_json_str`] from a reader.
    pub fn from_json_reader(reader: impl std::io::Read) -> PromptResult<Self> {
        let map: BTreeMap<String, String> = serde_json::from_reader(reader)?;
        Self::from_pairs(map)
    }

    /// Keyframes in ascending frame order.
    pub fn as_slice(&self) -> &[Keyframe] {
        &self.keys
    }

    /// Number of keyframes, duplicates included.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Return `true` when there are no keyframes.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Adjacent `(current, next)` pairs in frame order.
    pub fn pairs(&self) -> impl Iterator<Item = (&Keyframe, &Keyframe)> {
        self.keys.windows(2).map(|w| (&w[0], &w[1]))
    }
}

impl<'de> serde::Deserialize<'de> for Keyframes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let map = BTreeMap::<String, String>::deserialize(deserializer)?;
        Self::from_pairs(map).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/keyframes/model.rs"]
mod tests;
