use crate::{
    foundation::{
        core::FrameIndex,
        error::{PromptError, PromptResult},
    },
    interp::{
        passes::{FrameSlots, blend_pass, fill_pass, keyframe_pass},
        warning::InterpWarning,
    },
    keyframes::model::Keyframes,
};

/// Dense per-frame prompts plus whatever was noticed along the way.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Interpolation {
    /// One resolved prompt per frame, `0..max_frames`.
    pub frames: Vec<String>,
    /// Warnings in the order they were raised.
    pub warnings: Vec<InterpWarning>,
}

impl Interpolation {
    /// Prompt at `frame`, if within range.
    pub fn frame(&self, frame: FrameIndex) -> Option<&str> {
        usize::try_from(frame.0)
            .ok()
            .and_then(|i| self.frames.get(i))
            .map(String::as_str)
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Return `true` when no frames were requested.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Resolve a prompt for every frame in `0..max_frames`.
///
/// Runs [`blend_pass`], [`keyframe_pass`] and [`fill_pass`] in order over a buffer of
/// exactly `max_frames` slots. When the first keyframe lies at or past the end, its prompt
/// seeds the back-fill; keyframes past the end still raise warnings.
///
/// Fails with [`PromptError::EmptyKeyframes`] when frames are requested but no keyframes exist.
#[tracing::instrument(skip(keyframes), fields(keyframes = keyframes.len()))]
pub fn interpolate_prompts(keyframes: &Keyframes, max_frames: u64) -> PromptResult<Interpolation> {
    let Some(first) = keyframes.as_slice().first().map(|k| k.frame) else {
        if max_frames == 0 {
            return Ok(Interpolation::default());
        }
        return Err(PromptError::EmptyKeyframes { max_frames });
    };

    let len = usize::try_from(max_frames)
        .map_err(|_| PromptError::validation(format!("max_frames {max_frames} is too large")))?;

    let mut warnings = Vec::new();
    let slots = FrameSlots::unresolved(len);
    let slots = blend_pass(slots, keyframes, &mut warnings);
    let slots = keyframe_pass(slots, keyframes, &mut warnings);
    let beyond = (first.0 >= max_frames).then(|| pinned_prompt(keyframes, first));
    let slots = fill_pass(slots, beyond.flatten());
    let frames = slots.into_frames(len)?;

    tracing::debug!(frames = frames.len(), warnings = warnings.len(), "interpolated prompts");
    Ok(Interpolation { frames, warnings })
}

// Prompt `keyframe_pass` leaves at `frame`: the last keyframe supplied for it.
fn pinned_prompt(keyframes: &Keyframes, frame: FrameIndex) -> Option<&str> {
    keyframes
        .as_slice()
        .iter()
        .take_while(|k| k.frame <= frame)
        .filter(|k| k.frame == frame)
        .last()
        .map(|k| k.prompt.as_str())
}

/// Parse a `{"<frame>": "<prompt>"}` JSON document and interpolate it.
pub fn interpolate_json(json: &str, max_frames: u64) -> PromptResult<Interpolation> {
    let keyframes = Keyframes::from_json_str(json)?;
    interpolate_prompts(&keyframes, max_frames)
}

#[cfg(test)]
#[path = "../../tests/unit/interp/interpolator.rs"]
mod tests;
