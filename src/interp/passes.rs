//! The three ordered passes that turn sparse keyframes into a dense frame sequence.
//!
//! Each pass consumes the previous pass's [`FrameSlots`] and returns the next one, so
//! every phase can be driven and inspected on its own:
//!
//! 1. [`blend_pass`] writes composite prompts for every frame inside a keyframe interval.
//! 2. [`keyframe_pass`] pins each keyframe's prompt verbatim at its own frame.
//! 3. [`fill_pass`] forward-fills, then back-fills, whatever is still unset.
//!
//! Writes past the end of the buffer are dropped, so its size is exactly the number of
//! frames requested regardless of how far out the keyframes sit.

use crate::{
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{PromptError, PromptResult},
    },
    interp::warning::{InterpWarning, report},
    keyframes::model::Keyframes,
    prompt::{
        compose::{compose_blend, is_composite},
        split::split_prompt,
    },
};

/// Working buffer of per-frame prompts; `None` marks an unresolved slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameSlots {
    slots: Vec<Option<String>>,
}

impl FrameSlots {
    /// `len` unresolved slots.
    pub fn unresolved(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Return `true` when the buffer has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Resolved prompt at `frame`, if any.
    pub fn get(&self, frame: FrameIndex) -> Option<&str> {
        self.slot_index(frame)
            .and_then(|i| self.slots[i].as_deref())
    }

    /// Store `prompt` at `frame`. Frames past the end are dropped; returns whether it was stored.
    pub fn set(&mut self, frame: FrameIndex, prompt: String) -> bool {
        match self.slot_index(frame) {
            Some(i) => {
                self.slots[i] = Some(prompt);
                true
            }
            None => false,
        }
    }

    /// Count of slots still unresolved.
    pub fn unresolved_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    /// Truncate to `len` frames and unwrap every slot.
    pub fn into_frames(mut self, len: usize) -> PromptResult<Vec<String>> {
        self.slots.truncate(len);
        self.slots
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                s.ok_or_else(|| PromptError::validation(format!("frame {i} is unresolved")))
            })
            .collect()
    }

    /// Frames covered by the buffer, `[0, len)`.
    pub fn bounds(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.slots.len() as u64),
        }
    }

    fn slot_index(&self, frame: FrameIndex) -> Option<usize> {
        // `contains` bounds the index by `len`, which already fits in `usize`.
        self.bounds().contains(frame).then_some(frame.0 as usize)
    }
}

/// Write blended prompts for every frame in each `[current, next)` keyframe interval.
///
/// Pairs whose frames do not strictly increase are skipped with a
/// [`InterpWarning::NonMonotonic`].
pub fn blend_pass(
    mut slots: FrameSlots,
    keyframes: &Keyframes,
    warnings: &mut Vec<InterpWarning>,
) -> FrameSlots {
    for (pair, (current, next)) in keyframes.pairs().enumerate() {
        let range = match FrameRange::new(current.frame, next.frame) {
            Ok(range) if !range.is_empty() => range,
            _ => {
                report(
                    warnings,
                    InterpWarning::NonMonotonic {
                        pair,
                        current: current.frame,
                        next: next.frame,
                    },
                );
                continue;
            }
        };

        let (cur_parts, next_parts) = (split_prompt(&current.prompt), split_prompt(&next.prompt));
        let mut written = 0usize;
        for f in range.iter() {
            let (current_weight, next_weight) = range.blend_weights(f);
            if !slots.set(f, compose_blend(cur_parts, next_parts, current_weight, next_weight)) {
                break;
            }
            written += 1;
        }
        tracing::debug!(
            from = current.frame.0,
            to = next.frame.0,
            written,
            "blended keyframe interval"
        );
    }
    slots
}

/// Overwrite each keyframe's own frame with its prompt, verbatim.
///
/// Keyframes sharing a frame are applied in order, so the last one supplied wins.
/// Prompts already using composite syntax yield [`InterpWarning::CompositeKeyframe`].
pub fn keyframe_pass(
    mut slots: FrameSlots,
    keyframes: &Keyframes,
    warnings: &mut Vec<InterpWarning>,
) -> FrameSlots {
    for key in keyframes.as_slice() {
        slots.set(key.frame, key.prompt.clone());
        if is_composite(&key.prompt) {
            report(warnings, InterpWarning::CompositeKeyframe { frame: key.frame });
        }
    }
    slots
}

/// Propagate the nearest preceding resolved prompt forward, then the nearest following one
/// backward into any leading gap.
///
/// `beyond` is the nearest resolved prompt past the end of the buffer. It only reaches the
/// output when nothing inside the buffer is resolved.
pub fn fill_pass(mut slots: FrameSlots, beyond: Option<&str>) -> FrameSlots {
    carry_into_gaps(slots.slots.iter_mut(), None);
    carry_into_gaps(slots.slots.iter_mut().rev(), beyond.map(str::to_owned));
    slots
}

fn carry_into_gaps<'a>(
    slots: impl Iterator<Item = &'a mut Option<String>>,
    mut carry: Option<String>,
) {
    for slot in slots {
        if let Some(p) = slot.as_ref() {
            carry = Some(p.clone());
        } else {
            *slot = carry.clone();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interp/passes.rs"]
mod tests;
