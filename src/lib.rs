//! Promptween turns sparse keyframe prompts into one prompt per animation frame.
//!
//! Between two keyframes it emits composite prompts in the weighted syntax understood by
//! composable-diffusion front ends (`text :weight AND text :weight --neg ...`), so a
//! text-to-image model can cross-fade between concepts over time.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: `{"<frame>": "<prompt>"}` -> [`Keyframes`] (sorted by frame)
//! 2. **Blend**: write composite prompts for every frame between adjacent keyframes
//! 3. **Pin**: overwrite each keyframe's own frame with its prompt, verbatim
//! 4. **Fill**: forward-fill, then back-fill, frames outside any keyframe interval
//!
//! Steps 2-4 are separate passes over a [`FrameSlots`] buffer and can be run
//! individually. [`interpolate_prompts`] runs all of them.
//!
//! ```
//! let out = promptween::interpolate_json(r#"{ "0": "rocket", "10": "cat" }"#, 10)?;
//! assert_eq!(out.frames[0], "rocket");
//! assert_eq!(out.frames[5], "rocket :0.5 AND cat :0.5");
//! # Ok::<(), promptween::PromptError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod interp;
mod keyframes;
mod prompt;

pub use foundation::core::{FrameIndex, FrameRange};
pub use foundation::error::{PromptError, PromptResult};
pub use interp::interpolator::{Interpolation, interpolate_json, interpolate_prompts};
pub use interp::passes::{FrameSlots, blend_pass, fill_pass, keyframe_pass};
pub use interp::warning::InterpWarning;
pub use keyframes::model::{Keyframe, Keyframes};
pub use prompt::compose::{AND_KEYWORD, NEG_SECTION, compose_blend, format_weight, is_composite};
pub use prompt::split::{NEG_MARKER, PromptParts, split_prompt};
