/// Literal marker separating positive from negative prompt text.
pub const NEG_MARKER: &str = "--neg";

/// A prompt split on the first [`NEG_MARKER`].
///
/// Text is borrowed verbatim; no whitespace is trimmed on either side of the marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PromptParts<'a> {
    /// Text before the marker (the whole prompt when no marker is present).
    pub positive: &'a str,
    /// Text between the first marker and the next one (or the end), if the marker occurs.
    pub negative: Option<&'a str>,
}

impl<'a> PromptParts<'a> {
    /// Positive text, if it carries any content.
    pub fn positive(&self) -> Option<&'a str> {
        present(self.positive)
    }

    /// Negative text, if the marker was found and something follows it.
    pub fn negative(&self) -> Option<&'a str> {
        self.negative.and_then(present)
    }
}

/// Split `prompt` at most once on [`NEG_MARKER`].
///
/// Anything from a second marker onwards is discarded.
pub fn split_prompt(prompt: &str) -> PromptParts<'_> {
    match prompt.split_once(NEG_MARKER) {
        Some((positive, rest)) => PromptParts {
            positive,
            negative: rest.split(NEG_MARKER).next(),
        },
        None => PromptParts {
            positive: prompt,
            negative: None,
        },
    }
}

// Empty text counts as absent; whitespace-only text does not.
fn present(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

#[cfg(test)]
#[path = "../../tests/unit/prompt/split.rs"]
mod tests;
