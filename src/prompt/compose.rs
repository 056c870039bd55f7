use crate::prompt::split::PromptParts;

/// Keyword joining weighted clauses in composite prompt syntax.
pub const AND_KEYWORD: &str = " AND ";
/// Marker opening the negative section of a composite prompt.
pub const NEG_SECTION: &str = " --neg ";

/// Format a blend weight as its shortest round-trip decimal (`1`, `0.5`, `0.1`).
pub fn format_weight(w: f64) -> String {
    format!("{w}")
}

/// Return `true` when `prompt` already uses composite syntax.
pub fn is_composite(prompt: &str) -> bool {
    prompt.contains(AND_KEYWORD)
}

/// Build the composite prompt blending `current` into `next`.
///
/// Output shape: `<cur> :<cw> AND <next> :<nw> --neg  <cur_neg> :<cw> AND  <next_neg> :<nw>`,
/// where each clause appears only when its component is present and the negative section
/// only when at least one side has a negative.
pub fn compose_blend(
    current: PromptParts<'_>,
    next: PromptParts<'_>,
    current_weight: f64,
    next_weight: f64,
) -> String {
    let cw = format_weight(current_weight);
    let nw = format_weight(next_weight);
    let mut out = String::new();

    let (cur_pos, next_pos) = (current.positive(), next.positive());
    if let Some(p) = cur_pos {
        out.push_str(&format!("{p} :{cw}"));
    }
    if cur_pos.is_some() && next_pos.is_some() {
        out.push_str(AND_KEYWORD);
    }
    if let Some(p) = next_pos {
        out.push_str(&format!("{p} :{nw}"));
    }

    let (cur_neg, next_neg) = (current.negative(), next.negative());
    if cur_neg.is_some() || next_neg.is_some() {
        out.push_str(NEG_SECTION);
        if let Some(n) = cur_neg {
            out.push_str(&format!(" {n} :{cw}"));
        }
        if cur_neg.is_some() && next_neg.is_some() {
            out.push_str(AND_KEYWORD);
        }
        if let Some(n) = next_neg {
            out.push_str(&format!(" {n} :{nw}"));
        }
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/prompt/compose.rs"]
mod tests;
