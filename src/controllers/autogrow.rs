//! Autogrow sizing for text areas.
//!
//! The client behavior measures the content height on every input event and
//! asks for the height the field should take.

/// Height a text area should be set to, and whether it must scroll
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutogrowResult {
    pub height: f64,
    pub scrollable: bool,
}

/// Clamp the measured `content_height` between `min_rows` and `max_rows` lines.
///
/// `padding` is the sum of the vertical paddings and borders. A `max_rows` of
/// `None` lets the field grow without bound. `min_rows` is at least one line.
pub fn autogrow_height(
    content_height: f64,
    line_height: f64,
    padding: f64,
    min_rows: u32,
    max_rows: Option<u32>,
) -> AutogrowResult {
    let min_rows = min_rows.max(1);
    let min_height = f64::from(min_rows) * line_height + padding;
    let wanted = content_height.max(min_height);

    match max_rows {
        Some(max_rows) => {
            let max_height = f64::from(max_rows.max(min_rows)) * line_height + padding;
            AutogrowResult {
                height: wanted.min(max_height),
                scrollable: wanted > max_height,
            }
        }
        None => AutogrowResult {
            height: wanted,
            scrollable: false,
        },
    }
}
