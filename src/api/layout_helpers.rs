pub(super) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    // Deterministic and surface-independent; real glyph metrics are unknown here.
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' | ':' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

/// Clamps a box of `size` starting at `start` into `[min, max]`.
pub(super) fn clamp_box_start(start: f64, size: f64, min: f64, max: f64) -> f64 {
    let upper = (max - size).max(min);
    start.clamp(min, upper)
}
