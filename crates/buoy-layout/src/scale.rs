/// Base font size and line height, in em, for a given page width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextScale {
    pub font_size_em: f32,
    pub line_height_em: f32,
}

/// The manual's reference layout width: scale is 1:1 around a 1500px page.
const REFERENCE_WIDTH: f32 = 1500.0;

/// Responsive text scale. Pure function of the wrapper width; recomputing
/// with the same width yields the same output.
pub fn text_scale(width: f32) -> TextScale {
    TextScale {
        font_size_em: (width / REFERENCE_WIDTH + 0.25) * 1.1,
        line_height_em: (width / REFERENCE_WIDTH + 1.0) * 1.1,
    }
}
