use plotters::style::{RGBAColor, RGBColor};

/// Chart theme configuration
pub struct ChartTheme {
    pub background_color: RGBAColor,
    pub text_color: RGBAColor,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background_color: RGBAColor(0, 0, 0, 0.94),
            text_color: RGBAColor(255, 255, 255, 0.8),
        }
    }
}

/// Slice palette, cycled when a view has more dates than entries.
const SLICE_PALETTE: [RGBColor; 8] = [
    RGBColor(100, 149, 237), // cornflower blue
    RGBColor(60, 179, 113),  // medium sea green
    RGBColor(237, 125, 49),
    RGBColor(186, 85, 211),
    RGBColor(218, 165, 32),
    RGBColor(95, 158, 160),
    RGBColor(205, 92, 92),
    RGBColor(135, 206, 250), // light sky blue
];

pub fn slice_color(index: usize) -> RGBColor {
    SLICE_PALETTE[index % SLICE_PALETTE.len()]
}
