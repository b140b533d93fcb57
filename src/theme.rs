//! Theming for the popup menu.

use egui::Color32;

/// Presentation knobs for the popup menu. The defaults mirror a compact
/// light-theme menu; hosts with their own palette override the colors.
pub struct PopupMenuTheme {
    /// Maximum menu width in ui points; labels truncate beyond it.
    pub max_width: f32,
    /// Height of each item row.
    pub row_height: f32,
    /// Side length of the square image slot at the start of a row.
    pub image_size: f32,
    /// Horizontal margin around the label.
    pub label_margin: f32,
    /// Vertical padding above the first and below the last row.
    pub vertical_padding: f32,
    /// Row fill while hovered.
    pub hover_color: Color32,
    /// Label text color.
    pub text_color: Color32,
    /// Label text size.
    pub text_size: f32,
}

impl Default for PopupMenuTheme {
    fn default() -> Self {
        Self {
            max_width: 320.0,
            row_height: 32.0,
            image_size: 30.0,
            label_margin: 8.0,
            vertical_padding: 5.0,
            hover_color: Color32::from_rgba_unmultiplied(0xD3, 0xD3, 0xD3, 0x52),
            text_color: Color32::from_rgb(0x24, 0x29, 0x2E),
            text_size: 12.0,
        }
    }
}
