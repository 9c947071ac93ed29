//! Window configuration and management

use super::config::WindowConfig;
use winit::dpi::LogicalSize;
use winit::window::WindowAttributes;

/// Creates window attributes from configuration
pub fn window_attributes_from_config(config: &WindowConfig) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_resizable(config.resizable)
}

/// Bounds of the card stack centered in a window of the given logical size
///
/// Cards keep a 3:4 aspect ratio and leave a margin on every side.
pub fn card_bounds(width: f32, height: f32) -> crate::deck::Rect {
    let margin = 24.0;
    let max_w = (width - margin * 2.0).max(1.0);
    let max_h = (height - margin * 2.0).max(1.0);
    let card_w = max_w.min(max_h * 0.75);
    let card_h = card_w / 0.75;
    crate::deck::Rect::new(
        (width - card_w) / 2.0,
        (height - card_h) / 2.0,
        card_w,
        card_h,
    )
}
