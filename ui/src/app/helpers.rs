use iced::Color;
use tracing::{info, warn};

use dpp_core::targets;

pub(crate) const HEADING_COLOR: Color = Color {
    r: 0.07,
    g: 0.07,
    b: 0.07,
    a: 1.0,
};
pub(crate) const LABEL_COLOR: Color = Color {
    r: 0.42,
    g: 0.45,
    b: 0.50,
    a: 1.0,
};
pub(crate) const BODY_COLOR: Color = Color {
    r: 0.29,
    g: 0.29,
    b: 0.29,
    a: 1.0,
};
pub(crate) const SUSTAINABILITY_COLOR: Color = Color {
    r: 0.13,
    g: 0.77,
    b: 0.37,
    a: 1.0,
};
pub(crate) const MATERIALS_COLOR: Color = Color {
    r: 0.23,
    g: 0.51,
    b: 0.96,
    a: 1.0,
};
pub(crate) const REPAIR_COLOR: Color = Color {
    r: 0.66,
    g: 0.33,
    b: 0.97,
    a: 1.0,
};

pub(crate) fn level_color(level: tracing::Level) -> Color {
    match level {
        tracing::Level::ERROR => Color::from_rgb8(0xe0, 0x4f, 0x4f),
        tracing::Level::WARN => Color::from_rgb8(0xe0, 0xb0, 0x4f),
        tracing::Level::INFO => Color::from_rgb8(0x3b, 0x82, 0xf6),
        tracing::Level::DEBUG => Color::from_rgb8(0x22, 0x7d, 0x64),
        tracing::Level::TRACE => Color::from_rgb8(0x6b, 0x72, 0x80),
    }
}

pub(crate) fn copy_to_clipboard(what: &str, text: String) -> String {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => {
            info!(target: targets::UI, "{what} copied to clipboard");
            format!("{what} copied")
        }
        Err(error) => {
            warn!(target: targets::UI, "Clipboard copy failed: {}", error);
            format!("Failed: {error}")
        }
    }
}
