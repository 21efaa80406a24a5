//! Utility functions

use crate::constants::{APP_NAME, DATE_FORMAT};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

// Square viewBox — for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect x="2" y="2" width="60" height="60" rx="12" fill="#09090b"/><rect x="12" y="14" width="40" height="36" rx="5" fill="none" stroke="#2dd4bf" stroke-width="4"/><path d="M12 24h40" stroke="#2dd4bf" stroke-width="4"/><path d="M22 9v10M42 9v10" stroke="#fff" stroke-width="4" stroke-linecap="round"/><path d="M22 37l6 6 14-12" fill="none" stroke="#fff" stroke-width="4" stroke-linecap="round" stroke-linejoin="round"/></svg>"##;

/// Fonts known to carry Arabic glyphs, checked in order
const ARABIC_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoSansArabic-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansArabic-Regular.ttf",
    "/usr/share/fonts/google-noto/NotoSansArabic-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "C:\\Windows\\Fonts\\tahoma.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
];

/// Rasterize the icon SVG to a square RGBA image (for window/taskbar icons).
pub fn rasterize_icon(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Get the app data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// First existing font file: the configured one, then the known system fonts
pub fn find_arabic_font(configured: Option<&Path>) -> Option<PathBuf> {
    configured
        .into_iter()
        .map(Path::to_path_buf)
        .chain(ARABIC_FONT_CANDIDATES.iter().map(PathBuf::from))
        .find(|p| p.is_file())
}

/// Amounts are shown as entered, without currency or fixed decimals
pub fn format_amount(amount: f64) -> String {
    amount.to_string()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_print_like_plain_numbers() {
        assert_eq!(format_amount(1500.0), "1500");
        assert_eq!(format_amount(20.5), "20.5");
        assert_eq!(format_amount(-3.0), "-3");
    }

    #[test]
    fn dates_use_iso_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date), "2024-03-05");
        assert_eq!(parse_date(" 2024-03-05 "), Some(date));
        assert_eq!(parse_date("05/03/2024"), None);
        assert_eq!(parse_date("2024-02-30"), None);
    }

    #[test]
    fn configured_font_wins_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("custom.ttf");
        std::fs::write(&font, b"not really a font").unwrap();
        assert_eq!(find_arabic_font(Some(&font)), Some(font));
    }

    #[test]
    fn missing_configured_font_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.ttf");
        assert_ne!(find_arabic_font(Some(&missing)), Some(missing));
    }

    #[test]
    fn icon_rasterizes_to_requested_size() {
        let (pixels, w, h) = rasterize_icon(32).unwrap();
        assert_eq!((w, h), (32, 32));
        assert_eq!(pixels.len(), 32 * 32 * 4);
    }
}
