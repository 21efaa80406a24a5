//! App module - contains the main application state and logic

mod filters;
mod form;
mod views;

pub use form::SubscriberForm;

use crate::settings::Settings;
use crate::store::SubscriberList;
use crate::theme;
use crate::types::Field;
use crate::utils;
use eframe::egui;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) subscribers: SubscriberList,
    pub(crate) form: SubscriberForm,
    // Inputs outlined in red after a blocked submission
    pub(crate) invalid_fields: HashSet<Field>,
    pub(crate) filter_expired: bool,
    // Window geometry, saved on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) font_path: Option<String>,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor icons plus an Arabic-capable fallback font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        install_arabic_font(&mut fonts, &settings);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        Self::with_settings(settings, data_dir)
    }

    /// State without any egui context, used by `new` and by tests
    pub fn with_settings(settings: Settings, data_dir: PathBuf) -> Self {
        Self {
            subscribers: SubscriberList::new(),
            form: SubscriberForm::default(),
            invalid_fields: HashSet::new(),
            filter_expired: false,
            window_pos: None,
            window_size: None,
            needs_center: false,
            font_path: settings.font_path,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            font_path: self.font_path.clone(),
        };
        settings.save(&self.data_dir);
    }
}

fn install_arabic_font(fonts: &mut egui::FontDefinitions, settings: &Settings) {
    let Some(path) = utils::find_arabic_font(settings.font_path().as_deref()) else {
        warn!("No Arabic-capable font found, labels may not render");
        return;
    };

    match std::fs::read(&path) {
        Ok(bytes) => {
            fonts
                .font_data
                .insert("arabic".to_owned(), Arc::new(egui::FontData::from_owned(bytes)));
            // Fallback after the defaults so Latin text keeps the stock font
            for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                fonts
                    .families
                    .entry(family)
                    .or_default()
                    .push("arabic".to_owned());
            }
            info!(path = %path.display(), "Arabic font loaded");
        }
        Err(e) => warn!(error = %e, path = %path.display(), "Failed to read font"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_unfiltered() {
        let app = App::with_settings(Settings::default(), std::env::temp_dir());
        assert_eq!(app.subscribers.len(), 0);
        assert!(!app.filter_expired);
        assert_eq!(app.form, SubscriberForm::default());
    }

    #[test]
    fn save_settings_keeps_geometry_and_font() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            font_path: Some("/fonts/arabic.ttf".to_string()),
            ..Settings::default()
        };
        let mut app = App::with_settings(settings, dir.path().to_path_buf());
        app.window_pos = Some(egui::pos2(40.0, 60.0));
        app.window_size = Some(egui::vec2(1200.0, 800.0));
        app.save_settings();

        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.window_x, Some(40.0));
        assert_eq!(loaded.window_h, Some(800.0));
        assert_eq!(loaded.font_path.as_deref(), Some("/fonts/arabic.ttf"));
    }

    #[test]
    fn arabic_font_is_appended_as_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("font.ttf");
        std::fs::write(&font, b"font bytes").unwrap();
        let settings = Settings {
            font_path: Some(font.to_string_lossy().to_string()),
            ..Settings::default()
        };

        let mut fonts = egui::FontDefinitions::default();
        install_arabic_font(&mut fonts, &settings);

        assert!(fonts.font_data.contains_key("arabic"));
        let proportional = &fonts.families[&egui::FontFamily::Proportional];
        assert_eq!(proportional.last().map(String::as_str), Some("arabic"));
        assert!(proportional.len() > 1);
    }
}
