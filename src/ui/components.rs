//! Reusable UI components
//!
//! Standalone widgets for the subscriber form, filter and table.
//! Everything is laid out right-to-left.

use crate::constants::{STATUS_ACTIVE, STATUS_EXPIRED, STATUS_NEARING};
use crate::theme;
use crate::types::SubscriptionStatus;
use crate::utils::{format_date, parse_date};
use eframe::egui;

/// Badge label and optional leading icon for a status
pub fn status_label(status: SubscriptionStatus) -> (Option<&'static str>, &'static str) {
    match status {
        SubscriptionStatus::Expired => (None, STATUS_EXPIRED),
        SubscriptionStatus::NearingExpiry => (Some(egui_phosphor::regular::BELL), STATUS_NEARING),
        SubscriptionStatus::Active => (None, STATUS_ACTIVE),
    }
}

/// Rounded status pill
pub fn status_badge(ui: &mut egui::Ui, status: SubscriptionStatus) -> egui::Response {
    let (bg, fg) = theme::status_colors(status);
    let text = match status_label(status) {
        (Some(icon), label) => format!("{}  {}", label, icon),
        (None, label) => label.to_string(),
    };

    let galley = ui.painter().layout_no_wrap(
        text,
        egui::FontId::proportional(theme::FONT_SMALL + 1.0),
        fg,
    );
    let size = egui::vec2(galley.size().x + 2.0 * theme::SPACING_LG, theme::BADGE_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, theme::RADIUS_PILL, bg);
        painter.galley(rect.center() - galley.size() / 2.0, galley, fg);
    }

    response
}

fn field_label(ui: &mut egui::Ui, label: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(label)
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_MUTED),
        )
        .selectable(false),
    );
}

/// Labelled single-line input. Returns the text edit response.
pub fn form_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    invalid: bool,
) -> egui::Response {
    ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
        field_label(ui, label);
        theme::input_frame(invalid)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::singleline(value)
                        .hint_text(hint)
                        .frame(false)
                        .horizontal_align(egui::Align::Max)
                        .desired_width(f32::INFINITY),
                )
            })
            .inner
    })
    .inner
}

/// Labelled date input: free text plus a calendar picker that writes into it.
/// Returns the text edit response and whether the picker changed the value.
pub fn date_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    id_salt: &str,
    today: chrono::NaiveDate,
    invalid: bool,
) -> (egui::Response, bool) {
    ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
        field_label(ui, label);
        theme::input_frame(invalid)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let mut picked = parse_date(value).unwrap_or(today);
                    let picker = ui.add(
                        egui_extras::DatePickerButton::new(&mut picked)
                            .id_salt(id_salt)
                            .format("")
                            .calendar_week(false),
                    );
                    let picker_changed = picker.changed();
                    if picker_changed {
                        *value = format_date(picked);
                    }

                    let text = ui.add(
                        egui::TextEdit::singleline(value)
                            .hint_text("YYYY-MM-DD")
                            .frame(false)
                            .horizontal_align(egui::Align::Max)
                            .desired_width(f32::INFINITY),
                    );
                    (text, picker_changed)
                })
                .inner
            })
            .inner
    })
    .inner
}

/// Checkbox with its label to the left (right-to-left row). Returns true if toggled.
pub fn checkbox_row(ui: &mut egui::Ui, checked: bool, label: &str) -> bool {
    let font = egui::FontId::proportional(theme::FONT_BODY);
    let text_width = ui
        .painter()
        .layout_no_wrap(label.to_string(), font.clone(), theme::TEXT_PRIMARY)
        .size()
        .x;
    let cb_size = theme::CHECKBOX_SIZE;
    let (row_rect, row_resp) = ui.allocate_exact_size(
        egui::vec2(cb_size + theme::SPACING_MD + text_width, 20.0),
        egui::Sense::click(),
    );
    if row_resp.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    let painter = ui.painter();
    let cb_rect = egui::Rect::from_min_size(
        egui::pos2(row_rect.max.x - cb_size, row_rect.center().y - cb_size / 2.0),
        egui::vec2(cb_size, cb_size),
    );
    if checked {
        painter.rect_stroke(cb_rect, 3.0, egui::Stroke::new(1.5, theme::ACCENT), egui::StrokeKind::Inside);
        painter.rect_filled(cb_rect.shrink(3.0), 2.0, theme::ACCENT);
    } else {
        painter.rect_stroke(cb_rect, 3.0, egui::Stroke::new(1.5, theme::BORDER_DEFAULT), egui::StrokeKind::Inside);
    }
    painter.text(
        egui::pos2(cb_rect.min.x - theme::SPACING_MD, row_rect.center().y),
        egui::Align2::RIGHT_CENTER,
        label,
        font,
        theme::TEXT_PRIMARY,
    );

    row_resp.clicked()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_nearing_expiry_has_an_icon() {
        assert_eq!(status_label(SubscriptionStatus::Expired), (None, STATUS_EXPIRED));
        assert_eq!(status_label(SubscriptionStatus::Active), (None, STATUS_ACTIVE));
        let (icon, label) = status_label(SubscriptionStatus::NearingExpiry);
        assert_eq!(icon, Some(egui_phosphor::regular::BELL));
        assert_eq!(label, STATUS_NEARING);
    }
}
