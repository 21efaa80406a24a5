//! View rendering (title, form, filter, subscriber table)

use super::App;
use crate::constants::*;
use crate::theme;
use crate::types::{Field, SubscriptionStatus};
use crate::ui::components::{checkbox_row, date_field, form_field, status_badge};
use crate::utils::{format_amount, format_date};
use chrono::NaiveDateTime;
use eframe::egui;

fn field_label(field: Field) -> &'static str {
    match field {
        Field::FirstName => LABEL_FIRST_NAME,
        Field::LastName => LABEL_LAST_NAME,
        Field::Phone => LABEL_PHONE,
        Field::Amount => LABEL_AMOUNT,
        Field::StartDate => LABEL_START_DATE,
        Field::EndDate => LABEL_END_DATE,
    }
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_HEADING)
                .strong()
                .color(theme::TEXT_PRIMARY),
        )
        .selectable(false),
    );
}

impl App {
    /// Whole page, top to bottom
    pub(crate) fn render_page(&mut self, ui: &mut egui::Ui, now: NaiveDateTime) {
        ui.vertical_centered(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(TITLE)
                        .size(theme::FONT_TITLE)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );
        });
        ui.add_space(theme::SPACING_XXL);

        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            self.render_form(ui, now);
        });
        ui.add_space(theme::SPACING_XXL);

        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            self.render_filters(ui);
        });
        ui.add_space(theme::SPACING_XXL);

        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            self.render_list_view(ui, now);
        });
    }

    fn render_form(&mut self, ui: &mut egui::Ui, now: NaiveDateTime) {
        ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
            section_heading(ui, FORM_HEADING);
        });
        ui.add_space(theme::SPACING_LG);

        let today = now.date();
        let mut submit_requested = false;
        let mut edited: Vec<Field> = Vec::new();

        // Two columns, first field of each pair on the right
        let pairs = [
            (Field::FirstName, Field::LastName),
            (Field::Phone, Field::Amount),
            (Field::StartDate, Field::EndDate),
        ];
        for (right, left) in pairs {
            ui.columns(2, |cols| {
                for (col, field) in [(1, right), (0, left)] {
                    let ui = &mut cols[col];
                    let invalid = self.invalid_fields.contains(&field);
                    let label = field_label(field);
                    let value = self.form.value_mut(field);

                    let (response, picked) = match field {
                        Field::StartDate | Field::EndDate => {
                            date_field(ui, label, value, field.name(), today, invalid)
                        }
                        Field::Amount => (form_field(ui, label, value, "0", invalid), false),
                        _ => (form_field(ui, label, value, "", invalid), false),
                    };

                    if response.changed() || picked {
                        edited.push(field);
                    }
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit_requested = true;
                    }
                }
            });
            ui.add_space(theme::SPACING_MD);
        }

        for field in edited {
            self.revalidate_field(field);
        }

        ui.add_space(theme::SPACING_SM);
        let button = theme::button_accent(format!("{}  {}", egui_phosphor::regular::USER_PLUS, SUBMIT_LABEL))
            .min_size(egui::vec2(ui.available_width(), theme::BUTTON_HEIGHT_LARGE));
        if ui.add(button).clicked() {
            submit_requested = true;
        }

        if submit_requested {
            let now_millis = chrono::Utc::now().timestamp_millis();
            self.submit_form(now_millis).ok();
        }
    }

    fn render_filters(&mut self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(egui_phosphor::regular::FUNNEL)
                        .size(theme::FONT_HEADING + 2.0)
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );
            section_heading(ui, FILTER_HEADING);

            ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                if checkbox_row(ui, self.filter_expired, FILTER_EXPIRED_ONLY) {
                    self.filter_expired = !self.filter_expired;
                    tracing::debug!(expired_only = self.filter_expired, "Filter toggled");
                }
            });
        });
    }

    fn render_list_view(&mut self, ui: &mut egui::Ui, now: NaiveDateTime) {
        use egui_extras::{Column, TableBuilder};

        ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
            section_heading(ui, LIST_HEADING);
        });
        ui.add_space(theme::SPACING_LG);

        let indices = self.filtered_indices(now);
        let subscribers = self.subscribers.all();

        // Columns left to right; the name ends up on the right edge
        let headers = [COL_STATUS, COL_END_DATE, COL_START_DATE, COL_AMOUNT, COL_PHONE, COL_FULL_NAME];
        let available_width = ui.available_width();
        let part = available_width / 8.0;

        TableBuilder::new(ui)
            .striped(false)
            .resizable(false)
            .vscroll(false)
            .cell_layout(egui::Layout::right_to_left(egui::Align::Center))
            .column(Column::exact(part * 1.75))
            .column(Column::exact(part * 1.25))
            .column(Column::exact(part * 1.25))
            .column(Column::exact(part).clip(true))
            .column(Column::exact(part * 1.25).clip(true))
            .column(Column::remainder().clip(true))
            .header(theme::HEADER_HEIGHT, |mut header| {
                for title in headers {
                    header.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(title)
                                    .size(theme::FONT_LABEL)
                                    .strong()
                                    .color(theme::TEXT_DIM),
                            )
                            .selectable(false),
                        );
                    });
                }
            })
            .body(|body| {
                body.rows(theme::ROW_HEIGHT, indices.len(), |mut row| {
                    let subscriber = &subscribers[indices[row.index()]];
                    let status = SubscriptionStatus::evaluate(subscriber.end_date, now);

                    row.col(|ui| {
                        ui.push_id(subscriber.id.as_str(), |ui| status_badge(ui, status));
                    });
                    row.col(|ui| {
                        ui.label(format_date(subscriber.end_date));
                    });
                    row.col(|ui| {
                        ui.label(format_date(subscriber.start_date));
                    });
                    row.col(|ui| {
                        ui.add(egui::Label::new(format_amount(subscriber.amount)).truncate());
                    });
                    row.col(|ui| {
                        ui.add(egui::Label::new(&subscriber.phone).truncate());
                    });
                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(subscriber.full_name())
                                    .size(theme::FONT_BODY)
                                    .color(theme::TEXT_PRIMARY),
                            )
                            .truncate(),
                        );
                    });
                });
            });
    }
}
