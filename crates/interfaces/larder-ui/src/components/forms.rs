use crate::utils::section_label;
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

/// Single-line labelled field. Marks `touched` once the user has interacted
/// with it, so validation errors only show after first contact.
pub fn text_field<'a>(
    tui: impl TuiBuilderLogic<'a>,
    label: &str,
    value: &mut String,
    touched: &mut bool,
    hint: &str,
) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(2.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| section_label(ui, label));
        let resp = tui.ui_add(
            egui::TextEdit::singleline(value)
                .hint_text(hint)
                .desired_width(f32::INFINITY)
                .font(egui::FontId::monospace(12.0)),
        );
        if resp.changed() || resp.lost_focus() {
            *touched = true;
        }
    });
}

pub fn multiline_field<'a>(
    tui: impl TuiBuilderLogic<'a>,
    label: &str,
    value: &mut String,
    touched: &mut bool,
    hint: &str,
) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(2.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| section_label(ui, label));
        let resp = tui.ui_add(
            egui::TextEdit::multiline(value)
                .hint_text(hint)
                .desired_rows(6)
                .desired_width(f32::INFINITY)
                .font(egui::FontId::monospace(12.0)),
        );
        if resp.changed() || resp.lost_focus() {
            *touched = true;
        }
    });
}
