use crate::components::forms::{multiline_field, text_field};
use crate::theme::{COL_ERROR, COL_TEXT};
use crate::utils::cmd_button;
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use larder_api::RecipeBackend;
use larder_app_core::viewmodel::recipe_form_vm;
use larder_app_core::{AppCommand, AppKernel};

pub fn draw<'a, B: RecipeBackend>(tui: impl TuiBuilderLogic<'a>, kernel: &mut AppKernel<B>) {
    // Outer scrollable column
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(10.0),
        size: percent(1.),
        overflow: taffy::Point {
            x: taffy::Overflow::Hidden,
            y: taffy::Overflow::Scroll,
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| crate::utils::section_label(ui, "NEW RECIPE"));

        kernel.store.with_form_mut(|form| {
            text_field(
                &mut *tui,
                "NAME",
                &mut form.name,
                &mut form.touched.name,
                "Recipe name",
            );
            multiline_field(
                &mut *tui,
                "INSTRUCTIONS",
                &mut form.instructions,
                &mut form.touched.instructions,
                "Step by step...",
            );
        });

        // View model over the post-edit state
        let vm = recipe_form_vm(&kernel.store.state());

        if let Some(err) = &vm.name_error {
            tui.colored_label(COL_ERROR, err.as_str());
        }
        if let Some(err) = &vm.instructions_error {
            tui.colored_label(COL_ERROR, err.as_str());
        }

        tui.ui(|ui| crate::utils::section_label(ui, "INGREDIENTS"));

        let mut edit_clicked = None;
        for row in &vm.ingredients {
            let label = format!("{}  {}", row.quantity_label, row.name);
            if tui
                .ui(|ui| {
                    ui.add(
                        egui::Button::new(
                            egui::RichText::new(label).size(11.0).color(COL_TEXT),
                        )
                        .min_size(egui::vec2(ui.available_width(), 24.0))
                        .stroke(egui::Stroke::new(1.0, crate::theme::COL_BORDER)),
                    )
                })
                .clicked()
            {
                edit_clicked = Some(row.key);
            }
        }
        if let Some(key) = edit_clicked {
            kernel.dispatch(AppCommand::OpenEditDialog(key));
        }

        if tui
            .ui(|ui| cmd_button(ui, "ADD INGREDIENT", "outline", !vm.is_submitting))
            .clicked()
        {
            kernel.dispatch(AppCommand::OpenCreateDialog);
        }

        // Submit row
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            gap: length(8.0),
            margin: taffy::Rect {
                left: length(0.0),
                right: length(0.0),
                top: length(8.0),
                bottom: length(0.0),
            },
            ..Default::default()
        })
        .add(|tui| {
            let label = if vm.is_submitting { "SUBMITTING" } else { "SUBMIT" };
            if tui
                .ui(|ui| cmd_button(ui, label, "primary", vm.can_submit))
                .clicked()
            {
                kernel.dispatch(AppCommand::Submit);
            }
        });

        if let Some(err) = &vm.submit_error {
            tui.colored_label(COL_ERROR, format!("Submission failed: {err}"));
        }
    });
}
