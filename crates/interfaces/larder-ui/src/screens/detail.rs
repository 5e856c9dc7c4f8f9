use crate::theme::{COL_SUCCESS, COL_TEXT, COL_TEXT_DIM};
use crate::utils::{cmd_button, section_label};
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use larder_api::RecipeBackend;
use larder_app_core::viewmodel::recipe_detail_vm;
use larder_app_core::{AppCommand, AppKernel};

pub fn draw<'a, B: RecipeBackend>(tui: impl TuiBuilderLogic<'a>, kernel: &mut AppKernel<B>) {
    let Some(vm) = recipe_detail_vm(&kernel.store.state()) else {
        tui.colored_label(COL_TEXT_DIM, "RECIPE NOT FOUND");
        return;
    };

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
        tui.colored_label(COL_SUCCESS, "RECIPE CREATED");
        tui.ui(|ui| {
            ui.label(
                egui::RichText::new(format!("{}  (recipes/{})", vm.name, vm.id))
                    .size(14.0)
                    .color(COL_TEXT)
                    .strong(),
            );
        });

        tui.ui(|ui| section_label(ui, "INGREDIENTS"));
        if vm.ingredients.is_empty() {
            tui.colored_label(COL_TEXT_DIM, "No ingredients");
        }
        for row in &vm.ingredients {
            tui.label(format!("{}  {}", row.quantity_label, row.name));
        }

        tui.ui(|ui| section_label(ui, "INSTRUCTIONS"));
        if vm.instructions.is_empty() {
            tui.colored_label(COL_TEXT_DIM, "No instructions");
        } else {
            tui.label(vm.instructions.clone());
        }

        if tui
            .ui(|ui| cmd_button(ui, "NEW RECIPE", "outline", true))
            .clicked()
        {
            kernel.dispatch(AppCommand::StartNewRecipe);
        }
    });
}
