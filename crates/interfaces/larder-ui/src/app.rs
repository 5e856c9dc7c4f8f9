use crate::components::ingredient_dialog;
use crate::screens::{detail, form};
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

use larder_api::RecipeBackend;
use larder_app_core::{AppKernel, Route};

pub struct LarderApp<B: RecipeBackend> {
    kernel: AppKernel<B>,
}

impl<B: RecipeBackend> LarderApp<B> {
    pub fn new(kernel: AppKernel<B>) -> Self {
        Self { kernel }
    }
}

impl<B: RecipeBackend> eframe::App for LarderApp<B> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.kernel.tick();

        ctx.style_mut(|style| {
            // Width-independent text measurement keeps egui_taffy's
            // multi-pass layout stable.
            style.wrap_mode = Some(egui::TextWrapMode::Extend);
        });

        let route = self.kernel.store.state().route;
        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    padding: length(12.0),
                    gap: length(8.0),
                    ..Default::default()
                })
                .show(|tui| match route {
                    Route::RecipeForm => form::draw(tui, &mut self.kernel),
                    Route::RecipeDetail(_) => detail::draw(tui, &mut self.kernel),
                });
        });

        ingredient_dialog::draw(ctx, &mut self.kernel);

        if self.kernel.is_submitting() {
            ctx.request_repaint();
        }
    }
}
