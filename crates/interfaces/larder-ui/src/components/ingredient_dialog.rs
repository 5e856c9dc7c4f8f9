use crate::theme::COL_ERROR;
use crate::utils::{cmd_button, section_label};
use eframe::egui;
use larder_api::RecipeBackend;
use larder_app_core::viewmodel::ingredient_dialog_vm;
use larder_app_core::{AppCommand, AppKernel, EditorOutcome};

/// Modal ingredient editor. Drawn over whatever screen is active; produces
/// an `EditorOutcome` dispatched back into the kernel when closed.
pub fn draw<B: RecipeBackend>(ctx: &egui::Context, kernel: &mut AppKernel<B>) {
    let Some(dialog) = kernel.store.state().dialog else {
        return;
    };
    let vm = ingredient_dialog_vm(&dialog);

    let mut outcome: Option<EditorOutcome> = None;
    let store = kernel.store.clone();

    egui::Window::new(vm.title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.set_width(320.0);

            store.with_dialog_mut(|d| {
                section_label(ui, "NAME");
                ui.add(
                    egui::TextEdit::singleline(&mut d.name)
                        .hint_text("Ingredient")
                        .desired_width(f32::INFINITY),
                );

                section_label(ui, "QUANTITY");
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut d.value_text)
                            .hint_text("2")
                            .desired_width(100.0),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut d.unit)
                            .hint_text("mg")
                            .desired_width(100.0),
                    );
                });
            });

            if let Some(err) = &vm.name_error {
                ui.colored_label(COL_ERROR, err.as_str());
            }
            if let Some(err) = &vm.value_error {
                ui.colored_label(COL_ERROR, err.as_str());
            }

            ui.separator();
            ui.horizontal(|ui| {
                if cmd_button(ui, "SAVE", "primary", vm.can_save).clicked() {
                    outcome = store.with_dialog_mut(|d| d.upsert_outcome()).flatten();
                }
                if vm.is_edit && cmd_button(ui, "DELETE", "danger", true).clicked() {
                    outcome = store.with_dialog_mut(|d| d.delete_outcome()).flatten();
                }
                if cmd_button(ui, "CANCEL", "outline", true).clicked() {
                    outcome = Some(EditorOutcome::Dismissed);
                }
            });
        });

    if let Some(outcome) = outcome {
        kernel.dispatch(AppCommand::CloseDialog(outcome));
    }
}
