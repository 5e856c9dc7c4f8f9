use larder_core::IngredientKey;

use crate::domain::Route;
use crate::editor::EditorOutcome;

#[derive(Debug, Clone)]
pub enum AppCommand {
    // Navigation
    Navigate(Route),
    StartNewRecipe,

    // Ingredient dialog lifecycle
    OpenCreateDialog,
    OpenEditDialog(IngredientKey),
    CloseDialog(EditorOutcome),

    // Submission
    Submit,
}
