use larder_core::{Ingredient, IngredientKey, Quantity, RecipeId};
use uuid::Uuid;

use crate::editor::EditorOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    RecipeForm,
    RecipeDetail(RecipeId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    InFlight,
    Failed(String),
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::InFlight)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldsTouched {
    pub name: bool,
    pub instructions: bool,
}

impl FieldsTouched {
    pub fn all() -> Self {
        Self {
            name: true,
            instructions: true,
        }
    }
}

/// The recipe being composed. Errors only surface for touched fields, so a
/// fresh form does not open covered in red.
#[derive(Debug, Clone)]
pub struct RecipeForm {
    pub name: String,
    pub instructions: String,
    pub ingredients: Vec<Ingredient>,
    pub touched: FieldsTouched,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            instructions: String::new(),
            // Pre-seeded placeholder row.
            ingredients: vec![Ingredient::new("Meat", 2.0, "mg")],
            touched: FieldsTouched::default(),
        }
    }
}

/// Working copy of the ingredient editor dialog. The quantity value is kept
/// as raw text so the user can type through invalid intermediate states.
#[derive(Debug, Clone)]
pub struct DialogState {
    pub existing: Option<IngredientKey>,
    pub name: String,
    pub value_text: String,
    pub unit: String,
}

impl DialogState {
    pub fn create() -> Self {
        Self {
            existing: None,
            name: String::new(),
            value_text: String::new(),
            unit: String::new(),
        }
    }

    pub fn edit(ingredient: &Ingredient) -> Self {
        Self {
            existing: Some(ingredient.key),
            name: ingredient.name.clone(),
            value_text: format_value(ingredient.quantity.value),
            unit: ingredient.quantity.unit.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.existing.is_some()
    }

    pub fn parsed_value(&self) -> Option<f64> {
        self.value_text.trim().parse().ok().filter(|v: &f64| v.is_finite())
    }

    /// Outcome for the SAVE action, when the dialog fields form a valid
    /// ingredient. Editing reuses the existing key so the merge replaces in
    /// place instead of appending a duplicate.
    pub fn upsert_outcome(&self) -> Option<EditorOutcome> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        let value = self.parsed_value()?;

        Some(EditorOutcome::Upsert(Ingredient {
            key: self.existing.unwrap_or_else(Uuid::new_v4),
            name: name.to_string(),
            quantity: Quantity {
                value,
                unit: self.unit.trim().to_string(),
            },
        }))
    }

    /// Outcome for the DELETE action. Only offered while editing an existing
    /// ingredient.
    pub fn delete_outcome(&self) -> Option<EditorOutcome> {
        self.existing.map(EditorOutcome::Delete)
    }
}

pub(crate) fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub route: Route,
    pub form: RecipeForm,
    pub dialog: Option<DialogState>,
    pub submission: SubmissionState,

    /// Server copy of the last created recipe, shown on the detail screen.
    pub created: Option<larder_core::Recipe>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            route: Route::RecipeForm,
            form: RecipeForm::default(),
            dialog: None,
            submission: SubmissionState::Idle,
            created: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_starts_with_the_placeholder_ingredient() {
        let form = RecipeForm::default();
        assert_eq!(form.ingredients.len(), 1);
        assert_eq!(form.ingredients[0].name, "Meat");
        assert_eq!(form.ingredients[0].quantity.unit, "mg");
    }

    #[test]
    fn upsert_outcome_requires_name_and_numeric_value() {
        let mut dialog = DialogState::create();
        assert!(dialog.upsert_outcome().is_none());

        dialog.name = "Salt".into();
        dialog.value_text = "two".into();
        assert!(dialog.upsert_outcome().is_none());

        dialog.value_text = "2".into();
        dialog.unit = "g".into();
        match dialog.upsert_outcome() {
            Some(EditorOutcome::Upsert(i)) => {
                assert_eq!(i.name, "Salt");
                assert_eq!(i.quantity.value, 2.0);
                assert_eq!(i.quantity.unit, "g");
            }
            other => panic!("expected Upsert, got {other:?}"),
        }
    }

    #[test]
    fn editing_keeps_the_original_key() {
        let ingredient = Ingredient::new("Meat", 2.0, "mg");
        let dialog = DialogState::edit(&ingredient);
        match dialog.upsert_outcome() {
            Some(EditorOutcome::Upsert(i)) => assert_eq!(i.key, ingredient.key),
            other => panic!("expected Upsert, got {other:?}"),
        }
    }

    #[test]
    fn delete_outcome_is_absent_for_a_new_ingredient() {
        assert!(DialogState::create().delete_outcome().is_none());
    }
}
