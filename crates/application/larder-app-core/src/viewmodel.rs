use larder_core::{field_is_clean, invalid_characters_message, Ingredient, IngredientKey};

use crate::domain::{format_value, AppState, DialogState, SubmissionState};

pub fn name_error(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some("Name is required".into())
    } else if !field_is_clean(value) {
        Some(invalid_characters_message())
    } else {
        None
    }
}

pub fn instructions_error(value: &str) -> Option<String> {
    if !field_is_clean(value) {
        Some(invalid_characters_message())
    } else {
        None
    }
}

#[derive(Debug, Clone)]
pub struct IngredientRowVm {
    pub key: IngredientKey,
    pub name: String,
    pub quantity_label: String,
}

impl From<&Ingredient> for IngredientRowVm {
    fn from(i: &Ingredient) -> Self {
        let value = format_value(i.quantity.value);
        Self {
            key: i.key,
            name: i.name.clone(),
            quantity_label: if i.quantity.unit.is_empty() {
                value
            } else {
                format!("{value} {}", i.quantity.unit)
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecipeFormVm {
    pub name_error: Option<String>,
    pub instructions_error: Option<String>,
    pub ingredients: Vec<IngredientRowVm>,
    pub is_submitting: bool,
    pub submit_error: Option<String>,
    /// Submit stays enabled for an invalid form (pressing it surfaces the
    /// field errors); it only locks while a create is in flight.
    pub can_submit: bool,
}

pub fn recipe_form_vm(state: &AppState) -> RecipeFormVm {
    let form = &state.form;
    let is_submitting = state.submission.is_in_flight();

    RecipeFormVm {
        name_error: if form.touched.name {
            name_error(&form.name)
        } else {
            None
        },
        instructions_error: if form.touched.instructions {
            instructions_error(&form.instructions)
        } else {
            None
        },
        ingredients: form.ingredients.iter().map(IngredientRowVm::from).collect(),
        is_submitting,
        submit_error: match &state.submission {
            SubmissionState::Failed(msg) => Some(msg.clone()),
            _ => None,
        },
        can_submit: !is_submitting,
    }
}

#[derive(Debug, Clone)]
pub struct IngredientDialogVm {
    pub title: &'static str,
    pub is_edit: bool,
    pub name_error: Option<String>,
    pub value_error: Option<String>,
    pub can_save: bool,
}

pub fn ingredient_dialog_vm(dialog: &DialogState) -> IngredientDialogVm {
    let name_error = if dialog.name.trim().is_empty() {
        Some("Name is required".to_string())
    } else {
        None
    };
    let value_error = if dialog.parsed_value().is_none() {
        Some("Quantity must be a number".to_string())
    } else {
        None
    };

    IngredientDialogVm {
        title: if dialog.is_edit() {
            "EDIT INGREDIENT"
        } else {
            "ADD INGREDIENT"
        },
        is_edit: dialog.is_edit(),
        can_save: name_error.is_none() && value_error.is_none(),
        name_error,
        value_error,
    }
}

#[derive(Debug, Clone)]
pub struct RecipeDetailVm {
    pub id: String,
    pub name: String,
    pub instructions: String,
    pub ingredients: Vec<IngredientRowVm>,
}

pub fn recipe_detail_vm(state: &AppState) -> Option<RecipeDetailVm> {
    let recipe = state.created.as_ref()?;
    Some(RecipeDetailVm {
        id: recipe.id.clone()?,
        name: recipe.name.clone(),
        instructions: recipe.instructions.clone(),
        ingredients: recipe.ingredients.iter().map(IngredientRowVm::from).collect(),
    })
}
