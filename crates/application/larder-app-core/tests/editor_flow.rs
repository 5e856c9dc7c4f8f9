use async_trait::async_trait;
use larder_api::{ApiError, RecipeBackend};
use larder_app_core::app_core::{AppCommand, AppStore};
use larder_app_core::domain::AppState;
use larder_app_core::editor::EditorOutcome;
use larder_app_core::kernel::AppKernel;
use larder_core::Recipe;

struct NullBackend;

#[async_trait]
impl RecipeBackend for NullBackend {
    async fn create_recipe(&self, _draft: &Recipe) -> Result<Recipe, ApiError> {
        Err(ApiError::MissingId)
    }
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        Ok(Vec::new())
    }
    async fn get_recipe(&self, _id: &String) -> Result<Recipe, ApiError> {
        Err(ApiError::MissingId)
    }
}

fn kernel() -> AppKernel<NullBackend> {
    AppKernel::new(AppStore::new(AppState::default()), NullBackend)
}

#[test]
fn create_dialog_save_appends_one_ingredient() {
    let mut kernel = kernel();
    kernel.dispatch(AppCommand::OpenCreateDialog);

    let outcome = kernel
        .store
        .with_dialog_mut(|d| {
            d.name = "Salt".into();
            d.value_text = "1.5".into();
            d.unit = "g".into();
            d.upsert_outcome()
        })
        .flatten()
        .expect("dialog fields should form a valid ingredient");
    kernel.dispatch(AppCommand::CloseDialog(outcome));

    let state = kernel.store.state();
    assert!(state.dialog.is_none());
    assert_eq!(state.form.ingredients.len(), 2);
    assert_eq!(state.form.ingredients[1].name, "Salt");
    assert_eq!(state.form.ingredients[1].quantity.value, 1.5);
}

#[test]
fn dismissing_the_dialog_leaves_the_list_unchanged() {
    let mut kernel = kernel();
    let before = kernel.store.state().form.ingredients.clone();

    kernel.dispatch(AppCommand::OpenCreateDialog);
    kernel.dispatch(AppCommand::CloseDialog(EditorOutcome::Dismissed));

    let state = kernel.store.state();
    assert!(state.dialog.is_none());
    assert_eq!(state.form.ingredients, before);
}

#[test]
fn edit_dialog_delete_removes_the_entry() {
    let mut kernel = kernel();
    let key = kernel.store.state().form.ingredients[0].key;

    kernel.dispatch(AppCommand::OpenEditDialog(key));
    let outcome = kernel
        .store
        .with_dialog_mut(|d| d.delete_outcome())
        .flatten()
        .expect("editing an existing ingredient offers delete");
    kernel.dispatch(AppCommand::CloseDialog(outcome));

    assert!(kernel.store.state().form.ingredients.is_empty());
}

#[test]
fn edit_dialog_save_replaces_in_place() {
    let mut kernel = kernel();
    let key = kernel.store.state().form.ingredients[0].key;

    kernel.dispatch(AppCommand::OpenEditDialog(key));
    let outcome = kernel
        .store
        .with_dialog_mut(|d| {
            d.name = "Beef".into();
            d.value_text = "3".into();
            d.unit = "kg".into();
            d.upsert_outcome()
        })
        .flatten()
        .unwrap();
    kernel.dispatch(AppCommand::CloseDialog(outcome));

    let ingredients = kernel.store.state().form.ingredients;
    assert_eq!(ingredients.len(), 1);
    assert_eq!(ingredients[0].key, key);
    assert_eq!(ingredients[0].name, "Beef");
    assert_eq!(ingredients[0].quantity.unit, "kg");
}

#[test]
fn edit_dialog_with_an_unknown_key_does_not_open() {
    let mut kernel = kernel();
    kernel.dispatch(AppCommand::OpenEditDialog(uuid::Uuid::new_v4()));
    assert!(kernel.store.state().dialog.is_none());
}
