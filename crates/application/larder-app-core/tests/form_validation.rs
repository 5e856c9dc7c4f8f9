use larder_app_core::app_core::{AppStore, DomainEvent};
use larder_app_core::domain::AppState;
use larder_app_core::viewmodel::recipe_form_vm;

#[test]
fn field_errors_stay_hidden_until_fields_are_touched() {
    let state = AppState::default();
    let vm = recipe_form_vm(&state);
    assert!(vm.name_error.is_none());
    assert!(vm.instructions_error.is_none());
}

#[test]
fn touched_empty_name_shows_the_required_message() {
    let store = AppStore::new(AppState::default());
    store.with_form_mut(|form| form.touched.name = true);

    let vm = recipe_form_vm(&store.state());
    assert_eq!(vm.name_error.as_deref(), Some("Name is required"));
}

#[test]
fn touched_dirty_instructions_show_the_shared_whitelist_message() {
    let store = AppStore::new(AppState::default());
    store.with_form_mut(|form| {
        form.instructions = "Mix 50% of it".into();
        form.touched.instructions = true;
    });

    let vm = recipe_form_vm(&store.state());
    assert_eq!(
        vm.instructions_error,
        Some(larder_core::invalid_characters_message())
    );
}

#[test]
fn submit_locks_while_a_create_is_in_flight() {
    let store = AppStore::new(AppState::default());
    store.apply(DomainEvent::SubmitStarted);

    let vm = recipe_form_vm(&store.state());
    assert!(vm.is_submitting);
    assert!(!vm.can_submit);
}

#[test]
fn failed_submission_is_user_visible() {
    let store = AppStore::new(AppState::default());
    store.apply(DomainEvent::SubmitFailed {
        message: "server returned 500".into(),
    });

    let vm = recipe_form_vm(&store.state());
    assert_eq!(vm.submit_error.as_deref(), Some("server returned 500"));
    assert!(vm.can_submit, "failure re-enables submission");
}
