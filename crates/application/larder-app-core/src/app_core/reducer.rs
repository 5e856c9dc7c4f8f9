use crate::domain::{AppState, FieldsTouched, RecipeForm, Route, SubmissionState};
use crate::editor::merge_outcome;

use super::events::DomainEvent;

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::RouteChanged(r) => state.route = r,

        DomainEvent::FormReset => {
            state.form = RecipeForm::default();
            state.dialog = None;
            state.submission = SubmissionState::Idle;
            state.created = None;
            state.route = Route::RecipeForm;
        }

        DomainEvent::DialogOpened(d) => state.dialog = Some(d),

        DomainEvent::DialogClosed(outcome) => {
            merge_outcome(&mut state.form.ingredients, outcome);
            state.dialog = None;
        }

        DomainEvent::AllFieldsTouched => state.form.touched = FieldsTouched::all(),

        DomainEvent::SubmitStarted => state.submission = SubmissionState::InFlight,

        DomainEvent::SubmitSucceeded { recipe } => {
            state.submission = SubmissionState::Idle;
            if let Some(id) = recipe.id.clone() {
                state.route = Route::RecipeDetail(id);
            }
            state.created = Some(recipe);
        }

        DomainEvent::SubmitFailed { message } => {
            state.submission = SubmissionState::Failed(message);
        }
    }
    state
}
