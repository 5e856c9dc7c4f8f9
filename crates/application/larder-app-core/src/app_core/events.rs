use larder_core::Recipe;

use crate::domain::{DialogState, Route};
use crate::editor::EditorOutcome;

#[derive(Debug, Clone)]
pub enum DomainEvent {
    // Navigation
    RouteChanged(Route),
    FormReset,

    // Ingredient dialog lifecycle
    DialogOpened(DialogState),
    DialogClosed(EditorOutcome),

    // Submission
    AllFieldsTouched,
    SubmitStarted,
    SubmitSucceeded { recipe: Recipe },
    SubmitFailed { message: String },
}
