pub mod app_core;
mod async_runtime;
pub mod domain;
pub mod editor;
pub mod kernel;
pub mod viewmodel;

pub use app_core::*;
pub use domain::{AppState, DialogState, FieldsTouched, RecipeForm, Route, SubmissionState};
pub use editor::{merge_outcome, EditorOutcome};
pub use kernel::AppKernel;
pub use viewmodel::*;
