use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::app_core::{AppCommand, AppStore, DomainEvent};
use crate::domain::DialogState;
use crate::viewmodel::{instructions_error, name_error};

use larder_api::RecipeBackend;
use larder_core::Recipe;

/// Form controller. Owns the state store and the backend port; drives the
/// submit workflow on a worker thread and feeds results back through an
/// event channel drained by `tick()` from the UI loop.
pub struct AppKernel<B> {
    pub store: AppStore,
    backend: Arc<B>,

    tx: mpsc::Sender<DomainEvent>,
    rx: mpsc::Receiver<DomainEvent>,
}

impl<B: RecipeBackend> AppKernel<B> {
    pub fn new(store: AppStore, backend: B) -> Self {
        let (tx, rx) = mpsc::channel(100);
        Self {
            store,
            backend: Arc::new(backend),
            tx,
            rx,
        }
    }

    pub fn dispatch(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::Navigate(r) => self.store.apply(DomainEvent::RouteChanged(r)),

            AppCommand::StartNewRecipe => self.store.apply(DomainEvent::FormReset),

            AppCommand::OpenCreateDialog => self
                .store
                .apply(DomainEvent::DialogOpened(DialogState::create())),

            AppCommand::OpenEditDialog(key) => {
                if let Some(ingredient) = self
                    .store
                    .state()
                    .form
                    .ingredients
                    .iter()
                    .find(|i| i.key == key)
                {
                    self.store
                        .apply(DomainEvent::DialogOpened(DialogState::edit(ingredient)));
                }
            }

            AppCommand::CloseDialog(outcome) => {
                self.store.apply(DomainEvent::DialogClosed(outcome))
            }

            AppCommand::Submit => self.submit(),
        }
    }

    fn submit(&mut self) {
        let state = self.store.state();

        // One create at a time.
        if state.submission.is_in_flight() {
            return;
        }

        let form = &state.form;
        if name_error(&form.name).is_some() || instructions_error(&form.instructions).is_some() {
            // Surface inline errors on every field; no network call.
            self.store.apply(DomainEvent::AllFieldsTouched);
            return;
        }

        let draft = Recipe::draft(
            form.name.clone(),
            form.instructions.clone(),
            form.ingredients.clone(),
        );
        info!(
            "submitting recipe '{}' with {} ingredients",
            draft.name,
            draft.ingredients.len()
        );
        self.store.apply(DomainEvent::SubmitStarted);

        let backend = self.backend.clone();
        let tx = self.tx.clone();
        let spawn_res = std::thread::Builder::new()
            .name("larder-create-recipe".into())
            .spawn(move || {
                let res: anyhow::Result<Recipe> = (|| {
                    let created =
                        crate::async_runtime::runtime()?.block_on(backend.create_recipe(&draft))?;
                    Ok(created)
                })();

                match res {
                    Ok(recipe) => {
                        let _ = tx.blocking_send(DomainEvent::SubmitSucceeded { recipe });
                    }
                    Err(e) => {
                        warn!("recipe creation failed: {e}");
                        let _ = tx.blocking_send(DomainEvent::SubmitFailed {
                            message: e.to_string(),
                        });
                    }
                }
            });

        if let Err(e) = spawn_res {
            self.store.apply(DomainEvent::SubmitFailed {
                message: format!("Failed to start submit worker thread: {e}"),
            });
        }
    }

    /// Call this from the UI loop every frame to process async messages.
    pub fn tick(&mut self) {
        while let Ok(ev) = self.rx.try_recv() {
            self.store.apply(ev);
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.store.state().submission.is_in_flight()
    }

    pub fn sender(&self) -> mpsc::Sender<DomainEvent> {
        self.tx.clone()
    }
}
