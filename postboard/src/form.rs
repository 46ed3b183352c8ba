//! Draft form state: a mutable draft post, per-field validation messages,
//! and a fire-and-forget submit.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Serialize;

/// The in-progress, unsaved form values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

impl Default for PostDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            user_id: 1,
        }
    }
}

/// Field-level validation messages, one list per known field.
///
/// An empty list means the field is valid. No cross-field validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Vec<String>,
    pub body: Vec<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.body.is_empty()
    }

    fn clear(&mut self) {
        self.title.clear();
        self.body.clear();
    }
}

/// The boxed future a submit action returns.
pub type SubmitFuture = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send>>;

/// The creation side effect run by [`PostForm::submit`].
pub type SubmitAction = Arc<dyn Fn(PostDraft) -> SubmitFuture + Send + Sync>;

/// Wraps an async closure as a [`SubmitAction`].
pub fn submit_action<F, Fut>(f: F) -> SubmitAction
where
    F: Fn(PostDraft) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    Arc::new(move |draft| Box::pin(f(draft)))
}

/// A per-field validation rule; returns a message for an invalid value.
pub type FieldValidator = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Rejects blank values.
pub fn required(field: &'static str) -> FieldValidator {
    Arc::new(move |value: &str| {
        value
            .trim()
            .is_empty()
            .then(|| format!("{field} is required"))
    })
}

/// Holds the draft record and drives the submit side effect.
///
/// The form owns its draft exclusively; nothing else mutates it.
pub struct PostForm {
    draft: PostDraft,
    errors: FieldErrors,
    title_validators: Vec<FieldValidator>,
    body_validators: Vec<FieldValidator>,
    action: SubmitAction,
}

impl PostForm {
    /// A form with no validators and the demo's simulated creation action.
    pub fn new() -> Self {
        Self::with_action(submit_action(|draft: PostDraft| async move {
            tracing::info!(target: "postboard", title = %draft.title, "post created (simulated)");
            Ok(())
        }))
    }

    pub fn with_action(action: SubmitAction) -> Self {
        Self {
            draft: PostDraft::default(),
            errors: FieldErrors::default(),
            title_validators: Vec::new(),
            body_validators: Vec::new(),
            action,
        }
    }

    pub fn with_title_validator(mut self, validator: FieldValidator) -> Self {
        self.title_validators.push(validator);
        self
    }

    pub fn with_body_validator(mut self, validator: FieldValidator) -> Self {
        self.body_validators.push(validator);
        self
    }

    pub fn values(&self) -> &PostDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.draft.title = value.into();
    }

    pub fn set_body(&mut self, value: impl Into<String>) {
        self.draft.body = value.into();
    }

    /// Re-runs every field validator against the current draft.
    /// Returns `true` when all fields are valid.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        for validator in &self.title_validators {
            if let Some(msg) = validator(&self.draft.title) {
                self.errors.title.push(msg);
            }
        }
        for validator in &self.body_validators {
            if let Some(msg) = validator(&self.draft.body) {
                self.errors.body.push(msg);
            }
        }
        self.errors.is_empty()
    }

    /// Fire-and-forget submit.
    ///
    /// An invalid draft records its field errors and does not dispatch. A
    /// valid draft is handed to the submit action on a detached task: any
    /// failure inside the action is caught and logged, never surfaced to the
    /// caller. The draft resets to its defaults once dispatched.
    ///
    /// Must be called within a tokio runtime context.
    pub fn submit(&mut self) {
        if !self.validate() {
            tracing::debug!(target: "postboard", errors = ?self.errors, "submit blocked by validation");
            return;
        }

        let draft = std::mem::take(&mut self.draft);
        let action = Arc::clone(&self.action);
        tokio::spawn(async move {
            if let Err(err) = action(draft).await {
                tracing::error!(target: "postboard", error = %err, "submit failed");
            }
        });
    }
}

impl Default for PostForm {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PostForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostForm")
            .field("draft", &self.draft)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}
