//! Confirmation-gated command dispatch.
//!
//! Bulk library actions (mark read, delete, convert, ...) are destructive
//! enough to require user confirmation. [`CommandDispatcher`] runs each
//! request through an injected [`Confirmer`] and, only on a positive answer,
//! emits a [`LibraryIntent`] on its outbound signal. A declined request
//! vanishes silently.
//!
//! The confirmer may answer synchronously or suspend (a modal dialog,
//! typically) and answer later. While an answer is outstanding the
//! dispatcher is busy and further requests are rejected with
//! [`DispatchError::ConfirmationPending`].

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use longbox_core::Signal;

use crate::comic::{ArchiveType, ComicBookId};

/// An outbound command naming the action and the resolved targets.
///
/// Intents are plain data. They carry everything the transport layer needs
/// to build the server request; the dispatcher never interprets them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum LibraryIntent {
    /// Set the read flag on the targeted comics.
    #[serde(rename_all = "camelCase")]
    MarkRead { ids: Vec<ComicBookId>, read: bool },
    /// Set the deleted state on the targeted comics.
    #[serde(rename_all = "camelCase")]
    MarkDeleted { ids: Vec<ComicBookId>, deleted: bool },
    /// Convert the targeted comics to another archive format.
    #[serde(rename_all = "camelCase")]
    ConvertComics {
        ids: Vec<ComicBookId>,
        archive_type: ArchiveType,
        rename_pages: bool,
        delete_pages: bool,
    },
    /// Add the targeted comics to a named reading list.
    #[serde(rename_all = "camelCase")]
    AddToReadingList { ids: Vec<ComicBookId>, list_name: String },
    /// Refresh metadata for the targeted comics.
    #[serde(rename_all = "camelCase")]
    UpdateMetadata { ids: Vec<ComicBookId> },
    /// Permanently remove the targeted comics from the library.
    #[serde(rename_all = "camelCase")]
    PurgeLibrary { ids: Vec<ComicBookId> },
}

/// Title and message shown to the user before a destructive action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmationPrompt {
    pub title: String,
    pub message: String,
}

impl ConfirmationPrompt {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// The user's answer to a confirmation prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    Declined,
}

/// Injected confirmation capability.
///
/// Implementations may call `respond` before returning (a test double, a
/// policy that auto-approves) or hold on to it and call it later (a dialog
/// waiting on the user). `respond` must be called exactly once.
pub trait Confirmer: Send + Sync {
    fn confirm(&self, prompt: ConfirmationPrompt, respond: Box<dyn FnOnce(ConfirmOutcome) + Send>);
}

/// Errors surfaced by [`CommandDispatcher::dispatch`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// A previous request is still waiting on its confirmation.
    #[error("a confirmation is already pending")]
    ConfirmationPending,
}

/// Runs intents through confirmation and emits the approved ones.
///
/// Each request moves through `Idle -> AwaitingConfirmation ->
/// {Dispatched | Cancelled}`; both end states are terminal and leave the
/// dispatcher idle again. There is no retry and no queueing: while a
/// confirmation is outstanding, [`dispatch`](Self::dispatch) returns
/// [`DispatchError::ConfirmationPending`] and callers are expected to have
/// disabled the triggering control anyway.
pub struct CommandDispatcher {
    confirmer: Arc<dyn Confirmer>,
    pending: Arc<Mutex<bool>>,
    intents: Arc<Signal<LibraryIntent>>,
}

impl CommandDispatcher {
    pub fn new(confirmer: Arc<dyn Confirmer>) -> Self {
        Self {
            confirmer,
            pending: Arc::new(Mutex::new(false)),
            intents: Arc::new(Signal::new()),
        }
    }

    /// The outbound intent signal. Exactly one emission per confirmed
    /// dispatch; nothing for declined ones.
    pub fn intents(&self) -> &Signal<LibraryIntent> {
        &self.intents
    }

    /// Whether a confirmation is currently outstanding.
    pub fn is_busy(&self) -> bool {
        *self.pending.lock()
    }

    /// Asks the confirmer about `intent` and emits it if approved.
    ///
    /// Returns [`DispatchError::ConfirmationPending`] if another request is
    /// still awaiting its answer. A successful return means the request was
    /// handed to the confirmer, not that it was approved.
    pub fn dispatch(
        &self,
        prompt: ConfirmationPrompt,
        intent: LibraryIntent,
    ) -> Result<(), DispatchError> {
        {
            let mut pending = self.pending.lock();
            if *pending {
                tracing::trace!(
                    target: "longbox::dispatch",
                    "dispatch rejected, confirmation pending"
                );
                return Err(DispatchError::ConfirmationPending);
            }
            *pending = true;
        }

        tracing::trace!(target: "longbox::dispatch", title = %prompt.title, "requesting confirmation");

        let pending = Arc::clone(&self.pending);
        let intents = Arc::clone(&self.intents);
        self.confirmer.confirm(
            prompt,
            Box::new(move |outcome| {
                *pending.lock() = false;
                match outcome {
                    ConfirmOutcome::Confirmed => {
                        tracing::trace!(target: "longbox::dispatch", "confirmed, emitting intent");
                        intents.emit(intent);
                    }
                    ConfirmOutcome::Declined => {
                        tracing::trace!(target: "longbox::dispatch", "declined, dropping intent");
                    }
                }
            }),
        );

        Ok(())
    }
}
