//! Suspending prompt/confirm dialogs.
//!
//! The two operations here are the only suspension points in the core: a
//! mutation flow awaits the user's resolution while other UI events keep
//! flowing. [`QueuedDialogs`] implements the contract by queueing requests
//! for whatever widget layer hosts the actual dialog; the `oneshot` responder
//! guarantees exactly one resolution per invocation, with a dropped responder
//! counting as cancel.

use std::future::Future;
use std::pin::Pin;

use tokio::sync::{mpsc, oneshot};

/// Boxed async result used by [`DialogService`] trait methods.
pub type DialogFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Modal prompt/confirm capability used by workspace mutation flows.
#[cfg_attr(test, mockall::automock)]
pub trait DialogService: Send + Sync {
    /// Asks the user for a line of text.
    ///
    /// Resolves to the trimmed input, or `None` when the user cancels,
    /// escapes, or submits only whitespace.
    fn prompt(&self, message: String, default: String) -> DialogFuture<Option<String>>;

    /// Asks the user to accept or reject `message`.
    ///
    /// Resolves `true` on accept; cancel, escape, and outside-click all
    /// resolve `false`.
    fn confirm(&self, message: String) -> DialogFuture<bool>;
}

/// One queued dialog awaiting resolution by the hosting UI.
pub enum DialogRequest {
    /// A text prompt with a pre-filled default.
    Prompt {
        message: String,
        default: String,
        responder: oneshot::Sender<Option<String>>,
    },
    /// A yes/no confirmation.
    Confirm {
        message: String,
        responder: oneshot::Sender<bool>,
    },
}

impl DialogRequest {
    /// Resolves a prompt with the user's raw input, or `None` for cancel.
    ///
    /// Trims the input; whitespace-only submissions resolve as cancel, the
    /// same as pressing Escape. Confirm requests treat any `Some` as accept.
    pub fn resolve(self, answer: Option<&str>) {
        match self {
            DialogRequest::Prompt { responder, .. } => {
                let trimmed = answer
                    .map(str::trim)
                    .filter(|text| !text.is_empty())
                    .map(str::to_string);
                let _ = responder.send(trimmed);
            }
            DialogRequest::Confirm { responder, .. } => {
                let _ = responder.send(answer.is_some());
            }
        }
    }

    /// Returns the message shown to the user.
    pub fn message(&self) -> &str {
        match self {
            DialogRequest::Prompt { message, .. } | DialogRequest::Confirm { message, .. } => {
                message
            }
        }
    }
}

/// [`DialogService`] backed by an unbounded request queue.
pub struct QueuedDialogs {
    tx: mpsc::UnboundedSender<DialogRequest>,
}

impl QueuedDialogs {
    /// Creates the service plus the receiver the hosting UI drains.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<DialogRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (Self { tx }, rx)
    }
}

impl DialogService for QueuedDialogs {
    fn prompt(&self, message: String, default: String) -> DialogFuture<Option<String>> {
        let (responder, resolution) = oneshot::channel();
        let queued = self
            .tx
            .send(DialogRequest::Prompt {
                message,
                default,
                responder,
            })
            .is_ok();

        Box::pin(async move {
            if !queued {
                return None;
            }

            // A dropped responder (host went away) resolves as cancel.
            resolution.await.unwrap_or(None)
        })
    }

    fn confirm(&self, message: String) -> DialogFuture<bool> {
        let (responder, resolution) = oneshot::channel();
        let queued = self
            .tx
            .send(DialogRequest::Confirm { message, responder })
            .is_ok();

        Box::pin(async move {
            if !queued {
                return false;
            }

            resolution.await.unwrap_or(false)
        })
    }
}
