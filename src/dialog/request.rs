//! Request API
//!
//! Turns "ask the user something" into a future. The request is published
//! to the store when the function is called, not when the future is first
//! polled, so the presenter sees it on the next redraw even if the caller
//! awaits later.
//!
//! If no presenter is mounted the future never resolves.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use super::store::{Completion, DialogKind, DialogRequest, DialogResponse, DialogStore};

/// Raw answer to a published request
///
/// Resolves as [`DialogResponse::Cancelled`] if the request is replaced
/// before anyone answers it.
#[must_use = "a dialog request does nothing unless awaited"]
pub struct PendingDialog {
    rx: oneshot::Receiver<DialogResponse>,
}

impl Future for PendingDialog {
    type Output = DialogResponse;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(response)) => Poll::Ready(response),
            Poll::Ready(Err(_)) => {
                tracing::warn!("dialog superseded before it was answered");
                Poll::Ready(DialogResponse::Cancelled)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Future returned by [`DialogStore::request_confirmation`]
#[must_use = "a dialog request does nothing unless awaited"]
pub struct PendingConfirmation(PendingDialog);

impl Future for PendingConfirmation {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        Pin::new(&mut self.0).poll(cx).map(|_| ())
    }
}

/// Future returned by [`DialogStore::request_input`]
#[must_use = "a dialog request does nothing unless awaited"]
pub struct PendingInput(PendingDialog);

impl Future for PendingInput {
    type Output = Option<String>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<String>> {
        Pin::new(&mut self.0).poll(cx).map(|response| match response {
            DialogResponse::Text(text) => Some(text),
            DialogResponse::Acknowledged | DialogResponse::Cancelled => None,
        })
    }
}

impl DialogStore {
    /// Show an OK-only message and resolve once it is acknowledged
    pub fn request_confirmation(&self, message: impl Into<String>) -> PendingConfirmation {
        PendingConfirmation(self.publish(DialogKind::Confirmation, message.into(), None))
    }

    /// Ask for a line of text; `None` means the user cancelled
    pub fn request_input(
        &self,
        message: impl Into<String>,
        default_value: impl Into<String>,
    ) -> PendingInput {
        PendingInput(self.publish(
            DialogKind::Input,
            message.into(),
            Some(default_value.into()),
        ))
    }

    /// Publish a request and hand back its answer
    pub fn publish(
        &self,
        kind: DialogKind,
        message: String,
        default_value: Option<String>,
    ) -> PendingDialog {
        if self.current().is_pending() {
            tracing::warn!("dialog requested while another is pending; replacing it");
        }
        tracing::debug!(?kind, %message, "dialog requested");

        let (complete, rx) = Completion::channel();
        self.set(DialogRequest {
            visible: true,
            kind,
            message,
            default_value,
            complete: Some(complete),
        });

        PendingDialog { rx }
    }
}

/// [`DialogStore::request_confirmation`] on the global store
pub fn request_confirmation(message: impl Into<String>) -> PendingConfirmation {
    DialogStore::global().request_confirmation(message)
}

/// [`DialogStore::request_input`] on the global store
pub fn request_input(
    message: impl Into<String>,
    default_value: impl Into<String>,
) -> PendingInput {
    DialogStore::global().request_input(message, default_value)
}
