//! Modal dialog coordination
//!
//! Any code running on the UI thread can ask the user something and await
//! the answer:
//!
//! ```rust,ignore
//! if let Some(name) = dialog::request_input("Category name", "").await {
//!     api.create_category(&NewCategory::new(name)).await?;
//! }
//! ```
//!
//! The request is published into a [`DialogStore`]; the one
//! [`DialogPresenter`] mounted at the application root draws it, and the
//! user's key press resolves the future and resets the store to hidden.
//! Only one request is shown at a time. Issuing a new one while another is
//! pending replaces it and the replaced request resolves as cancelled.

pub mod presenter;
pub mod request;
pub mod store;

pub use presenter::DialogPresenter;
pub use request::{
    request_confirmation, request_input, PendingConfirmation, PendingDialog, PendingInput,
};
pub use store::{Completion, DialogKind, DialogRequest, DialogResponse, DialogStore, Subscription};
