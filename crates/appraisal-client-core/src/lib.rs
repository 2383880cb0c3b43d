//! Stores functionality that should be shared between different clients: the
//! persisted session, the request gateway every backend call goes through and
//! the route guard that gates navigation by role.
//! NB: The assumption is made that the async runtime has already been started
//! before any functions from this library are called

#![warn(unused_crate_dependencies)]


mod client;
mod navigation;
pub mod routing;
mod session_store;

pub use client::{
    api::{
        admin::{contact_requests::ContactRequestId, users::UserId},
        evaluation::{DocumentId, EvaluationRequestId},
    },
    classify_status,
    download::Download,
    Client, FailureClass, UiCallBack,
};
pub use navigation::Navigator;
#[cfg(target_arch = "wasm32")]
pub use navigation::WebNavigator;
pub use session_store::{MemoryStorage, SessionStore, StorageBackend, StorageScope};
#[cfg(not(target_arch = "wasm32"))]
pub use session_store::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use session_store::WebStorage;
