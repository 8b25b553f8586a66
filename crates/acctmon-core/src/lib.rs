pub mod emitter;
pub mod store;
pub mod view_model;

pub use emitter::{Emitter, SubscriptionId};
pub use store::{StatusSnapshot, StatusStore};
pub use view_model::{
    NO_TOKEN_LABEL, SETUP_NOT_STARTED_LABEL, StatusViewModel, apply_auth, apply_connectivity,
    apply_service,
};
