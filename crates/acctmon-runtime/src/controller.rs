//! Interfaces of the external enterprise-service collaborators.
//!
//! Everything behind these traits is owned by the closed-source service:
//! token refresh, provisioning, endpoint management. This layer only
//! observes their state and forwards user actions.

use acctmon_core::StatusStore;
use acctmon_providers::TokenManager;
use acctmon_types::{AuthState, ServiceState};

/// Endpoint management surface of the service, used for the device-switch
/// continuation after a fresh provisioning completes.
pub trait EndpointManager {
    fn deregister_any_endpoint_and_continue_setup(&self);
}

/// The external authentication controller.
///
/// It publishes service and auth state through its [`StatusStore`]; the
/// accessor defaults read the latest snapshot from there.
pub trait AuthController {
    /// Shared handle to the store this controller publishes through.
    fn status_store(&self) -> StatusStore;

    fn service_state(&self) -> ServiceState {
        self.status_store().snapshot().service
    }

    fn auth_state(&self) -> AuthState {
        self.status_store().snapshot().auth
    }

    /// Combined predicate owned by the controller: the service is running
    /// and the current token is valid.
    fn started_and_authenticated(&self) -> bool {
        let snapshot = self.status_store().snapshot();
        snapshot.service.started && snapshot.auth.is_authenticated()
    }

    /// Attempt to resume a previously persisted session without user
    /// interaction. Fire-and-forget.
    fn sign_in_silently(&self);

    fn sign_out(&self);

    /// Ask the service to retry provisioning (the device-switch action).
    fn request_setup_retry(&self);

    /// Tear down the service session ahead of a sign-out.
    fn reset_service(&self);

    fn token_manager(&self) -> &dyn TokenManager;

    fn endpoint_manager(&self) -> &dyn EndpointManager;
}
