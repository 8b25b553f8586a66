//! In-memory reference implementation of the collaborator seams.
//!
//! This stands in for the enterprise service in the CLI demo and in tests.
//! It drives a [`StatusStore`] through plausible provisioning transitions
//! but implements no real token exchange or protocol.

use crate::controller::{AuthController, EndpointManager};
use acctmon_core::StatusStore;
use acctmon_providers::{Result as ProviderResult, TokenManager};
use acctmon_types::{Account, AuthState, RegId, ServiceState, SetupState, TokenState};
use std::cell::Cell;

pub struct LocalTokenManager {
    store: StatusStore,
    account: Account,
}

impl TokenManager for LocalTokenManager {
    fn sign_in(&self) -> ProviderResult<()> {
        // Token issued, service comes up, provisioning begins.
        self.store.set_service_state(ServiceState::started());
        self.store.set_auth_state(AuthState {
            token_state: Some(TokenState::Ok),
            setup_state: Some(SetupState::Ongoing),
            reg_id: None,
            account: Some(self.account.clone()),
        });
        Ok(())
    }
}

#[derive(Default)]
pub struct LocalEndpointManager {
    deregister_calls: Cell<u32>,
}

impl EndpointManager for LocalEndpointManager {
    fn deregister_any_endpoint_and_continue_setup(&self) {
        self.deregister_calls.set(self.deregister_calls.get() + 1);
    }
}

pub struct LocalAuthController {
    store: StatusStore,
    tokens: LocalTokenManager,
    endpoints: LocalEndpointManager,
    silent_sign_ins: Cell<u32>,
}

impl LocalAuthController {
    pub fn new(account: Account) -> Self {
        let store = StatusStore::new();
        Self {
            tokens: LocalTokenManager {
                store: store.clone(),
                account,
            },
            endpoints: LocalEndpointManager::default(),
            store,
            silent_sign_ins: Cell::new(0),
        }
    }

    /// Service-side completion of provisioning: assigns the registration id
    /// and moves setup to fully-provisioned.
    pub fn finish_provisioning(&self, reg_id: RegId) {
        let mut auth = self.store.snapshot().auth;
        auth.setup_state = Some(SetupState::Full);
        auth.reg_id = Some(reg_id);
        self.store.set_auth_state(auth);
    }

    /// Service-side signal that another endpoint holds the registration and
    /// a device switch is required to continue here.
    pub fn begin_device_switch(&self) {
        let mut auth = self.store.snapshot().auth;
        auth.setup_state = Some(SetupState::DeviceSwitchRequired);
        self.store.set_auth_state(auth);
    }

    pub fn deregister_call_count(&self) -> u32 {
        self.endpoints.deregister_calls.get()
    }

    pub fn silent_sign_in_count(&self) -> u32 {
        self.silent_sign_ins.get()
    }
}

impl AuthController for LocalAuthController {
    fn status_store(&self) -> StatusStore {
        self.store.clone()
    }

    fn sign_in_silently(&self) {
        // No persisted session to resume; the attempt is recorded so tests
        // can assert the screen issued it.
        self.silent_sign_ins.set(self.silent_sign_ins.get() + 1);
    }

    fn sign_out(&self) {
        self.store.set_auth_state(AuthState::default());
    }

    fn request_setup_retry(&self) {
        let auth = self.store.snapshot().auth;
        if auth.setup_state == Some(SetupState::DeviceSwitchRequired) {
            let mut retried = auth.clone();
            retried.setup_state = Some(SetupState::Ongoing);
            self.store.set_auth_state(retried);

            let mut done = auth;
            done.setup_state = Some(SetupState::Full);
            self.store.set_auth_state(done);
        }
    }

    fn reset_service(&self) {
        self.store.set_service_state(ServiceState::stopped());
    }

    fn token_manager(&self) -> &dyn TokenManager {
        &self.tokens
    }

    fn endpoint_manager(&self) -> &dyn EndpointManager {
        &self.endpoints
    }
}
