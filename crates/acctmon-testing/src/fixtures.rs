//! Auth-state fixtures for unit and integration tests.

use acctmon_types::{Account, AuthState, RegId, SetupState, TokenState};

/// Fluent builder over [`AuthState`] for test scenarios.
#[derive(Default)]
pub struct AuthStateBuilder {
    state: AuthState,
}

impl AuthStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(mut self, token: TokenState) -> Self {
        self.state.token_state = Some(token);
        self
    }

    pub fn setup(mut self, setup: SetupState) -> Self {
        self.state.setup_state = Some(setup);
        self
    }

    pub fn reg_id(mut self, reg_id: u64) -> Self {
        self.state.reg_id = Some(RegId(reg_id));
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.state.account = Some(Account::new(email));
        self
    }

    pub fn build(self) -> AuthState {
        self.state
    }
}

/// A fully provisioned, signed-in endpoint.
pub fn provisioned_state() -> AuthState {
    AuthStateBuilder::new()
        .token(TokenState::Ok)
        .setup(SetupState::Full)
        .reg_id(42)
        .email("a@b.com")
        .build()
}

/// An endpoint waiting on a device switch.
pub fn device_switch_state() -> AuthState {
    AuthStateBuilder::new()
        .token(TokenState::Ok)
        .setup(SetupState::DeviceSwitchRequired)
        .email("a@b.com")
        .build()
}
