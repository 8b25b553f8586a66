//! Pure projection of observed state into display fields.
//!
//! The view model is a side-effect-free function of the latest observed
//! values; the presenter recomputes it on every notification and never
//! writes to it from anywhere else.

use acctmon_types::{AuthState, ConnectivityState, ServiceState, SetupState};
use serde::Serialize;

/// Fallback label when no token has been issued.
pub const NO_TOKEN_LABEL: &str = "No Token";

/// Fallback label when provisioning has not begun.
pub const SETUP_NOT_STARTED_LABEL: &str = "Setup Not Started";

/// Display strings and action availability for the account status screen.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StatusViewModel {
    pub token_label: String,
    pub setup_label: String,
    pub reg_id_label: String,
    pub email_label: String,
    pub domain_label: String,
    pub service_label: String,
    pub connectivity_label: String,
    pub sign_in_visible: bool,
    pub sign_out_visible: bool,
    pub switch_device_enabled: bool,
}

/// Project the auth-state fields. `started_and_authenticated` is the
/// combined predicate owned by the external auth controller; the sign-in
/// and sign-out affordances are mutually exclusive on it.
pub fn apply_auth(
    view_model: &mut StatusViewModel,
    auth: &AuthState,
    started_and_authenticated: bool,
) {
    view_model.token_label = match auth.token_state {
        Some(token) => token.as_str().to_string(),
        None => NO_TOKEN_LABEL.to_string(),
    };
    view_model.setup_label = match auth.setup_state {
        Some(setup) => setup.as_str().to_string(),
        None => SETUP_NOT_STARTED_LABEL.to_string(),
    };
    view_model.reg_id_label = match auth.reg_id {
        Some(reg_id) => reg_id.to_string(),
        None => String::new(),
    };
    view_model.email_label = match &auth.account {
        Some(account) => account.email.clone(),
        None => String::new(),
    };
    view_model.sign_in_visible = !started_and_authenticated;
    view_model.sign_out_visible = started_and_authenticated;
    view_model.switch_device_enabled = auth.setup_state == Some(SetupState::DeviceSwitchRequired);
}

pub fn apply_service(view_model: &mut StatusViewModel, service: ServiceState) {
    view_model.service_label = if service.started {
        "Started".to_string()
    } else {
        "Stopped".to_string()
    };
}

pub fn apply_connectivity(view_model: &mut StatusViewModel, connectivity: ConnectivityState) {
    view_model.connectivity_label = if connectivity.connected {
        "Connected".to_string()
    } else {
        "Disconnected".to_string()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use acctmon_types::{Account, RegId, TokenState};

    #[test]
    fn absent_token_renders_fallback() {
        let mut vm = StatusViewModel::default();
        apply_auth(&mut vm, &AuthState::default(), false);
        assert_eq!(vm.token_label, "No Token");
    }

    #[test]
    fn present_token_renders_verbatim() {
        let mut vm = StatusViewModel::default();
        for token in [TokenState::Ok, TokenState::Invalid, TokenState::Expired] {
            let auth = AuthState {
                token_state: Some(token),
                ..Default::default()
            };
            apply_auth(&mut vm, &auth, false);
            assert_eq!(vm.token_label, token.as_str());
        }
    }

    #[test]
    fn absent_setup_renders_fallback() {
        let mut vm = StatusViewModel::default();
        apply_auth(&mut vm, &AuthState::default(), false);
        assert_eq!(vm.setup_label, "Setup Not Started");
    }

    #[test]
    fn switch_device_requires_exact_device_switch_state() {
        let mut vm = StatusViewModel::default();
        for setup in [
            SetupState::NotRequested,
            SetupState::Ongoing,
            SetupState::SyncRequired,
            SetupState::Full,
        ] {
            let auth = AuthState {
                setup_state: Some(setup),
                ..Default::default()
            };
            apply_auth(&mut vm, &auth, false);
            assert!(!vm.switch_device_enabled, "enabled for {}", setup);
        }

        let auth = AuthState {
            setup_state: Some(SetupState::DeviceSwitchRequired),
            ..Default::default()
        };
        apply_auth(&mut vm, &auth, false);
        assert!(vm.switch_device_enabled);
    }

    #[test]
    fn sign_in_and_sign_out_are_mutually_exclusive() {
        let mut vm = StatusViewModel::default();
        for predicate in [false, true] {
            apply_auth(&mut vm, &AuthState::default(), predicate);
            assert_ne!(vm.sign_in_visible, vm.sign_out_visible);
        }
    }

    #[test]
    fn fully_populated_scenario() {
        // AuthState{token: Ok, setup: device-switch-pending, regId: 42,
        // account: a@b.com}, started and authenticated.
        let auth = AuthState {
            token_state: Some(TokenState::Ok),
            setup_state: Some(SetupState::DeviceSwitchRequired),
            reg_id: Some(RegId(42)),
            account: Some(Account::new("a@b.com")),
        };

        let mut vm = StatusViewModel::default();
        apply_auth(&mut vm, &auth, true);
        apply_service(&mut vm, ServiceState::started());

        assert_eq!(vm.token_label, "Ok");
        assert_eq!(vm.setup_label, "device-switch-pending");
        assert_eq!(vm.reg_id_label, "42");
        assert_eq!(vm.email_label, "a@b.com");
        assert!(!vm.sign_in_visible);
        assert!(vm.sign_out_visible);
        assert!(vm.switch_device_enabled);
        assert_eq!(vm.service_label, "Started");
    }

    #[test]
    fn all_absent_scenario() {
        let mut vm = StatusViewModel::default();
        apply_auth(&mut vm, &AuthState::default(), false);
        apply_service(&mut vm, ServiceState::stopped());

        assert_eq!(vm.token_label, "No Token");
        assert_eq!(vm.setup_label, "Setup Not Started");
        assert_eq!(vm.reg_id_label, "");
        assert_eq!(vm.email_label, "");
        assert!(!vm.switch_device_enabled);
        assert_eq!(vm.service_label, "Stopped");
    }

    #[test]
    fn serializes_for_machine_output() {
        let mut vm = StatusViewModel::default();
        apply_auth(&mut vm, &AuthState::default(), false);

        let json = serde_json::to_value(&vm).unwrap();
        assert_eq!(json["token_label"], "No Token");
        assert_eq!(json["sign_in_visible"], true);
    }

    #[test]
    fn connectivity_labels() {
        let mut vm = StatusViewModel::default();
        apply_connectivity(&mut vm, ConnectivityState::connected(true));
        assert_eq!(vm.connectivity_label, "Connected");
        apply_connectivity(&mut vm, ConnectivityState::disconnected());
        assert_eq!(vm.connectivity_label, "Disconnected");
    }
}
