use serde::{Deserialize, Serialize};

/// Whether the enterprise messaging service is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceState {
    pub started: bool,
}

impl ServiceState {
    pub fn started() -> Self {
        Self { started: true }
    }

    pub fn stopped() -> Self {
        Self { started: false }
    }
}

/// Connectivity of the service to its infrastructure.
///
/// `strict` reflects the stronger "fully connected" guarantee some
/// deployments distinguish from plain reachability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConnectivityState {
    pub connected: bool,
    pub strict: bool,
}

impl ConnectivityState {
    pub fn connected(strict: bool) -> Self {
        Self {
            connected: true,
            strict,
        }
    }

    pub fn disconnected() -> Self {
        Self {
            connected: false,
            strict: false,
        }
    }
}
