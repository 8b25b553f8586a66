use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Validity of the identity-provider token held by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenState {
    Ok,
    Invalid,
    Expired,
}

impl TokenState {
    /// Exact string form used on the wire and in status displays.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenState::Ok => "Ok",
            TokenState::Invalid => "Invalid",
            TokenState::Expired => "Expired",
        }
    }
}

impl fmt::Display for TokenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Ok" => Ok(TokenState::Ok),
            "Invalid" => Ok(TokenState::Invalid),
            "Expired" => Ok(TokenState::Expired),
            other => Err(Error::Parse(format!("unknown token state '{}'", other))),
        }
    }
}

/// Stage of device provisioning against the enterprise service.
///
/// The string forms are sentinels shared with the service; matching on them
/// is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetupState {
    #[serde(rename = "not-requested")]
    NotRequested,
    #[serde(rename = "ongoing")]
    Ongoing,
    #[serde(rename = "sync-required")]
    SyncRequired,
    #[serde(rename = "device-switch-pending")]
    DeviceSwitchRequired,
    #[serde(rename = "fully-provisioned")]
    Full,
}

impl SetupState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SetupState::NotRequested => "not-requested",
            SetupState::Ongoing => "ongoing",
            SetupState::SyncRequired => "sync-required",
            SetupState::DeviceSwitchRequired => "device-switch-pending",
            SetupState::Full => "fully-provisioned",
        }
    }
}

impl fmt::Display for SetupState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SetupState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "not-requested" => Ok(SetupState::NotRequested),
            "ongoing" => Ok(SetupState::Ongoing),
            "sync-required" => Ok(SetupState::SyncRequired),
            "device-switch-pending" => Ok(SetupState::DeviceSwitchRequired),
            "fully-provisioned" => Ok(SetupState::Full),
            other => Err(Error::Parse(format!("unknown setup state '{}'", other))),
        }
    }
}

/// Registration id assigned by the service once an endpoint is provisioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegId(pub u64);

impl fmt::Display for RegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account associated with the current sign-in, as reported by the
/// identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Account {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            display_name: None,
        }
    }
}

/// Snapshot of a user's authentication/provisioning progress.
///
/// Owned by the external auth controller; this crate only models it. All
/// fields are absent until the service reports them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthState {
    #[serde(default)]
    pub token_state: Option<TokenState>,
    #[serde(default)]
    pub setup_state: Option<SetupState>,
    #[serde(default)]
    pub reg_id: Option<RegId>,
    #[serde(default)]
    pub account: Option<Account>,
}

impl AuthState {
    /// A valid token is the one thing every authenticated flow has in common.
    pub fn is_authenticated(&self) -> bool {
        self.token_state == Some(TokenState::Ok)
    }
}
