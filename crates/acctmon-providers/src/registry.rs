use crate::azure::AzureAdSignIn;
use crate::google::GoogleSignIn;
use crate::traits::IdentityProvider;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which identity provider the deployment is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
#[value(rename_all = "kebab-case")]
pub enum ProviderKind {
    Google,
    AzureAd,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Google => write!(f, "google"),
            ProviderKind::AzureAd => write!(f, "azure-ad"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub kind: ProviderKind,
    pub name: &'static str,
    pub description: &'static str,
}

const PROVIDERS: &[ProviderMetadata] = &[
    ProviderMetadata {
        kind: ProviderKind::Google,
        name: "google",
        description: "Google Sign-In",
    },
    ProviderMetadata {
        kind: ProviderKind::AzureAd,
        name: "azure-ad",
        description: "Azure Active Directory",
    },
];

pub fn all_providers() -> &'static [ProviderMetadata] {
    PROVIDERS
}

pub fn provider_metadata(kind: ProviderKind) -> &'static ProviderMetadata {
    PROVIDERS
        .iter()
        .find(|p| p.kind == kind)
        .expect("every ProviderKind has a metadata entry")
}

/// Create the adapter for a configured provider kind.
pub fn create_provider(kind: ProviderKind) -> Box<dyn IdentityProvider> {
    match kind {
        ProviderKind::Google => Box::new(GoogleSignIn),
        ProviderKind::AzureAd => Box::new(AzureAdSignIn),
    }
}
