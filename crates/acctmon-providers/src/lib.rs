// Error types
pub mod error;

// Trait seams shared with the auth controller
pub mod traits;

// Provider implementations
pub mod azure;
pub mod google;

// Provider registry
pub mod registry;

pub use azure::AzureAdSignIn;
pub use error::{Error, Result};
pub use google::GoogleSignIn;
pub use registry::{
    ProviderKind, ProviderMetadata, all_providers, create_provider, provider_metadata,
};
pub use traits::{IdentityProvider, SignInButton, TokenManager};
