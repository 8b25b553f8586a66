use crate::error::Result;
use crate::registry::ProviderKind;

/// Sign-in entry point owned by the external auth controller's token layer.
///
/// Providers forward to it verbatim; the token exchange itself (OAuth/OIDC)
/// happens on the other side of this seam.
pub trait TokenManager {
    fn sign_in(&self) -> Result<()>;
}

/// How the sign-in affordance is presented. Exactly one is shown, chosen by
/// the configured provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInButton {
    /// Provider-branded widget (e.g. the Google sign-in button).
    BrandedWidget { provider: &'static str },
    /// Plain button with a provider-supplied title.
    Labeled { title: &'static str },
}

/// Identity-provider adapter
///
/// Responsibilities:
/// - Describe the sign-in affordance to render
/// - Forward the sign-in action to the token manager's entry point
pub trait IdentityProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    fn display_name(&self) -> &'static str;

    fn button(&self) -> SignInButton;

    /// Fire-and-forget: failures propagate but are not interpreted here;
    /// the service surfaces them as subsequent observable state changes.
    fn begin_sign_in(&self, tokens: &dyn TokenManager) -> Result<()>;
}
