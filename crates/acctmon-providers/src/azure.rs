use crate::error::Result;
use crate::registry::ProviderKind;
use crate::traits::{IdentityProvider, SignInButton, TokenManager};

/// Azure Active Directory identity provider. Azure ships no branded widget,
/// so the affordance is a plain labeled button.
pub struct AzureAdSignIn;

impl IdentityProvider for AzureAdSignIn {
    fn kind(&self) -> ProviderKind {
        ProviderKind::AzureAd
    }

    fn display_name(&self) -> &'static str {
        "Azure Active Directory"
    }

    fn button(&self) -> SignInButton {
        SignInButton::Labeled {
            title: "Azure AD Sign In",
        }
    }

    fn begin_sign_in(&self, tokens: &dyn TokenManager) -> Result<()> {
        tokens.sign_in()
    }
}
