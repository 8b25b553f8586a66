use crate::error::Result;
use crate::registry::ProviderKind;
use crate::traits::{IdentityProvider, SignInButton, TokenManager};

/// Google identity provider. Rendered as the provider-branded widget; the
/// actual OAuth exchange lives behind the token manager.
pub struct GoogleSignIn;

impl IdentityProvider for GoogleSignIn {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Google
    }

    fn display_name(&self) -> &'static str {
        "Google Sign-In"
    }

    fn button(&self) -> SignInButton {
        SignInButton::BrandedWidget { provider: "google" }
    }

    fn begin_sign_in(&self, tokens: &dyn TokenManager) -> Result<()> {
        tokens.sign_in()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct RecordingTokenManager {
        calls: Cell<u32>,
    }

    impl TokenManager for RecordingTokenManager {
        fn sign_in(&self) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn forwards_sign_in_to_token_manager() {
        let tokens = RecordingTokenManager {
            calls: Cell::new(0),
        };
        GoogleSignIn.begin_sign_in(&tokens).unwrap();
        assert_eq!(tokens.calls.get(), 1);
    }

    #[test]
    fn renders_branded_widget() {
        assert_eq!(
            GoogleSignIn.button(),
            SignInButton::BrandedWidget { provider: "google" }
        );
    }
}
