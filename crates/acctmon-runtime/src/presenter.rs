//! The account status presenter.
//!
//! Two states: Inactive (no subscriptions) and Active (store subscription
//! and connectivity listener live). Activation synchronizes the view model
//! immediately via the store's fire-on-subscribe contract; deactivation is
//! synchronous and suppresses any late callbacks, so once the screen is
//! hidden no observed mutation can change a rendered label.

use crate::connectivity::ConnectivityNotifier;
use crate::controller::AuthController;
use acctmon_core::{
    StatusSnapshot, StatusViewModel, SubscriptionId, apply_auth, apply_connectivity, apply_service,
};
use acctmon_providers::{IdentityProvider, ProviderKind, SignInButton, create_provider};
use acctmon_types::{ConnectivityState, SetupState};
use anyhow::Result;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct Shared {
    view_model: StatusViewModel,
    /// Setup state seen by the previous notification, for edge-detecting
    /// the transition into `Full`.
    last_setup: Option<SetupState>,
}

pub struct StatusPresenter {
    controller: Rc<dyn AuthController>,
    provider: Box<dyn IdentityProvider>,
    shared: Rc<RefCell<Shared>>,
    store_subscription: Cell<Option<SubscriptionId>>,
    /// The notifier handle is kept alongside the listener id so dropping an
    /// active presenter can release it without the caller's help.
    connectivity: RefCell<Option<(ConnectivityNotifier, SubscriptionId)>>,
}

impl StatusPresenter {
    /// The provider kind and service domain are injected here; the presenter
    /// reads no global configuration. Construction also kicks off a silent
    /// sign-in attempt, mirroring what the screen does on load.
    pub fn new(
        controller: Rc<dyn AuthController>,
        provider_kind: ProviderKind,
        domain: impl Into<String>,
    ) -> Self {
        let mut view_model = StatusViewModel {
            domain_label: domain.into(),
            ..Default::default()
        };
        // No notification has arrived yet; start from the disconnected label
        // rather than an empty field.
        apply_connectivity(&mut view_model, ConnectivityState::default());

        controller.sign_in_silently();

        Self {
            controller,
            provider: create_provider(provider_kind),
            shared: Rc::new(RefCell::new(Shared {
                view_model,
                last_setup: None,
            })),
            store_subscription: Cell::new(None),
            connectivity: RefCell::new(None),
        }
    }

    pub fn is_active(&self) -> bool {
        self.store_subscription.get().is_some()
    }

    /// Inactive -> Active. Subscribes to the status store (which fires once
    /// immediately, syncing the view model) and registers the connectivity
    /// listener. A second call while active is a no-op.
    pub fn activate(&self, notifier: &ConnectivityNotifier) {
        if self.is_active() {
            return;
        }

        let store = self.controller.status_store();
        let shared = Rc::clone(&self.shared);
        let controller = Rc::clone(&self.controller);
        let subscription = store.subscribe(move |snapshot| {
            Self::apply_snapshot(&shared, &controller, snapshot);
        });
        self.store_subscription.set(Some(subscription));

        let shared = Rc::clone(&self.shared);
        let listener = notifier.add_listener(move |state| {
            apply_connectivity(&mut shared.borrow_mut().view_model, *state);
        });
        *self.connectivity.borrow_mut() = Some((notifier.clone(), listener));
    }

    /// Active -> Inactive. Synchronous: when this returns, neither callback
    /// can fire again. Idempotent, and also run on drop so an active
    /// presenter going out of scope cannot keep observing.
    pub fn deactivate(&self) {
        if let Some(subscription) = self.store_subscription.take() {
            self.controller.status_store().unsubscribe(subscription);
        }
        if let Some((notifier, listener)) = self.connectivity.borrow_mut().take() {
            notifier.remove_listener(listener);
        }
    }

    /// Latest projection of the observed state.
    pub fn view_model(&self) -> StatusViewModel {
        self.shared.borrow().view_model.clone()
    }

    /// The sign-in affordance the configured provider wants rendered.
    pub fn sign_in_button(&self) -> SignInButton {
        self.provider.button()
    }

    pub fn provider_kind(&self) -> ProviderKind {
        self.provider.kind()
    }

    // Actions: forwarded verbatim to the collaborators, no local validation.

    pub fn switch_device(&self) {
        self.controller.request_setup_retry();
    }

    pub fn sign_out(&self) {
        self.controller.reset_service();
        self.controller.sign_out();
    }

    pub fn sign_in(&self) -> Result<()> {
        self.provider
            .begin_sign_in(self.controller.token_manager())?;
        Ok(())
    }

    fn apply_snapshot(
        shared: &Rc<RefCell<Shared>>,
        controller: &Rc<dyn AuthController>,
        snapshot: &StatusSnapshot,
    ) {
        let entered_full = {
            let mut shared = shared.borrow_mut();
            apply_service(&mut shared.view_model, snapshot.service);
            apply_auth(
                &mut shared.view_model,
                &snapshot.auth,
                controller.started_and_authenticated(),
            );

            let entered_full = snapshot.auth.setup_state == Some(SetupState::Full)
                && shared.last_setup != Some(SetupState::Full);
            shared.last_setup = snapshot.auth.setup_state;
            entered_full
        };

        // One-shot per transition into fully-provisioned: the other endpoint
        // is deregistered and setup continues on this one. Re-evaluations
        // while already fully provisioned do not re-fire. The call may
        // publish new state; the shared borrow is released first so the
        // deferred notification can re-enter this function.
        if entered_full {
            controller
                .endpoint_manager()
                .deregister_any_endpoint_and_continue_setup();
        }
    }
}

impl Drop for StatusPresenter {
    fn drop(&mut self) {
        self.deactivate();
    }
}
