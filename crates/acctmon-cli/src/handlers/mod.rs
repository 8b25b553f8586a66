pub mod demo;
pub mod provider;
pub mod status;
pub mod watch;

use acctmon_runtime::{
    AuthController, Config, ConnectivityNotifier, LocalAuthController, StatusPresenter,
};
use acctmon_types::Account;
use is_terminal::IsTerminal;
use std::rc::Rc;

/// The collaborators a status screen needs, wired to the in-memory service.
pub struct Session {
    pub controller: Rc<LocalAuthController>,
    pub notifier: ConnectivityNotifier,
    pub presenter: Rc<StatusPresenter>,
}

pub fn build_session(config: &Config) -> Session {
    let account = Account::new(format!("user@{}", config.domain));
    let controller = Rc::new(LocalAuthController::new(account));
    let notifier = ConnectivityNotifier::new();
    let presenter = Rc::new(StatusPresenter::new(
        Rc::clone(&controller) as Rc<dyn AuthController>,
        config.provider,
        config.domain.clone(),
    ));
    Session {
        controller,
        notifier,
        presenter,
    }
}

pub fn use_color() -> bool {
    std::io::stdout().is_terminal()
}
