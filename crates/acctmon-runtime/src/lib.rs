pub mod config;
pub mod connectivity;
pub mod controller;
pub mod local;
pub mod presenter;

pub use config::Config;
pub use connectivity::ConnectivityNotifier;
pub use controller::{AuthController, EndpointManager};
pub use local::LocalAuthController;
pub use presenter::StatusPresenter;
