use crate::handlers::{build_session, use_color};
use crate::types::OutputFormat;
use crate::views::{AnsiTerminal, StatusView};
use acctmon_providers::SignInButton;
use acctmon_runtime::{Config, StatusPresenter};
use acctmon_types::{ConnectivityState, RegId};
use anyhow::Result;
use serde_json::json;

/// Narrated walkthrough: sign-in, provisioning, device switch, sign-out.
/// Unlike `watch`, each step is captioned and appended rather than
/// repainted, so the whole transcript stays on screen. With `--format json`
/// every step becomes one `{step, status}` record.
pub fn handle(config: &Config, format: OutputFormat) -> Result<()> {
    let session = build_session(config);
    session.presenter.activate(&session.notifier);

    let mut view = StatusView::new(Box::new(AnsiTerminal::new()), use_color());
    let button = session.presenter.sign_in_button();
    let presenter = &session.presenter;

    show(
        &mut view,
        presenter,
        button,
        format,
        "initial state (silent sign-in found no session)",
    )?;

    session.notifier.notify(ConnectivityState::connected(true));
    show(&mut view, presenter, button, format, "transport connected")?;

    presenter.sign_in()?;
    show(
        &mut view,
        presenter,
        button,
        format,
        "signed in, provisioning ongoing",
    )?;

    session.controller.finish_provisioning(RegId(42));
    show(
        &mut view,
        presenter,
        button,
        format,
        "provisioning finished, registration assigned",
    )?;

    session.controller.begin_device_switch();
    show(
        &mut view,
        presenter,
        button,
        format,
        "another endpoint holds the registration",
    )?;

    presenter.switch_device();
    show(&mut view, presenter, button, format, "switch device requested")?;

    presenter.sign_out();
    show(&mut view, presenter, button, format, "signed out")?;

    session.presenter.deactivate();
    Ok(())
}

fn show(
    view: &mut StatusView,
    presenter: &StatusPresenter,
    button: SignInButton,
    format: OutputFormat,
    caption: &str,
) -> Result<()> {
    let vm = presenter.view_model();
    match format {
        OutputFormat::Json => {
            let record = json!({ "step": caption, "status": vm });
            println!("{}", serde_json::to_string(&record)?);
        }
        OutputFormat::Plain => {
            view.write_line(&format!("== {} ==", caption));
            view.append(&vm, button);
            view.write_line("");
        }
    }
    Ok(())
}
