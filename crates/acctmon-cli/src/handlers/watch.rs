use crate::handlers::{Session, build_session, use_color};
use crate::types::OutputFormat;
use crate::views::{AnsiTerminal, StatusView};
use acctmon_core::StatusViewModel;
use acctmon_runtime::{AuthController, Config};
use acctmon_types::{ConnectivityState, RegId};
use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// Repaint the screen (or emit one JSON line) on every observed change while
/// an in-memory service walks through a full provisioning lifecycle.
pub fn handle(config: &Config, format: OutputFormat) -> Result<()> {
    let session = build_session(config);
    session.presenter.activate(&session.notifier);
    let store = session.controller.status_store();

    match format {
        OutputFormat::Plain => {
            let view = Rc::new(RefCell::new(StatusView::new(
                Box::new(AnsiTerminal::new()),
                use_color(),
            )));

            // Rendered after the presenter's own subscription, so the view
            // model is already current for this notification.
            let render_subscription = {
                let view = Rc::clone(&view);
                let presenter = Rc::clone(&session.presenter);
                store.subscribe(move |_| {
                    view.borrow_mut()
                        .render(&presenter.view_model(), presenter.sign_in_button());
                })
            };
            let render_listener = {
                let view = Rc::clone(&view);
                let presenter = Rc::clone(&session.presenter);
                session.notifier.add_listener(move |_| {
                    view.borrow_mut()
                        .render(&presenter.view_model(), presenter.sign_in_button());
                })
            };

            run_lifecycle(&session)?;

            store.unsubscribe(render_subscription);
            session.notifier.remove_listener(render_listener);
        }
        OutputFormat::Json => {
            let frames: Rc<RefCell<Vec<StatusViewModel>>> = Rc::new(RefCell::new(Vec::new()));

            let render_subscription = {
                let frames = Rc::clone(&frames);
                let presenter = Rc::clone(&session.presenter);
                store.subscribe(move |_| frames.borrow_mut().push(presenter.view_model()))
            };
            let render_listener = {
                let frames = Rc::clone(&frames);
                let presenter = Rc::clone(&session.presenter);
                session
                    .notifier
                    .add_listener(move |_| frames.borrow_mut().push(presenter.view_model()))
            };

            run_lifecycle(&session)?;

            store.unsubscribe(render_subscription);
            session.notifier.remove_listener(render_listener);

            // One frame per observed change, newline-delimited.
            for frame in frames.borrow().iter() {
                println!("{}", serde_json::to_string(frame)?);
            }
        }
    }

    session.presenter.deactivate();
    Ok(())
}

fn run_lifecycle(session: &Session) -> Result<()> {
    session.notifier.notify(ConnectivityState::connected(true));
    session.presenter.sign_in()?;
    session.controller.finish_provisioning(RegId(42));
    session.controller.begin_device_switch();
    session.presenter.switch_device();
    session.presenter.sign_out();
    Ok(())
}
