use crate::handlers::{build_session, use_color};
use crate::types::OutputFormat;
use crate::views::{AnsiTerminal, TerminalWriter, format_status};
use acctmon_runtime::Config;
use anyhow::Result;

pub fn handle(config: &Config, format: OutputFormat) -> Result<()> {
    let session = build_session(config);
    session.presenter.activate(&session.notifier);

    match format {
        OutputFormat::Json => {
            let vm = session.presenter.view_model();
            println!("{}", serde_json::to_string_pretty(&vm)?);
        }
        OutputFormat::Plain => {
            // No screen clear for a one-shot render.
            let mut terminal = AnsiTerminal::new();
            for line in format_status(
                &session.presenter.view_model(),
                session.presenter.sign_in_button(),
                use_color(),
            ) {
                terminal.write_line(&line);
            }
            terminal.flush();
        }
    }

    session.presenter.deactivate();
    Ok(())
}
