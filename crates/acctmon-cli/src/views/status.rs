use crate::views::terminal::TerminalWriter;
use acctmon_core::StatusViewModel;
use acctmon_providers::SignInButton;
use owo_colors::OwoColorize;

fn heading(text: &str, enable_color: bool) -> String {
    if enable_color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

fn sign_in_affordance(button: SignInButton) -> String {
    match button {
        SignInButton::BrandedWidget { provider } => format!("[{} sign-in widget]", provider),
        SignInButton::Labeled { title } => format!("[{}]", title),
    }
}

/// Format the status screen as plain lines. Kept pure so tests can assert
/// on content without a terminal.
pub fn format_status(
    view_model: &StatusViewModel,
    button: SignInButton,
    enable_color: bool,
) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(heading("Account", enable_color));
    lines.push(format!("  Email:         {}", view_model.email_label));
    lines.push(format!("  Domain:        {}", view_model.domain_label));

    lines.push(heading("Service", enable_color));
    lines.push(format!("  State:         {}", view_model.service_label));
    lines.push(format!(
        "  Connectivity:  {}",
        view_model.connectivity_label
    ));

    lines.push(heading("Authentication", enable_color));
    lines.push(format!("  Token:         {}", view_model.token_label));
    lines.push(format!("  Setup:         {}", view_model.setup_label));
    lines.push(format!("  Reg ID:        {}", view_model.reg_id_label));

    lines.push(heading("Actions", enable_color));
    if view_model.sign_in_visible {
        lines.push(format!("  Sign in:       {}", sign_in_affordance(button)));
    }
    if view_model.sign_out_visible {
        lines.push("  Sign out:      available".to_string());
    }
    lines.push(format!(
        "  Switch device: {}",
        if view_model.switch_device_enabled {
            "enabled"
        } else {
            "disabled"
        }
    ));

    lines
}

/// Console view over a [`TerminalWriter`]; repaints the whole screen.
pub struct StatusView {
    terminal: Box<dyn TerminalWriter>,
    enable_color: bool,
}

impl StatusView {
    pub fn new(terminal: Box<dyn TerminalWriter>, enable_color: bool) -> Self {
        Self {
            terminal,
            enable_color,
        }
    }

    pub fn render(&mut self, view_model: &StatusViewModel, button: SignInButton) {
        self.terminal.clear_screen();
        for line in format_status(view_model, button, self.enable_color) {
            self.terminal.write_line(&line);
        }
        self.terminal.flush();
    }

    /// Append without clearing, for narrated output.
    pub fn append(&mut self, view_model: &StatusViewModel, button: SignInButton) {
        for line in format_status(view_model, button, self.enable_color) {
            self.terminal.write_line(&line);
        }
        self.terminal.flush();
    }

    pub fn write_line(&mut self, line: &str) {
        self.terminal.write_line(line);
    }
}
