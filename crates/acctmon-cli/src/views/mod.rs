pub mod status;
pub mod terminal;

pub use status::{StatusView, format_status};
pub use terminal::{AnsiTerminal, MockTerminal, TerminalWriter};
