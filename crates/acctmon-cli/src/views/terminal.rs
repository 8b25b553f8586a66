use std::cell::{Cell, RefCell};
use std::io::{self, Write};
use std::rc::Rc;

pub trait TerminalWriter {
    fn clear_screen(&mut self);
    fn write_line(&mut self, line: &str);
    fn flush(&mut self);
}

pub struct AnsiTerminal;

impl Default for AnsiTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl AnsiTerminal {
    pub fn new() -> Self {
        Self
    }
}

impl TerminalWriter for AnsiTerminal {
    fn clear_screen(&mut self) {
        print!("\x1B[2J\x1B[1;1H");
    }

    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }

    fn flush(&mut self) {
        let _ = io::stdout().flush();
    }
}

/// Recording terminal for tests. Clones share the recorded state, so a test
/// can keep a handle while the view owns the boxed writer.
#[derive(Clone, Default)]
pub struct MockTerminal {
    lines: Rc<RefCell<Vec<String>>>,
    clear_count: Rc<Cell<usize>>,
    flush_count: Rc<Cell<usize>>,
}

impl MockTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn clear_count(&self) -> usize {
        self.clear_count.get()
    }

    pub fn flush_count(&self) -> usize {
        self.flush_count.get()
    }
}

impl TerminalWriter for MockTerminal {
    fn clear_screen(&mut self) {
        self.clear_count.set(self.clear_count.get() + 1);
        self.lines.borrow_mut().clear();
    }

    fn write_line(&mut self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }

    fn flush(&mut self) {
        self.flush_count.set(self.flush_count.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_terminal() {
        let mut terminal = MockTerminal::new();
        terminal.clear_screen();
        terminal.write_line("line1");
        terminal.write_line("line2");
        terminal.flush();

        assert_eq!(terminal.clear_count(), 1);
        assert_eq!(terminal.lines().len(), 2);
        assert_eq!(terminal.flush_count(), 1);
    }

    #[test]
    fn clones_share_recorded_state() {
        let terminal = MockTerminal::new();
        let mut writer = terminal.clone();
        writer.write_line("shared");

        assert_eq!(terminal.lines(), ["shared"]);
    }
}
