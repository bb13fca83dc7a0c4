// Interactive line-oriented front end over a TaskStore
//
// The session owns the store for its whole lifetime. Transient UI state
// (edit mode, a pending removal) lives in `Mode` and never in the store.

use crate::command::{Command, CommandError, HELP};
use crate::config::Config;
use crate::render::Renderer;
use crate::store::{StoreError, TaskStore};
use crate::task::{EditTask, TaskId};
use eyre::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Whether the session should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What the next input line means
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Command,
    /// The next line is the new title for this task
    Editing { id: TaskId, row: usize },
    /// The next line answers "remove this task?"
    ConfirmRemove { id: TaskId, row: usize },
}

/// A running shell: reads commands from `input`, writes to `output`
pub struct Session<R, W> {
    store: TaskStore,
    config: Config,
    renderer: Renderer,
    input: R,
    output: W,
    mode: Mode,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Start a session with an empty store
    pub fn new(config: Config, input: R, output: W) -> Self {
        Self {
            store: TaskStore::new(),
            renderer: Renderer::new(config.color),
            config,
            input,
            output,
            mode: Mode::Command,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// End the session, handing back the store and the output sink
    pub fn into_parts(self) -> (TaskStore, W) {
        (self.store, self.output)
    }

    /// Read and handle lines until `quit` or end of input
    pub fn run(&mut self) -> Result<()> {
        info!("Session started");
        let list = self.renderer.list(&self.store);
        write!(self.output, "{}", list).context("Failed to write output")?;

        let mut line = String::new();
        loop {
            self.prompt()?;

            line.clear();
            let read = self.input.read_line(&mut line).context("Failed to read input")?;
            if read == 0 {
                debug!("End of input");
                break;
            }

            if self.handle_line(&line)? == Flow::Quit {
                break;
            }
        }

        info!(count = self.store.count(), "Session finished");
        self.output.flush().context("Failed to flush output")?;
        Ok(())
    }

    /// Handle a single input line according to the current mode
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        match std::mem::replace(&mut self.mode, Mode::Command) {
            Mode::Command => self.handle_command(line),
            Mode::Editing { id, row } => {
                self.finish_edit(id, row, line)?;
                Ok(Flow::Continue)
            }
            Mode::ConfirmRemove { id, row } => {
                self.finish_remove(id, row, line)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn handle_command(&mut self, line: &str) -> Result<Flow> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                self.report(&e)?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?command, "Handling command");

        match command {
            Command::Add(title) => self.add(&title)?,
            Command::Toggle(row) => {
                if let Some(id) = self.resolve(row)? {
                    self.store.toggle_done(id);
                    self.show_list()?;
                }
            }
            Command::StartEdit(row) => {
                if let Some(id) = self.resolve(row)? {
                    let title = self.store.get(id).map(|t| t.title.clone()).unwrap_or_default();
                    writeln!(self.output, "Editing task {}: {}", row, title)?;
                    writeln!(self.output, "New title (empty line cancels):")?;
                    self.mode = Mode::Editing { id, row };
                }
            }
            Command::Edit(row, title) => {
                if let Some(id) = self.resolve(row)? {
                    self.store.edit(EditTask::new(id, title));
                    self.show_list()?;
                }
            }
            Command::Remove(row) => {
                if let Some(id) = self.resolve(row)? {
                    if self.config.confirm_removals {
                        writeln!(self.output, "Remove item")?;
                        write!(self.output, "Are you sure you want to remove this item? [y/N] ")?;
                        self.output.flush()?;
                        if !self.config.prompt {
                            writeln!(self.output)?;
                        }
                        self.mode = Mode::ConfirmRemove { id, row };
                    } else {
                        self.store.remove(id);
                        self.show_list()?;
                    }
                }
            }
            Command::List => self.show_list()?,
            Command::Count => {
                let header = self.renderer.header(self.store.count());
                writeln!(self.output, "{}", header)?;
            }
            Command::Json => {
                let json = serde_json::to_string_pretty(self.store.list()).context("Failed to serialize tasks")?;
                writeln!(self.output, "{}", json)?;
            }
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn add(&mut self, title: &str) -> Result<()> {
        match self.store.add(title) {
            Ok(_) => self.show_list(),
            Err(StoreError::DuplicateTitle { title }) => {
                debug!(%title, "Duplicate task rejected");
                let alert = self.renderer.alert(
                    "Task already registered",
                    "You cannot register a task with the same name",
                );
                writeln!(self.output, "{}", alert)?;
                Ok(())
            }
        }
    }

    fn finish_edit(&mut self, id: TaskId, row: usize, line: &str) -> Result<()> {
        let title = line.trim_end_matches(['\n', '\r']);
        if title.trim().is_empty() {
            debug!(row, "Edit cancelled");
            writeln!(self.output, "Edit cancelled")?;
            return Ok(());
        }

        self.store.edit(EditTask::new(id, title));
        self.show_list()
    }

    fn finish_remove(&mut self, id: TaskId, row: usize, line: &str) -> Result<()> {
        let answer = line.trim().to_lowercase();
        if answer == "y" || answer == "yes" {
            self.store.remove(id);
            self.show_list()
        } else {
            debug!(row, "Removal declined");
            writeln!(self.output, "Kept task {}", row)?;
            Ok(())
        }
    }

    // Map a display row to an id, reporting rows that do not exist
    fn resolve(&mut self, row: usize) -> Result<Option<TaskId>> {
        match self.store.id_at(row) {
            Some(id) => Ok(Some(id)),
            None => {
                self.report(&CommandError::NoSuchRow(row))?;
                Ok(None)
            }
        }
    }

    fn report(&mut self, error: &CommandError) -> Result<()> {
        debug!(%error, "Rejected input");
        let message = self.renderer.error(&error.to_string());
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn show_list(&mut self) -> Result<()> {
        let list = self.renderer.list(&self.store);
        write!(self.output, "{}", list)?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        if !self.config.prompt {
            return Ok(());
        }
        let prompt = match self.mode {
            Mode::Command => "> ",
            Mode::Editing { .. } | Mode::ConfirmRemove { .. } => "",
        };
        write!(self.output, "{}", prompt)?;
        self.output.flush().context("Failed to flush output")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};
    use tracing::Level;

    fn session() -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(Config::plain(), Cursor::new(Vec::new()), Vec::new())
    }

    fn output(session: Session<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        let (_, out) = session.into_parts();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_quit_stops_session() {
        let mut s = session();
        assert_eq!(s.handle_line("quit\n").unwrap(), Flow::Quit);
    }

    #[test]
    fn test_edit_mode_consumes_next_line() {
        let mut s = session();
        s.handle_line("add Old\n").unwrap();
        s.handle_line("edit 1\n").unwrap();
        // "list" here is a title, not a command
        s.handle_line("list\n").unwrap();

        assert_eq!(s.store().list()[0].title, "list");
    }

    #[test]
    fn test_edit_mode_blank_line_cancels() {
        let mut s = session();
        s.handle_line("add Old\n").unwrap();
        s.handle_line("edit 1\n").unwrap();
        s.handle_line("\n").unwrap();

        assert_eq!(s.store().list()[0].title, "Old");
        assert!(output(s).contains("Edit cancelled"));
    }

    #[test]
    fn test_remove_needs_yes() {
        let mut s = session();
        s.handle_line("add A\n").unwrap();
        s.handle_line("rm 1\n").unwrap();
        s.handle_line("n\n").unwrap();
        assert_eq!(s.store().count(), 1);

        s.handle_line("rm 1\n").unwrap();
        s.handle_line("YES\n").unwrap();
        assert_eq!(s.store().count(), 0);
    }

    #[test]
    fn test_remove_without_confirmation() {
        let config = Config {
            confirm_removals: false,
            ..Config::plain()
        };
        let mut s = Session::new(config, Cursor::new(Vec::new()), Vec::new());
        s.handle_line("add A\n").unwrap();
        s.handle_line("rm 1\n").unwrap();
        assert_eq!(s.store().count(), 0);
    }

    #[test]
    fn test_missing_row_is_reported() {
        let mut s = session();
        s.handle_line("toggle 4\n").unwrap();
        assert!(output(s).contains("error: no task at row 4"));
    }

    // Collects formatted log output in memory
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_duplicate_add_is_quiet_at_default_level() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        let mut s = session();
        tracing::subscriber::with_default(subscriber, || {
            s.handle_line("add A\n").unwrap();
            s.handle_line("add A\n").unwrap();
        });

        assert_eq!(s.store().count(), 1);
        assert!(output(s).contains("Task already registered"));
        assert!(logs.0.lock().unwrap().is_empty());
    }
}
