// Text rendering of the task list

use crate::store::TaskStore;
use crate::task::Task;
use colored::Colorize;

/// Renders store state as terminal text
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Counter line, e.g. "You have 3 tasks"
    pub fn header(&self, count: usize) -> String {
        let noun = if count == 1 { "task" } else { "tasks" };
        let text = format!("You have {} {}", count, noun);
        if self.color { text.bold().to_string() } else { text }
    }

    /// One row: `<n>. [x] title`
    pub fn row(&self, position: usize, task: &Task) -> String {
        let marker = if task.done { "[x]" } else { "[ ]" };
        if self.color && task.done {
            format!(
                "{:>3}. {} {}",
                position,
                marker.green(),
                task.title.green().strikethrough()
            )
        } else {
            format!("{:>3}. {} {}", position, marker, task.title)
        }
    }

    /// Header followed by every row
    pub fn list(&self, store: &TaskStore) -> String {
        let mut out = self.header(store.count());
        out.push('\n');

        if store.is_empty() {
            out.push_str("  No tasks yet\n");
            return out;
        }

        for (index, task) in store.list().iter().enumerate() {
            out.push_str(&self.row(index + 1, task));
            out.push('\n');
        }
        out
    }

    /// Highlight an alert title
    pub fn alert(&self, title: &str, message: &str) -> String {
        if self.color {
            format!("{}\n{}", title.yellow().bold(), message)
        } else {
            format!("{}\n{}", title, message)
        }
    }

    pub fn error(&self, message: &str) -> String {
        if self.color {
            format!("{} {}", "error:".red().bold(), message)
        } else {
            format!("error: {}", message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_pluralisation() {
        let renderer = Renderer::new(false);
        assert_eq!(renderer.header(0), "You have 0 tasks");
        assert_eq!(renderer.header(1), "You have 1 task");
        assert_eq!(renderer.header(2), "You have 2 tasks");
    }

    #[test]
    fn test_plain_rows() {
        let renderer = Renderer::new(false);
        let mut task = Task::new("Buy milk");
        assert_eq!(renderer.row(1, &task), "  1. [ ] Buy milk");

        task.done = true;
        assert_eq!(renderer.row(12, &task), " 12. [x] Buy milk");
    }

    #[test]
    fn test_list_empty_store() {
        let renderer = Renderer::new(false);
        let store = TaskStore::new();
        assert_eq!(renderer.list(&store), "You have 0 tasks\n  No tasks yet\n");
    }

    #[test]
    fn test_list_rows_in_order() {
        let renderer = Renderer::new(false);
        let mut store = TaskStore::new();
        store.add("A").unwrap();
        let b = store.add("B").unwrap();
        store.toggle_done(b);

        assert_eq!(
            renderer.list(&store),
            "You have 2 tasks\n  1. [ ] A\n  2. [x] B\n"
        );
    }

    #[test]
    fn test_done_row_styled_when_colour_forced() {
        let renderer = Renderer::new(true);
        let mut task = Task::new("Buy milk");
        task.done = true;

        colored::control::set_override(true);
        let row = renderer.row(1, &task);
        colored::control::unset_override();

        // Green marker, green struck-through title
        assert!(row.contains("\x1b[32m[x]"));
        assert!(row.contains("\x1b[9;32mBuy milk"));
    }

    #[test]
    fn test_open_row_never_styled() {
        let renderer = Renderer::new(true);
        let task = Task::new("Buy milk");

        assert_eq!(renderer.row(1, &task), "  1. [ ] Buy milk");
    }

    #[test]
    fn test_plain_alert_and_error() {
        let renderer = Renderer::new(false);
        assert_eq!(renderer.alert("Title", "body"), "Title\nbody");
        assert_eq!(renderer.error("oops"), "error: oops");
    }
}
