// Shell command parsing

use thiserror::Error;

/// A parsed shell input line. Rows are 1-based display positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(usize),
    /// Enter edit mode for a row; the next input line becomes the title
    StartEdit(usize),
    Edit(usize, String),
    Remove(usize),
    List,
    Count,
    Json,
    Help,
    Quit,
}

/// Input the shell could not turn into a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command: {0} (type `help` for the list of commands)")]
    Unknown(String),
    #[error("`{0}` needs a row number")]
    MissingRow(&'static str),
    #[error("not a row number: {0}")]
    InvalidRow(String),
    #[error("no task at row {0}")]
    NoSuchRow(usize),
    #[error("a task needs a title")]
    EmptyTitle,
}

impl Command {
    /// Parse one line of input. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim_start();
        if line.trim().is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line.trim_end(), ""),
        };

        let command = match word.to_lowercase().as_str() {
            "add" | "a" => {
                let title = strip_line_ending(rest);
                if title.trim().is_empty() {
                    return Err(CommandError::EmptyTitle);
                }
                Command::Add(title.to_string())
            }
            "toggle" | "t" | "done" => Command::Toggle(parse_row("toggle", rest)?),
            "edit" | "e" => {
                let rest = rest.trim_start();
                let (row, title) = match rest.split_once(char::is_whitespace) {
                    Some((row, title)) => (row, strip_line_ending(title)),
                    None => (rest, ""),
                };
                let row = parse_row("edit", row)?;
                if title.trim().is_empty() {
                    Command::StartEdit(row)
                } else {
                    Command::Edit(row, title.to_string())
                }
            }
            "rm" | "remove" | "delete" => Command::Remove(parse_row("remove", rest)?),
            "list" | "ls" => Command::List,
            "count" => Command::Count,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

/// Summary printed by `help`
pub const HELP: &str = "\
Commands:
  add <title>          add a task (alias: a)
  toggle <n>           mark task n done or not done (aliases: t, done)
  edit <n> [title]     rename task n; without a title, the next line is the new title (alias: e)
  rm <n>               remove task n, after confirmation (aliases: remove, delete)
  list                 show all tasks (alias: ls)
  count                show the number of tasks
  json                 print the tasks as JSON
  help                 show this help (alias: ?)
  quit                 leave (aliases: exit, q)";

fn parse_row(command: &'static str, input: &str) -> Result<usize, CommandError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CommandError::MissingRow(command));
    }
    match input.parse::<usize>() {
        Ok(row) if row > 0 => Ok(row),
        _ => Err(CommandError::InvalidRow(input.to_string())),
    }
}

// Titles are taken verbatim apart from the line terminator
fn strip_line_ending(s: &str) -> &str {
    s.trim_end_matches(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   \n").unwrap(), None);
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(parse("add Buy milk"), Command::Add("Buy milk".to_string()));
        assert_eq!(parse("a Buy milk\n"), Command::Add("Buy milk".to_string()));
        // Inner and trailing spaces are part of the title
        assert_eq!(parse("add  two  spaces \n"), Command::Add(" two  spaces ".to_string()));
    }

    #[test]
    fn test_parse_add_requires_title() {
        assert_eq!(Command::parse("add"), Err(CommandError::EmptyTitle));
        assert_eq!(Command::parse("add    "), Err(CommandError::EmptyTitle));
    }

    #[test]
    fn test_parse_row_commands() {
        assert_eq!(parse("toggle 2"), Command::Toggle(2));
        assert_eq!(parse("done 1"), Command::Toggle(1));
        assert_eq!(parse("rm 3"), Command::Remove(3));
        assert_eq!(parse("REMOVE 3"), Command::Remove(3));
    }

    #[test]
    fn test_parse_edit_forms() {
        assert_eq!(parse("edit 1"), Command::StartEdit(1));
        assert_eq!(parse("e 2 Buy oat milk"), Command::Edit(2, "Buy oat milk".to_string()));
    }

    #[test]
    fn test_parse_invalid_rows() {
        assert_eq!(Command::parse("toggle"), Err(CommandError::MissingRow("toggle")));
        assert_eq!(Command::parse("rm x"), Err(CommandError::InvalidRow("x".to_string())));
        assert_eq!(Command::parse("edit 0"), Err(CommandError::InvalidRow("0".to_string())));
        assert_eq!(Command::parse("toggle -1"), Err(CommandError::InvalidRow("-1".to_string())));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse("list"), Command::List);
        assert_eq!(parse("ls"), Command::List);
        assert_eq!(parse("count"), Command::Count);
        assert_eq!(parse("json"), Command::Json);
        assert_eq!(parse("?"), Command::Help);
        assert_eq!(parse("quit"), Command::Quit);
        assert_eq!(parse("exit\n"), Command::Quit);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Command::parse("frobnicate 1"), Err(CommandError::Unknown("frobnicate".to_string())));
    }
}
