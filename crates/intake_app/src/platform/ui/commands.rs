use std::path::PathBuf;

pub const HELP: &str = "\
Commands:
  drop <path>...            add a batch of files (alias: browse)
  open <row>                preview an upload
  close                     close the preview
  remove <row>              remove an upload
  download <row> [dir]      save an upload under its original name
  show                      redraw the dashboard
  help                      show this help
  quit                      exit";

/// One line of user input. Rows are 1-based, as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Drop(Vec<PathBuf>),
    Open(usize),
    Close,
    Remove(usize),
    Download { row: usize, dir: Option<PathBuf> },
    Show,
    Help,
    Quit,
}

/// Parses a command line. Blank input yields `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let words = split_words(line)?;
    let Some((verb, args)) = words.split_first() else {
        return Ok(None);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "drop" | "browse" => {
            if args.is_empty() {
                return Err("drop needs at least one path".to_string());
            }
            Command::Drop(args.iter().map(PathBuf::from).collect())
        }
        "open" => Command::Open(single_row(verb, args)?),
        "close" => Command::Close,
        "remove" | "rm" => Command::Remove(single_row(verb, args)?),
        "download" | "save" => match args {
            [row] => Command::Download {
                row: parse_row(row)?,
                dir: None,
            },
            [row, dir] => Command::Download {
                row: parse_row(row)?,
                dir: Some(PathBuf::from(dir)),
            },
            _ => return Err("usage: download <row> [dir]".to_string()),
        },
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command '{other}', try 'help'")),
    };
    Ok(Some(command))
}

fn single_row(verb: &str, args: &[String]) -> Result<usize, String> {
    match args {
        [row] => parse_row(row),
        _ => Err(format!("usage: {verb} <row>")),
    }
}

fn parse_row(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(row) if row > 0 => Ok(row),
        _ => Err(format!("'{raw}' is not a row number")),
    }
}

/// Whitespace split that keeps double-quoted runs together, so dragged
/// paths with spaces survive.
fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_word = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_word {
                    words.push(std::mem::take(&mut current));
                    has_word = false;
                }
            }
            c => {
                current.push(c);
                has_word = true;
            }
        }
    }
    if in_quotes {
        return Err("unterminated quote".to_string());
    }
    if has_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn drop_keeps_quoted_paths() {
        assert_eq!(
            parse_command(r#"drop a.pdf "my photos/b c.png""#),
            Ok(Some(Command::Drop(vec![
                PathBuf::from("a.pdf"),
                PathBuf::from("my photos/b c.png"),
            ])))
        );
        assert!(parse_command("drop").is_err());
        assert!(parse_command("drop \"open").is_err());
    }

    #[test]
    fn row_commands_are_one_based() {
        assert_eq!(parse_command("open 2"), Ok(Some(Command::Open(2))));
        assert_eq!(parse_command("rm 1"), Ok(Some(Command::Remove(1))));
        assert!(parse_command("open 0").is_err());
        assert!(parse_command("open x").is_err());
        assert!(parse_command("open").is_err());
    }

    #[test]
    fn download_with_and_without_dir() {
        assert_eq!(
            parse_command("download 3"),
            Ok(Some(Command::Download { row: 3, dir: None }))
        );
        assert_eq!(
            parse_command("save 1 /tmp/out"),
            Ok(Some(Command::Download {
                row: 1,
                dir: Some(PathBuf::from("/tmp/out")),
            }))
        );
    }

    #[test]
    fn unknown_verb_is_reported() {
        assert!(parse_command("upload x").is_err());
        assert_eq!(parse_command("QUIT"), Ok(Some(Command::Quit)));
    }
}
