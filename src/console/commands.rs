/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    /// 1-based index into the last listing, or a file name.
    Open(FileRef),
    /// Replace the buffer with the lines that follow, up to a lone `.`.
    Edit,
    Append,
    Show,
    Save,
    SaveAs(String),
    New,
    View,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRef {
    Index(usize),
    Name(String),
}

pub const HELP: &str = "\
commands:
  ls                 list files
  open <n|name>      open a file (discards unsaved edits)
  edit               replace the buffer; finish with a line containing only `.`
  append             add lines to the buffer; finish with `.`
  show               print the buffer
  save               save to the current file
  saveas <name>      save under a new name
  new                save the buffer as a new file
  view               open the current HTML file externally
  help               show this text
  quit               exit";

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "" => Command::Empty,
        "ls" | "list" => Command::List,
        "open" | "o" if !rest.is_empty() => Command::Open(parse_file_ref(rest)),
        "edit" | "e" => Command::Edit,
        "append" | "a" => Command::Append,
        "show" | "p" => Command::Show,
        "save" | "w" => Command::Save,
        "saveas" | "save-as" if !rest.is_empty() => Command::SaveAs(rest.to_string()),
        "new" => Command::New,
        "view" | "browser" => Command::View,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

fn parse_file_ref(arg: &str) -> FileRef {
    match arg.parse::<usize>() {
        Ok(index) if index > 0 => FileRef::Index(index),
        _ => FileRef::Name(arg.to_string()),
    }
}
