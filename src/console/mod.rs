//! Line-oriented front end for one editor session.
//!
//! Stands in for the drawer, toolbar and save-as dialog: every command maps
//! to one session operation and the snapshot is rendered afterwards.

pub mod commands;

use log::{debug, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

use crate::editor::{EditorSession, SaveOutcome, Snapshot};
use crate::external::ExternalOpener;
use crate::file_entry::FileEntry;
use crate::repository::FileRepository;
use commands::{Command, FileRef, HELP, parse_command};

const END_OF_TEXT: &str = ".";
const CANCEL: &str = "-";

pub struct Console<R, O, I, W> {
    session: EditorSession<R, O>,
    input: Lines<I>,
    output: W,
    files: Vec<FileEntry>,
}

impl<R, O, I, W> Console<R, O, I, W>
where
    R: FileRepository,
    O: ExternalOpener,
    I: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(session: EditorSession<R, O>, input: I, output: W) -> Self {
        Self {
            session,
            input: input.lines(),
            output,
            files: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn into_session(self) -> EditorSession<R, O> {
        self.session
    }

    pub async fn run(&mut self) -> std::io::Result<()> {
        self.refresh().await?;

        loop {
            self.write("> ").await?;
            let Some(line) = self.input.next_line().await? else {
                break;
            };

            let command = parse_command(&line);
            debug!("command: {:?}", command);

            match command {
                Command::Quit => break,
                Command::Empty => continue,
                Command::Help => self.writeln(HELP).await?,
                Command::Unknown(line) => {
                    self.writeln(&format!("unknown command: {line} (try `help`)"))
                        .await?
                }
                Command::Show => {
                    let buffer = self.session.buffer().to_string();
                    self.write(&buffer).await?;
                    if !buffer.is_empty() && !buffer.ends_with('\n') {
                        self.writeln("").await?;
                    }
                }
                Command::List => self.refresh().await?,
                Command::Open(file) => self.open(file).await?,
                Command::Edit => {
                    let text = self.read_text().await?;
                    self.session.edit(text);
                    self.render_status().await?;
                }
                Command::Append => {
                    let mut text = self.session.buffer().to_string();
                    text.push_str(&self.read_text().await?);
                    self.session.edit(text);
                    self.render_status().await?;
                }
                Command::Save => self.save().await?,
                Command::SaveAs(name) => self.save_as(&name).await?,
                Command::New => {
                    let suggested = self.session.new_file();
                    self.prompt_save_as(&suggested).await?;
                }
                Command::View => {
                    if !self.session.request_open_externally() {
                        self.writeln("only .html/.htm files can be opened externally")
                            .await?;
                    }
                }
            }
        }

        self.output.flush().await
    }

    async fn open(&mut self, file: FileRef) -> std::io::Result<()> {
        let entry = match file {
            FileRef::Index(index) => match self.files.get(index - 1) {
                Some(entry) => entry.clone(),
                None => {
                    return self.writeln(&format!("no file number {index}")).await;
                }
            },
            FileRef::Name(name) => match self.files.iter().find(|f| f.name == name) {
                Some(entry) => entry.clone(),
                None => {
                    return self.writeln(&format!("no file named {name:?}")).await;
                }
            },
        };

        self.session.open(entry).await;
        self.render_status().await
    }

    async fn save(&mut self) -> std::io::Result<()> {
        match self.session.save().await {
            Ok(SaveOutcome::Saved(entry)) => {
                self.writeln(&format!("saved {}", entry.name)).await?;
                self.refresh().await
            }
            Ok(SaveOutcome::NeedsDestination { suggested }) => {
                self.prompt_save_as(&suggested).await
            }
            Err(e) => {
                warn!("save failed: {}", e);
                self.writeln(&format!("save failed: {e}")).await
            }
        }
    }

    async fn prompt_save_as(&mut self, suggested: &str) -> std::io::Result<()> {
        self.write(&format!("save as [{suggested}] (`{CANCEL}` cancels): "))
            .await?;
        let Some(answer) = self.input.next_line().await? else {
            return Ok(());
        };

        let answer = answer.trim();
        if answer == CANCEL {
            return self.writeln("cancelled").await;
        }
        let name = if answer.is_empty() { suggested } else { answer };
        let name = name.to_string();
        self.save_as(&name).await
    }

    async fn save_as(&mut self, name: &str) -> std::io::Result<()> {
        match self.session.save_as(name).await {
            Ok(entry) => {
                self.writeln(&format!("saved {}", entry.name)).await?;
                self.refresh().await
            }
            Err(e) => {
                warn!("save as {:?} failed: {}", name, e);
                self.writeln(&format!("save failed: {e}")).await
            }
        }
    }

    /// Collects lines up to a lone `.`, each ending with a newline.
    async fn read_text(&mut self) -> std::io::Result<String> {
        self.writeln(&format!("(end with a line containing only `{END_OF_TEXT}`)"))
            .await?;
        let mut text = String::new();
        while let Some(line) = self.input.next_line().await? {
            if line == END_OF_TEXT {
                break;
            }
            text.push_str(&line);
            text.push('\n');
        }
        Ok(text)
    }

    async fn refresh(&mut self) -> std::io::Result<()> {
        let snapshot = self.session.snapshot().await;
        let mut rendered = render_listing(&snapshot);
        rendered.push_str(&status_line(
            self.session.title(),
            &snapshot.buffer,
            snapshot.can_open_externally,
        ));
        self.files = snapshot.files;
        self.writeln(&rendered).await
    }

    async fn render_status(&mut self) -> std::io::Result<()> {
        let status = status_line(
            self.session.title(),
            self.session.buffer(),
            self.session.can_open_externally(),
        );
        self.writeln(&status).await
    }

    async fn write(&mut self, text: &str) -> std::io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }

    async fn writeln(&mut self, text: &str) -> std::io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.write("\n").await
    }
}

fn status_line(title: &str, buffer: &str, can_open_externally: bool) -> String {
    let mut status = format!("[{}] {} bytes", title, buffer.len());
    if can_open_externally {
        status.push_str(" | `view` opens in browser");
    }
    status
}

fn render_listing(snapshot: &Snapshot) -> String {
    let mut out = String::from("Files\n");
    if snapshot.files.is_empty() {
        out.push_str("  (no files)\n");
    }
    for (i, file) in snapshot.files.iter().enumerate() {
        let marker = if snapshot.current_file_name.as_deref() == Some(file.name.as_str()) {
            '*'
        } else {
            ' '
        };
        out.push_str(&format!("{marker} {:>3}. {}\n", i + 1, file.name));
    }
    out
}
