use std::io;
use std::path::PathBuf;

use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use uplink_core::{ContentBody, Region, SessionViewModel};

/// What the user asked for at the upload prompt.
pub enum UploadCommand {
    /// Submit the given file, or the previously staged one when `None`.
    Submit(Option<PathBuf>),
    Quit,
}

/// What the user asked for at the results prompt.
pub enum ResultsCommand {
    /// 1-based entry number as displayed in the list.
    View(usize),
    Quit,
}

/// Draws the session view model onto the terminal.
pub struct Renderer {
    term: Term,
    bar: Option<ProgressBar>,
    printed_log: usize,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            bar: None,
            printed_log: 0,
        }
    }

    pub fn render(&mut self, view: &SessionViewModel) -> io::Result<()> {
        // A new submission cleared the log; start printing from the top.
        if view.log.len() < self.printed_log {
            self.printed_log = 0;
        }

        match view.region {
            Region::Upload => {
                self.finish_bar();
                self.print_new_log_lines(view)?;
                if let Some(validation) = &view.validation {
                    self.term
                        .write_line(&style(validation).red().to_string())?;
                }
            }
            Region::Processing => {
                if self.bar.is_none() {
                    self.term.write_line("processing...")?;
                    self.bar = Some(make_bar());
                }
                if let Some(bar) = &self.bar {
                    bar.set_position(u64::from(view.progress));
                    for line in &view.log[self.printed_log..] {
                        bar.println(format!("[{}] {}", line.at, line.text));
                    }
                    self.printed_log = view.log.len();
                }
            }
            Region::Results => {
                self.finish_bar();
                self.print_new_log_lines(view)?;
                self.print_results(view)?;
            }
        }
        Ok(())
    }

    pub fn prompt_upload(&self) -> io::Result<UploadCommand> {
        self.term
            .write_str(&format!("{} ", style("file to upload (or \"quit\"):").bold()))?;
        let line = self.term.read_line()?;
        Ok(match line.trim() {
            "quit" | "q" | "exit" => UploadCommand::Quit,
            "" => UploadCommand::Submit(None),
            other => UploadCommand::Submit(Some(PathBuf::from(other))),
        })
    }

    pub fn prompt_results(&self) -> io::Result<ResultsCommand> {
        loop {
            self.term.write_str(&format!(
                "{} ",
                style("view <n> to show an entry, \"quit\" to exit:").bold()
            ))?;
            let line = self.term.read_line()?;
            let line = line.trim();
            match line {
                "quit" | "q" | "exit" => return Ok(ResultsCommand::Quit),
                _ => {}
            }
            let number = line
                .strip_prefix("view")
                .or_else(|| line.strip_prefix('v'))
                .unwrap_or(line)
                .trim();
            if let Ok(number) = number.parse::<usize>() {
                if number >= 1 {
                    return Ok(ResultsCommand::View(number));
                }
            }
            self.warn("expected \"view <n>\" or \"quit\"")?;
        }
    }

    pub fn warn(&self, text: &str) -> io::Result<()> {
        self.term.write_line(&style(text).yellow().to_string())
    }

    fn print_results(&mut self, view: &SessionViewModel) -> io::Result<()> {
        if let Some(summary) = &view.summary {
            self.term
                .write_line(&style("processing succeeded").green().to_string())?;
            if let Some(output_dir) = &summary.output_dir {
                self.term
                    .write_line(&format!("output directory: {output_dir}"))?;
            }
            self.term
                .write_line(&format!("generated files: {}", summary.file_count))?;
        }
        for row in &view.entries {
            self.term.write_line(&format!(
                "  {}: {}",
                row.index + 1,
                style(&row.label).cyan()
            ))?;
        }
        if let Some(pane) = &view.content {
            self.term.write_line("")?;
            self.term.write_line(&format!(
                "{} {}",
                style("file content:").bold(),
                pane.title
            ))?;
            match &pane.body {
                ContentBody::Json(text) => self.term.write_line(text)?,
                ContentBody::Error(text) => {
                    self.term.write_line(&style(text).red().to_string())?
                }
            }
        }
        Ok(())
    }

    fn print_new_log_lines(&mut self, view: &SessionViewModel) -> io::Result<()> {
        for line in &view.log[self.printed_log..] {
            self.term
                .write_line(&format!("[{}] {}", line.at, line.text))?;
        }
        self.printed_log = view.log.len();
        Ok(())
    }

    fn finish_bar(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

fn make_bar() -> ProgressBar {
    let style = ProgressStyle::with_template("{bar:40.cyan/blue} {pos:>3}%")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    ProgressBar::new(100).with_style(style)
}
