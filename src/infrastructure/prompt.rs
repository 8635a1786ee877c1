//! Prompter implementations
//!
//! `DialoguerPrompter` is used on an interactive terminal. `LinePrompter`
//! reads plain lines and serves piped stdin (scripts, CI) and tests.

use std::cell::RefCell;
use std::io::{BufRead, Write};

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Input, Password};

use crate::domain::ports::Prompter;
use crate::error::{DeployError, DeployResult};

/// Terminal prompts via dialoguer; secrets are read without echo.
pub struct DialoguerPrompter {
    theme: Box<dyn Theme>,
}

impl DialoguerPrompter {
    pub fn new(color: bool) -> Self {
        let theme: Box<dyn Theme> = if color {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        Self { theme }
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str) -> DeployResult<String> {
        Input::<String>::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }

    fn secret(&self, prompt: &str) -> DeployResult<String> {
        Password::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(prompt_error)
    }

    fn confirm(&self, prompt: &str, default: bool) -> DeployResult<bool> {
        Confirm::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }
}

fn prompt_error(err: dialoguer::Error) -> DeployError {
    DeployError::Prompt(err.to_string())
}

/// Line-oriented prompts over any reader/writer pair.
///
/// End of input answers every question with an empty line, so defaults apply.
pub struct LinePrompter<R, W> {
    reader: RefCell<R>,
    writer: RefCell<W>,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: RefCell::new(reader),
            writer: RefCell::new(writer),
        }
    }

    pub fn into_writer(self) -> W {
        self.writer.into_inner()
    }

    fn ask(&self, prompt: &str) -> DeployResult<String> {
        {
            let mut writer = self.writer.borrow_mut();
            write!(writer, "{}", prompt)?;
            writer.flush()?;
        }

        let mut line = String::new();
        self.reader.borrow_mut().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl LinePrompter<std::io::StdinLock<'static>, std::io::Stderr> {
    /// Prompts on stderr, answers from stdin
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn input(&self, prompt: &str) -> DeployResult<String> {
        self.ask(&format!("{}: ", prompt))
    }

    fn secret(&self, prompt: &str) -> DeployResult<String> {
        self.ask(&format!("{}: ", prompt))
    }

    fn confirm(&self, prompt: &str, default: bool) -> DeployResult<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        let answer = self.ask(&format!("{} ({}): ", prompt, hint))?;
        Ok(match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => default,
        })
    }
}
