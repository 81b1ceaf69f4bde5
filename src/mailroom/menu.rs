//! # Menu Dispatcher
//!
//! The interactive prompt loop, modeled as an explicit finite-state machine
//! rather than nested recursive loops, so "how many levels does exit
//! unwind" is a named transition instead of call-stack behavior.
//!
//! ```text
//!               ┌────────── Report ◄───────┐ report
//!               ▼                          │
//! Main ──send──► Send ──name──► Amount ──amount──► Email ──► Main
//!   │            │  ▲  │          │
//!   │exit        │  │  └──list──► DonorList ──► Send
//!   ▼            │  └────exit─────┘   (amount exit unwinds ONE level)
//!  Done          └──exit──► Main (selection cleared)
//! ```
//!
//! Prompting states (`Main`, `Send`, `Amount`) read one line, validate it
//! against their grammar, and dispatch on the tag; an unmatched line prints
//! an invalid-command notice and stays put. Display states (`Report`,
//! `DonorList`, `Email`) render and advance without reading. End-of-input
//! is treated as that menu's exit command.

use crate::api::MailroomApi;
use crate::commands::{CmdMessage, MessageLevel};
use crate::error::{MailroomError, Result};
use crate::grammar::{self, AmountTag, MainTag, SendTag};
use crate::model::WorkingSelection;
use crate::render;
use crate::store::DonorStore;
use colored::Colorize;
use std::io::{BufRead, Write};

pub const MAIN_MENU_PROMPT: &str = "
Welcome to Mailroom Madness!

MAIN MENU

S: Send an email to a donor.
R: Print report of all donations so far.
X: Exit from the program.
";

pub const SEND_MENU_PROMPT: &str = "
SEND MENU

Register a new donation and send an email to the donor.

list: List all existing donors.
X: Exit to main menu.

Or enter a donor's name.
";

const INVALID_COMMAND: &str = "Invalid command.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Prompting: top-level menu.
    Main,
    /// Display: donation report table, then back to `Main`.
    Report,
    /// Prompting: donor-name entry.
    Send,
    /// Display: all donor names, then back to `Send`.
    DonorList,
    /// Prompting: amount entry for the selected donor.
    Amount,
    /// Commit + display: record the donation and show the thank-you email.
    Email,
    /// Terminal state; `run` returns.
    Done,
}

/// One interactive session: owns the api, the working selection, and the
/// line-oriented input/output streams.
pub struct Session<S: DonorStore, R: BufRead, W: Write> {
    api: MailroomApi<S>,
    selection: WorkingSelection,
    input: R,
    output: W,
    state: MenuState,
}

impl<S: DonorStore, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(api: MailroomApi<S>, input: R, output: W) -> Self {
        Self {
            api,
            selection: WorkingSelection::default(),
            input,
            output,
            state: MenuState::Main,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Drive the state machine until the session is done.
    pub fn run(&mut self) -> Result<()> {
        while self.state != MenuState::Done {
            self.step()?;
        }
        Ok(())
    }

    /// Perform exactly one transition of the state machine.
    pub fn step(&mut self) -> Result<()> {
        self.state = match self.state {
            MenuState::Main => self.step_main()?,
            MenuState::Report => self.show_report()?,
            MenuState::Send => self.step_send()?,
            MenuState::DonorList => self.show_donor_list()?,
            MenuState::Amount => self.step_amount()?,
            MenuState::Email => self.commit_donation()?,
            MenuState::Done => MenuState::Done,
        };
        Ok(())
    }

    fn step_main(&mut self) -> Result<MenuState> {
        let Some(line) = self.prompt(MAIN_MENU_PROMPT)? else {
            return Ok(MenuState::Done);
        };
        match grammar::match_main_menu(&line) {
            Some(MainTag::Send) => Ok(MenuState::Send),
            Some(MainTag::Report) => Ok(MenuState::Report),
            Some(MainTag::Exit) => Ok(MenuState::Done),
            None => {
                self.invalid()?;
                Ok(MenuState::Main)
            }
        }
    }

    fn step_send(&mut self) -> Result<MenuState> {
        let Some(line) = self.prompt(SEND_MENU_PROMPT)? else {
            self.selection.clear();
            return Ok(MenuState::Main);
        };
        match grammar::match_send_menu(&line) {
            Some(SendTag::Donor(name)) => {
                self.selection.name = Some(name);
                Ok(MenuState::Amount)
            }
            Some(SendTag::List) => Ok(MenuState::DonorList),
            Some(SendTag::Exit) => {
                self.selection.clear();
                Ok(MenuState::Main)
            }
            None => {
                self.invalid()?;
                Ok(MenuState::Send)
            }
        }
    }

    fn step_amount(&mut self) -> Result<MenuState> {
        let name = self.selected_name()?;
        let prompt = format!("\nEnter the amount donated by {}:\n", name);
        let Some(line) = self.prompt(&prompt)? else {
            // Unwind one level only; the captured name stays selected.
            return Ok(MenuState::Send);
        };
        match grammar::match_amount(&line) {
            Some(AmountTag::Amount(amount)) => {
                self.selection.amount = Some(amount);
                Ok(MenuState::Email)
            }
            Some(AmountTag::Exit) => Ok(MenuState::Send),
            None => {
                self.invalid()?;
                Ok(MenuState::Amount)
            }
        }
    }

    fn show_report(&mut self) -> Result<MenuState> {
        let result = self.api.report()?;
        writeln!(self.output, "{}", render::render_report(&result.report))?;
        Ok(MenuState::Main)
    }

    fn show_donor_list(&mut self) -> Result<MenuState> {
        let result = self.api.list_donors()?;
        writeln!(self.output, "{}", render::render_donor_list(&result.donors))?;
        Ok(MenuState::Send)
    }

    fn commit_donation(&mut self) -> Result<MenuState> {
        let name = self.selected_name()?;
        let amount = self
            .selection
            .amount
            .ok_or_else(|| MailroomError::Api("no amount selected".to_string()))?;

        let result = self.api.record_donation(&name, amount)?;
        if let Some(receipt) = &result.receipt {
            writeln!(self.output, "{}", render::render_email(receipt))?;
        }
        self.write_messages(&result.messages)?;
        self.selection.clear();
        Ok(MenuState::Main)
    }

    fn write_messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        for message in messages {
            let styled = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            writeln!(self.output, "{}", styled)?;
        }
        Ok(())
    }

    fn selected_name(&self) -> Result<String> {
        self.selection
            .name
            .clone()
            .ok_or_else(|| MailroomError::Api("no donor selected".to_string()))
    }

    /// Display a prompt and read one line. `None` means end-of-input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn invalid(&mut self) -> Result<()> {
        writeln!(self.output, "{}", INVALID_COMMAND.yellow())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::io::Cursor;

    fn session(
        store: InMemoryStore,
        script: &str,
    ) -> Session<InMemoryStore, Cursor<Vec<u8>>, Vec<u8>> {
        colored::control::set_override(false);
        Session::new(
            MailroomApi::new(store),
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
        )
    }

    fn output(session: &Session<InMemoryStore, Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(session.output.clone()).unwrap()
    }

    #[test]
    fn exit_at_main_menu_finishes_session() {
        let mut s = session(InMemoryStore::new(), "x\n");
        s.run().unwrap();
        assert_eq!(s.state(), MenuState::Done);
    }

    #[test]
    fn invalid_main_input_reprompts() {
        let mut s = session(InMemoryStore::new(), "blerg\nx\n");
        s.run().unwrap();

        let out = output(&s);
        assert!(out.contains("Invalid command."));
        assert_eq!(out.matches("MAIN MENU").count(), 2);
    }

    #[test]
    fn full_send_flow_commits_and_returns_to_main() {
        let mut s = session(InMemoryStore::new(), "s\njane doe\n455\nx\n");
        s.run().unwrap();

        let out = output(&s);
        assert!(out.contains("Dear Jane Doe,"));
        assert!(out.contains("$455.00"));
        assert!(s.selection.name.is_none());
        assert!(s.selection.amount.is_none());
    }

    #[test]
    fn exit_at_amount_returns_to_send_menu_not_main() {
        let mut s = session(InMemoryStore::new(), "s\nbill gates\nx\n");
        // s -> Send
        s.step().unwrap();
        assert_eq!(s.state(), MenuState::Send);
        // name -> Amount
        s.step().unwrap();
        assert_eq!(s.state(), MenuState::Amount);
        // exit unwinds one level only, name stays selected
        s.step().unwrap();
        assert_eq!(s.state(), MenuState::Send);
        assert_eq!(s.selection.name.as_deref(), Some("Bill Gates"));
    }

    #[test]
    fn exit_at_send_menu_clears_selection() {
        let mut s = session(InMemoryStore::new(), "s\nbill gates\nx\nx\n");
        s.step().unwrap(); // Main -> Send
        s.step().unwrap(); // Send -> Amount
        s.step().unwrap(); // Amount -> Send
        s.step().unwrap(); // Send -> Main, selection cleared
        assert_eq!(s.state(), MenuState::Main);
        assert!(s.selection.name.is_none());
    }

    #[test]
    fn list_shows_donors_and_returns_to_send_menu() {
        let store = InMemoryStore::new().with_donor("Bill Gates", &[5000.0]);
        let mut s = session(store, "s\nlist\nx\nx\n");
        s.run().unwrap();

        let out = output(&s);
        assert!(out.contains("nice people who have donated"));
        assert!(out.contains("Bill Gates"));
        // The send menu is shown again after the list display.
        assert_eq!(out.matches("SEND MENU").count(), 2);
    }

    #[test]
    fn report_renders_table_and_returns_to_main() {
        let store = InMemoryStore::new().with_donor("Bill Gates", &[5000.0, 4000.50, 1.0]);
        let mut s = session(store, "r\nx\n");
        s.run().unwrap();

        let out = output(&s);
        assert!(out.contains("Donor Name"));
        assert!(out.contains("$9001.50"));
        assert!(out.contains("$3000.50"));
        assert_eq!(out.matches("MAIN MENU").count(), 2);
    }

    #[test]
    fn end_of_input_acts_as_exit_at_every_level() {
        // EOF at the amount prompt: Amount -> Send -> Main -> Done.
        let mut s = session(InMemoryStore::new(), "s\njane doe\n");
        s.run().unwrap();
        assert_eq!(s.state(), MenuState::Done);

        let book = s.api.list_donors().unwrap();
        assert!(book.donors.is_empty());
    }

    #[test]
    fn donation_persists_through_the_store() {
        let mut s = session(InMemoryStore::new(), "send\nBill Gates\n33.33\nx\n");
        s.run().unwrap();

        let report = s.api.report().unwrap();
        assert_eq!(report.report[0].name, "Bill Gates");
        assert_eq!(report.report[0].total, 33.33);
    }

    #[test]
    fn failed_save_surfaces_as_fatal_error() {
        let mut s = session(
            InMemoryStore::new().with_failing_saves(),
            "s\njane doe\n455\n",
        );
        assert!(s.run().is_err());
    }
}
