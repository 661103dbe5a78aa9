//! A loaded expense book ready to take requests
//!
//! The session owns the in-memory model and writes every successful mutation
//! back to disk, followed by its audit entries. A mutation that cannot be
//! saved is rolled back so the request can be retried.

use tracing::warn;

use crate::commands::Command;
use crate::config::{paths::BookPaths, settings::Settings};
use crate::display::{format_budget_table, format_expense_table, format_summary};
use crate::error::BookResult;
use crate::ledger::LedgerModel;
use crate::models::ExpenseDate;
use crate::storage::Storage;

use super::book::{BookCommands, Request};
use super::export::handle_export_command;

pub struct Session {
    storage: Storage,
    settings: Settings,
    model: LedgerModel,
}

impl Session {
    /// Load settings and the ledger snapshot from `paths`
    pub fn open(paths: BookPaths) -> BookResult<Self> {
        let settings = Settings::load_or_create(&paths)?;
        let storage = Storage::new(paths)?;
        let ledger = storage.load_ledger(settings.default_tag()?)?;

        Ok(Self {
            storage,
            settings,
            model: LedgerModel::new(ledger),
        })
    }

    pub fn model(&self) -> &LedgerModel {
        &self.model
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Handle one request and return the text to show
    pub fn handle(&mut self, cmd: BookCommands) -> BookResult<String> {
        let request = cmd.into_request(ExpenseDate::today(), self.model.ledger().default_tag())?;

        match request {
            Request::Execute(Command::Topup(topup)) => self.execute(&Command::Topup(
                topup.with_currency_symbol(self.settings.currency_symbol.as_str()),
            )),
            Request::Execute(command) => self.execute(&command),
            Request::ShowBudgets => Ok(self.budget_table()),
            Request::ShowSummary => Ok(format_summary(
                self.model.ledger(),
                self.model.view(),
                &self.settings.currency_symbol,
            )),
            Request::Export(cmd) => handle_export_command(&self.model, cmd),
        }
    }

    fn execute(&mut self, command: &Command) -> BookResult<String> {
        let snapshot = self.model.clone();
        let result = self.model.execute(command)?;

        if result.is_mutation() {
            if let Err(e) = self.storage.save_ledger(self.model.ledger()) {
                self.model = snapshot;
                return Err(e);
            }
            // The ledger is already on disk; a missing audit entry does not undo it
            if let Err(e) = self.storage.record(&result.changes) {
                warn!(command = command.name(), error = %e, "failed to write audit entries");
            }
        }

        let mut output = result.message;
        match command {
            Command::Find(_) | Command::List(_) => {
                output.push('\n');
                output.push_str(&self.expense_table());
            }
            Command::Switch(_) => {
                output.push('\n');
                output.push_str(&self.budget_table());
                output.push('\n');
                output.push_str(&self.expense_table());
            }
            _ => {}
        }

        Ok(output)
    }

    fn expense_table(&self) -> String {
        format_expense_table(
            &self.model.filtered_expenses(),
            &self.settings.currency_symbol,
        )
    }

    fn budget_table(&self) -> String {
        format_budget_table(
            &self.model.filtered_budgets(),
            self.model.ledger(),
            &self.settings.currency_symbol,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookError;
    use crate::models::Tag;
    use tempfile::TempDir;

    fn open_session() -> (Session, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BookPaths::with_base_dir(temp_dir.path().to_path_buf());
        (Session::open(paths).unwrap(), temp_dir)
    }

    fn add(description: &str, amount: &str, tags: &[&str]) -> BookCommands {
        BookCommands::Add {
            description: description.into(),
            amount: amount.into(),
            date: Some("01-01-2021".into()),
            remark: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_mutations_are_persisted_and_audited() {
        let (mut session, temp_dir) = open_session();

        let message = session.handle(add("Lunch", "12.50", &[])).unwrap();
        assert!(message.starts_with("New expense added: Lunch"));

        let reopened = Session::open(BookPaths::with_base_dir(temp_dir.path().to_path_buf()))
            .unwrap();
        assert_eq!(reopened.model().ledger(), session.model().ledger());
        assert!(reopened.model().ledger().expenses()[0].has_tag(&Tag::default_category()));
        assert_eq!(session.storage().audit().read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_view_commands_are_not_audited() {
        let (mut session, _temp) = open_session();
        session.handle(add("Lunch", "12.50", &[])).unwrap();

        let listing = session.handle(BookCommands::List).unwrap();
        assert!(listing.contains("Lunch"));
        session.handle(BookCommands::Summary).unwrap();

        assert_eq!(session.storage().audit().read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_switch_then_delete_uses_filtered_view() {
        let (mut session, _temp) = open_session();
        session
            .handle(BookCommands::AddCategory { tag: "Food".into() })
            .unwrap();
        session.handle(add("Taxi", "9", &[])).unwrap();
        session.handle(add("Lunch", "12.50", &["Food"])).unwrap();

        session
            .handle(BookCommands::Switch { tag: "Food".into() })
            .unwrap();
        let message = session.handle(BookCommands::Delete { index: 1 }).unwrap();
        assert!(message.starts_with("Deleted expense: Lunch"));
        assert_eq!(session.model().ledger().expenses().len(), 1);
    }

    #[test]
    fn test_unsaved_mutation_is_rolled_back() {
        let (mut session, temp_dir) = open_session();
        let data_dir = temp_dir.path().join("data");
        std::fs::create_dir_all(data_dir.join("expensebook.json.tmp")).unwrap();
        let before = session.model().clone();

        let err = session.handle(add("Lunch", "12.50", &[])).unwrap_err();
        assert!(matches!(err, BookError::Storage(_)));
        assert_eq!(session.model(), &before);
        assert!(session.model().ledger().expenses().is_empty());
        assert!(!data_dir.join("expensebook.json").exists());
        assert!(session.storage().audit().read_all().unwrap().is_empty());

        std::fs::remove_dir(data_dir.join("expensebook.json.tmp")).unwrap();
        let message = session.handle(add("Lunch", "12.50", &[])).unwrap();
        assert!(message.starts_with("New expense added: Lunch"));
        assert_eq!(session.model().ledger().expenses().len(), 1);
    }

    #[test]
    fn test_topup_message_uses_configured_currency() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            currency_symbol: "€".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let mut session = Session::open(paths).unwrap();
        let message = session
            .handle(BookCommands::Topup {
                amount: "50".into(),
                tag: None,
            })
            .unwrap();
        assert_eq!(message, "New budget amount for Default: €50.00");
    }

    #[test]
    fn test_failed_command_is_not_persisted() {
        let (mut session, temp_dir) = open_session();
        let err = session
            .handle(BookCommands::Topup {
                amount: "10".into(),
                tag: Some("Unknown".into()),
            })
            .unwrap_err();
        assert!(matches!(err, BookError::CategoryNotFound(_)));
        assert!(!temp_dir.path().join("data").join("expensebook.json").exists());
    }
}
