//! Expense book CLI commands
//!
//! Clap definitions for every request against the book, and their
//! translation into validated [`Command`]s. Indices are one-based here and
//! zero-based from the command layer on.

use clap::Subcommand;

use crate::commands::{
    AddCategory, AddExpense, Command, DeleteCategory, DeleteExpense, EditExpense,
    EditExpenseDescriptor, FindExpenses, ListExpenses, SwitchCategory, Topup,
};
use crate::error::{BookError, BookResult};
use crate::models::{
    Amount, DatePredicate, Description, Expense, ExpenseDate, FindPredicate, KeywordsPredicate,
    Remark, Tag, TagsPredicate,
};

use super::export::ExportCommands;

/// Requests against the expense book
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum BookCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount, e.g. "12.50"
        amount: String,
        /// Date as DD-MM-YYYY (default: today)
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form note
        #[arg(short, long)]
        remark: Option<String>,
        /// Category tag, repeatable (default: the default category)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// Delete an expense by its listed number
    Delete {
        /// Number shown by the last listing
        index: usize,
    },

    /// Edit an expense by its listed number
    Edit {
        /// Number shown by the last listing
        index: usize,
        #[arg(long)]
        description: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long)]
        remark: Option<String>,
        /// Replace all tags, repeatable
        #[arg(short, long = "tag")]
        tags: Vec<String>,
        /// Remove all tags
        #[arg(long, conflicts_with = "tags")]
        clear_tags: bool,
    },

    /// Find expenses by keyword, date and tag
    Find {
        /// Whole words to look for in descriptions
        keywords: Vec<String>,
        /// Date as DD-MM-YYYY, repeatable
        #[arg(short, long = "date")]
        dates: Vec<String>,
        /// Category tag, repeatable
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// List all expenses
    #[command(alias = "ls")]
    List,

    /// Create a category budget
    #[command(name = "add-category")]
    AddCategory {
        tag: String,
    },

    /// Delete a category budget
    #[command(name = "delete-category")]
    DeleteCategory {
        tag: String,
    },

    /// Add money to a category budget
    Topup {
        /// Amount, e.g. "50" or "12.50"
        amount: String,
        /// Category tag (default: the default category)
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Show only one category (the default category shows everything)
    Switch {
        tag: String,
    },

    /// Show category budgets
    Budgets,

    /// Show total budgeted, total spent and balance
    Summary,

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),
}

/// What to do for one parsed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Run a command against the model
    Execute(Command),
    ShowBudgets,
    ShowSummary,
    Export(ExportCommands),
}

/// Validate a value-type field, reporting failures as parse errors
fn field<T>(result: BookResult<T>) -> BookResult<T> {
    result.map_err(BookError::into_parse)
}

fn parse_tags(raw: &[String]) -> BookResult<Vec<Tag>> {
    raw.iter().map(|t| field(Tag::parse(t))).collect()
}

/// Turn a one-based listing number into a zero-based index
pub fn parse_index(index: usize) -> BookResult<usize> {
    index
        .checked_sub(1)
        .ok_or_else(|| BookError::Parse("The expense index must be a positive number".into()))
}

impl BookCommands {
    /// Validate arguments and build the request
    ///
    /// `today` and `default_tag` fill in what `add` leaves out.
    pub fn into_request(self, today: ExpenseDate, default_tag: &Tag) -> BookResult<Request> {
        let command = match self {
            Self::Add {
                description,
                amount,
                date,
                remark,
                tags,
            } => {
                let mut tags = parse_tags(&tags)?;
                if tags.is_empty() {
                    tags.push(default_tag.clone());
                }
                let date = match date {
                    Some(d) => field(ExpenseDate::parse(&d))?,
                    None => today,
                };
                let expense = Expense::new(
                    field(Description::parse(&description))?,
                    field(Amount::parse(&amount))?,
                    date,
                    Remark::new(remark.unwrap_or_default()),
                    tags,
                );
                Command::Add(AddExpense::new(expense))
            }

            Self::Delete { index } => Command::Delete(DeleteExpense::new(parse_index(index)?)),

            Self::Edit {
                index,
                description,
                amount,
                date,
                remark,
                tags,
                clear_tags,
            } => {
                let index = parse_index(index)?;
                let tags = if clear_tags {
                    Some(Default::default())
                } else if tags.is_empty() {
                    None
                } else {
                    Some(parse_tags(&tags)?.into_iter().collect())
                };
                let descriptor = EditExpenseDescriptor {
                    description: description
                        .map(|d| field(Description::parse(&d)))
                        .transpose()?,
                    amount: amount.map(|a| field(Amount::parse(&a))).transpose()?,
                    date: date.map(|d| field(ExpenseDate::parse(&d))).transpose()?,
                    remark: remark.map(Remark::new),
                    tags,
                };
                if !descriptor.is_any_field_edited() {
                    return Err(BookError::Parse(
                        "At least one field to edit must be provided.".into(),
                    ));
                }
                Command::Edit(EditExpense::new(index, descriptor))
            }

            Self::Find {
                keywords,
                dates,
                tags,
            } => {
                let dates = dates
                    .iter()
                    .map(|d| field(ExpenseDate::parse(d)).map(|d| d.to_string()))
                    .collect::<BookResult<Vec<_>>>()?;
                let predicate = FindPredicate::new(
                    KeywordsPredicate::new(&keywords),
                    DatePredicate::new(dates),
                    field(TagsPredicate::new(&tags))?,
                );
                Command::Find(FindExpenses::new(predicate))
            }

            Self::List => Command::List(ListExpenses),

            Self::AddCategory { tag } => Command::AddCategory(AddCategory::new(field(Tag::parse(&tag))?)),

            Self::DeleteCategory { tag } => {
                Command::DeleteCategory(DeleteCategory::new(field(Tag::parse(&tag))?))
            }

            Self::Topup { amount, tag } => {
                let tag = tag.map(|t| field(Tag::parse(&t))).transpose()?;
                Command::Topup(Topup::new(field(Amount::parse(&amount))?, tag))
            }

            Self::Switch { tag } => Command::Switch(SwitchCategory::new(field(Tag::parse(&tag))?)),

            Self::Budgets => return Ok(Request::ShowBudgets),
            Self::Summary => return Ok(Request::ShowSummary),
            Self::Export(cmd) => return Ok(Request::Export(cmd)),
        };

        Ok(Request::Execute(command))
    }
}
