use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::model::Filter;

#[derive(Parser)]
#[command(name = "tp", about = concat!("[t] taskpad v", env!("CARGO_PKG_VERSION"), " - your todo list, one keystroke away"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new todo
    Add(AddArgs),
    /// List todos
    List(ListArgs),
    /// Toggle a todo's completed state
    Toggle(IdArgs),
    /// Change a todo's text
    Edit(EditArgs),
    /// Delete a todo
    Rm(IdArgs),
}

// ---------------------------------------------------------------------------
// Command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Todo text (trimmed; at most 100 characters are kept)
    pub text: String,
}

#[derive(Args)]
pub struct ListArgs {
    /// Show only a subset
    #[arg(long, value_enum, default_value = "all")]
    pub filter: FilterArg,
}

#[derive(Args)]
pub struct IdArgs {
    /// Todo id (see `tp list`)
    pub id: i64,
}

#[derive(Args)]
pub struct EditArgs {
    /// Todo id (see `tp list`)
    pub id: i64,
    /// New text (trimmed; empty text is rejected)
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    Pending,
    Completed,
}

impl From<FilterArg> for Filter {
    fn from(arg: FilterArg) -> Filter {
        match arg {
            FilterArg::All => Filter::All,
            FilterArg::Pending => Filter::Pending,
            FilterArg::Completed => Filter::Completed,
        }
    }
}
