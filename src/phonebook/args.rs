use clap::{Args, Parser, Subcommand};
use phonebook::model::{Contact, Field};
use phonebook::search::{Criteria, Term};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook")]
#[command(about = "Keep a small contact directory in a plain JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the global phonebook instead of the one in ./.phonebook
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Read and write contacts at this path, ignoring scope and config
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one page of contacts
    #[command(alias = "ls")]
    List {
        /// Page number, starting at 1
        #[arg(default_value_t = 1)]
        page: usize,
    },

    /// Add a contact
    #[command(alias = "a")]
    Add {
        #[command(flatten)]
        contact: ContactArgs,
    },

    /// Replace a contact with new values
    #[command(alias = "e")]
    Edit {
        /// Number of the contact as shown by `list`
        number: usize,

        #[command(flatten)]
        contact: ContactArgs,
    },

    /// Find contacts whose fields equal the given values (ignoring case)
    #[command(alias = "s")]
    Search {
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (page-size or file-name)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// The six contact fields. Anything left out is stored as an empty string.
#[derive(Args, Debug, Clone, Default)]
pub struct ContactArgs {
    #[arg(long, default_value = "")]
    pub surname: String,

    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub patronymic: String,

    #[arg(long, default_value = "")]
    pub organization: String,

    #[arg(long, default_value = "")]
    pub work_phone: String,

    #[arg(long, default_value = "")]
    pub personal_phone: String,
}

impl From<ContactArgs> for Contact {
    fn from(args: ContactArgs) -> Self {
        Contact::new(
            args.surname,
            args.name,
            args.patronymic,
            args.organization,
            args.work_phone,
            args.personal_phone,
        )
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    #[arg(long)]
    pub surname: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub patronymic: Option<String>,

    #[arg(long)]
    pub organization: Option<String>,

    #[arg(long)]
    pub work_phone: Option<String>,

    #[arg(long)]
    pub personal_phone: Option<String>,

    /// Extra match as FIELD=VALUE (repeatable)
    #[arg(short = 'w', long = "where", value_name = "FIELD=VALUE")]
    pub terms: Vec<Term>,
}

impl SearchArgs {
    pub fn into_criteria(self) -> Criteria {
        let named = [
            (Field::Surname, self.surname),
            (Field::Name, self.name),
            (Field::Patronymic, self.patronymic),
            (Field::Organization, self.organization),
            (Field::WorkPhone, self.work_phone),
            (Field::PersonalPhone, self.personal_phone),
        ];

        let mut criteria: Criteria = named
            .into_iter()
            .filter_map(|(field, value)| value.map(|v| (field, v)))
            .collect();
        criteria.extend(self.terms.into_iter().map(Into::into));
        criteria
    }
}
