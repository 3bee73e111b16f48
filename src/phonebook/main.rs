use clap::Parser;
use directories::ProjectDirs;
use phonebook::config::{PhonebookConfig, PhonebookPaths, Scope};
use phonebook::directory::Directory;
use phonebook::error::{PhonebookError, Result};
use phonebook::model::Contact;
use phonebook::search::Criteria;
use phonebook::store::fs::FileStore;
use std::path::PathBuf;

mod args;
mod print;
use args::{Cli, Commands};

const PROJECT_DIR: &str = ".phonebook";
const GLOBAL_DATA_ENV: &str = "PHONEBOOK_GLOBAL_DATA";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

struct AppContext {
    paths: PhonebookPaths,
    scope: Scope,
    config: PhonebookConfig,
    file_override: Option<PathBuf>,
}

impl AppContext {
    fn scope_dir(&self) -> PathBuf {
        self.paths.scope_dir(self.scope).to_path_buf()
    }

    fn storage_path(&self) -> PathBuf {
        match &self.file_override {
            Some(path) => path.clone(),
            None => self.config.storage_path(&self.scope_dir()),
        }
    }

    fn open_directory(&self) -> Result<Directory<FileStore>> {
        let path = self.storage_path();
        log::debug!("Opening phonebook at {}", path.display());
        Directory::with_page_size(FileStore::new(path), self.config.page_size)
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { page }) => handle_list(&ctx, page),
        Some(Commands::Add { contact }) => handle_add(&ctx, contact.into()),
        Some(Commands::Edit { number, contact }) => handle_edit(&ctx, number, contact.into()),
        Some(Commands::Search { search }) => handle_search(&ctx, search.into_criteria()),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, 1),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir()?;
    let global = match std::env::var_os(GLOBAL_DATA_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "phonebook", "phonebook")
            .ok_or_else(|| {
                PhonebookError::Config("Could not determine the global data directory".into())
            })?
            .data_dir()
            .to_path_buf(),
    };

    let paths = PhonebookPaths {
        project: cwd.join(PROJECT_DIR),
        global,
    };
    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Project
    };
    let config = PhonebookConfig::load(paths.scope_dir(scope))?;

    Ok(AppContext {
        paths,
        scope,
        config,
        file_override: cli.file.clone(),
    })
}

fn handle_list(ctx: &AppContext, page: usize) -> Result<()> {
    let directory = ctx.open_directory()?;
    if directory.is_empty() {
        print::info("No contacts yet.");
        return Ok(());
    }

    let contacts = directory.list_page(page);
    if contacts.is_empty() {
        print::warning(&format!(
            "Page {} is empty ({} page(s) of contacts).",
            page,
            directory.page_count()
        ));
        return Ok(());
    }

    print::print_numbered(contacts, directory.page_offset(page) + 1);
    print::info(&format!("Page {} of {}", page, directory.page_count()));
    Ok(())
}

fn handle_add(ctx: &AppContext, contact: Contact) -> Result<()> {
    let mut directory = ctx.open_directory()?;
    let index = directory.add_contact(contact)?;
    print::success(&format!("Contact added (#{}).", index + 1));
    Ok(())
}

fn handle_edit(ctx: &AppContext, number: usize, contact: Contact) -> Result<()> {
    let mut directory = ctx.open_directory()?;
    let applied = match number.checked_sub(1) {
        Some(index) => directory.edit_contact(index, contact)?,
        None => false,
    };

    if applied {
        print::success(&format!("Contact #{} updated.", number));
    } else {
        print::warning(&format!(
            "No contact #{} (the phonebook has {}); nothing changed.",
            number,
            directory.len()
        ));
    }
    Ok(())
}

fn handle_search(ctx: &AppContext, criteria: Criteria) -> Result<()> {
    let directory = ctx.open_directory()?;
    let matches = directory.search_contacts(&criteria);
    print::print_matches(&matches);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => {
            println!("page-size = {}", ctx.config.page_size);
            println!("file-name = {}", ctx.config.file_name);
        }
        (Some("page-size"), None) => println!("page-size = {}", ctx.config.page_size),
        (Some("file-name"), None) => println!("file-name = {}", ctx.config.file_name),
        (Some("page-size"), Some(v)) => {
            let size = v
                .parse::<usize>()
                .map_err(|_| PhonebookError::Config(format!("Invalid page-size: {}", v)))?;
            ctx.config.set_page_size(size)?;
            ctx.config.save(ctx.scope_dir())?;
            print::success(&format!("page-size set to {}", size));
        }
        (Some("file-name"), Some(v)) => {
            ctx.config.set_file_name(&v)?;
            ctx.config.save(ctx.scope_dir())?;
            print::success(&format!("file-name set to {}", ctx.config.file_name));
        }
        (Some(other), _) => {
            return Err(PhonebookError::Config(format!(
                "Unknown config key: {}",
                other
            )));
        }
    }
    Ok(())
}
