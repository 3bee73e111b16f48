//! # Phonebook Architecture
//!
//! Phonebook is a small contact directory kept in a single JSON file. The library owns
//! the data; the `phonebook` binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                           │
//! │  - Parses arguments, renders rows, handles exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Directory (directory.rs, search.rs, page.rs)               │
//! │  - Ordered contact list: add, edit, search, list a page     │
//! │  - Saves the whole list after every change                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ContactStore trait and the on-disk JSON format           │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! Below the CLI, code takes Rust values and returns `Result`s. It never prints and
//! never exits the process. Where the contacts live is passed in explicitly, so any
//! number of directories can be open at once against different files.
//!
//! ## Module Overview
//!
//! - [`model`]: [`model::Contact`] and the [`model::Field`] identifiers
//! - [`directory`]: [`directory::Directory`], the contact list and its operations
//! - [`search`]: [`search::Criteria`] for field-based lookups
//! - [`page`]: Page arithmetic for listing
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Per-scope configuration
//! - [`error`]: Error types

pub mod config;
pub mod directory;
pub mod error;
pub mod model;
pub mod page;
pub mod search;
pub mod store;
