//! E-commerce ledger - terminal income and expense bookkeeping
//!
//! This library provides the core functionality for a single-user ledger of
//! income and expense transactions, kept in a fixed-record binary snapshot
//! that is rewritten after every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and settings
//! - `error`: Custom error types
//! - `models`: Transactions, their kind, and the in-memory ledger
//! - `storage`: Binary snapshot and atomic file writes
//! - `audit`: Audit logging system
//! - `services`: Add/edit/delete with persistence, and search
//! - `reports`: Financial summary
//! - `display`: Tabular terminal output
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Interactive menu and subcommand handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use ecommerce_ledger::config::{LedgerPaths, Settings};
//! use ecommerce_ledger::storage::Storage;
//!
//! let paths = LedgerPaths::new(None)?;
//! let settings = Settings::load_or_default(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! let ledger = storage.load_ledger()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::LedgerError;
