//! Auftragsverwaltung Core Library
//!
//! Work-order board state: the record store, per-column projection, move
//! algorithm, edit form, configuration and snapshot I/O.

pub mod board;
pub mod config;
pub mod error;
pub mod storage;

pub use error::{AuftragError, AuftragResult};
