#![deny(unused_crate_dependencies)]

//! Clipboard interoperability for tabular data-grid widgets.
//!
//! Converts between a grid's internal row/column model and the plain-text
//! tab/newline-delimited format spreadsheets exchange through the system
//! clipboard. The subsystem stays at arm's length from the grid itself:
//! rows, columns and edit state are reached only through the
//! [`clipboard::GridModel`] seam, and the platform's selection/copy
//! machinery only through [`clipboard::CopyDispatcher`].

pub mod clipboard;
pub mod config;

pub use clipboard::{Clipboard, CopyDispatcher, CopyEvent, GridModel, PasteEvent};
pub use config::{ClipboardConfig, PasteMode};
