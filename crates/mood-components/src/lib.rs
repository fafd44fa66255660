//! # mood-components
//!
//! Leptos UI components for the mood chart: the app shell, the import form,
//! the per-line key cards and the line editor modal.

pub mod editor;
pub mod importer;
pub mod key;
pub mod shell;

pub use editor::*;
pub use importer::*;
pub use key::*;
pub use shell::*;
