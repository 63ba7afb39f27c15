//! Host-side contracts for the Sylos desktop shell.
//!
//! This crate is the GUI-agnostic boundary between the embedded frontend and native host
//! capabilities. It owns the directory-dialog request model, the host dialog facility trait, the
//! lifecycle-aware [`Bridge`], and the shell environment snapshot, while the concrete Tauri
//! transport lives in `sylos_desktop`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod bridge;
pub mod dialog;
pub mod environment;
pub mod error;

pub use bridge::{Bridge, BridgeLifecycle};
pub use dialog::{
    resolve_dialog_title, DirectoryDialogHandler, DirectoryDialogHost, DirectoryDialogOptions,
    DirectoryDialogRequest, DEFAULT_DIRECTORY_DIALOG_TITLE,
};
pub use environment::{ShellEnvironment, GPU_DISABLED_ENV};
pub use error::{BridgeError, DialogError};
