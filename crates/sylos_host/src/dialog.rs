//! Directory-dialog request model and host-facility contracts.

use crate::error::{BridgeError, DialogError};

/// Title used when the caller supplies an empty or missing title.
pub const DEFAULT_DIRECTORY_DIALOG_TITLE: &str = "Select a folder";

/// Returns `title`, or [`DEFAULT_DIRECTORY_DIALOG_TITLE`] when it is empty.
///
/// Whitespace-only titles are not empty and pass through untouched.
pub fn resolve_dialog_title(title: &str) -> &str {
    if title.is_empty() {
        DEFAULT_DIRECTORY_DIALOG_TITLE
    } else {
        title
    }
}

/// Per-call directory-dialog request as sent by the frontend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryDialogRequest {
    /// Optional dialog title; `None` behaves like an empty title.
    pub title: Option<String>,
}

impl DirectoryDialogRequest {
    /// Creates a request with the given title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    /// Returns the title the host dialog should display.
    pub fn resolved_title(&self) -> &str {
        resolve_dialog_title(self.title.as_deref().unwrap_or_default())
    }

    /// Builds the options handed to the host dialog facility.
    pub fn to_options(&self) -> DirectoryDialogOptions {
        DirectoryDialogOptions {
            title: self.resolved_title().to_string(),
        }
    }
}

/// Options handed to the host runtime's directory-selection facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryDialogOptions {
    /// Title shown by the native dialog.
    pub title: String,
}

/// Host runtime facility that shows a native "select folder" dialog.
///
/// Implementations block until the user completes or cancels the dialog. A cancelled dialog is
/// reported as `Ok(String::new())`.
pub trait DirectoryDialogHost {
    /// Opaque execution context the host supplies at startup.
    type Context;

    /// Shows the dialog and returns the chosen absolute path.
    fn open_directory_dialog(
        &self,
        context: &Self::Context,
        options: &DirectoryDialogOptions,
    ) -> Result<String, DialogError>;
}

/// Capability surface called by a host-runtime adapter on behalf of the frontend.
pub trait DirectoryDialogHandler {
    /// Opens a directory dialog titled `title` (empty selects the default title).
    fn handle_open_directory_dialog(&self, title: &str) -> Result<String, BridgeError>;

    /// Opens a directory dialog for a frontend request whose title may be absent.
    fn handle_request(&self, request: &DirectoryDialogRequest) -> Result<String, BridgeError> {
        self.handle_open_directory_dialog(request.title.as_deref().unwrap_or_default())
    }
}
