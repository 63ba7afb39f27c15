//! Frontend-facing bridge object and its startup lifecycle.
//!
//! A [`Bridge`] is created before the host runtime starts, is handed the execution context once
//! through [`Bridge::on_startup`], and then serves independent dialog requests for the rest of the
//! process lifetime.

use std::fmt;
use std::sync::OnceLock;

use crate::dialog::{DirectoryDialogHandler, DirectoryDialogHost, DirectoryDialogRequest};
use crate::error::BridgeError;

/// Lifecycle state of a [`Bridge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeLifecycle {
    /// The startup hook has not delivered a context yet.
    Uninitialized,
    /// A context is stored and dialog requests are served.
    Ready,
}

impl BridgeLifecycle {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Ready => "ready",
        }
    }
}

/// Bound object exposing the native directory dialog to the frontend.
pub struct Bridge<H: DirectoryDialogHost> {
    host: H,
    context: OnceLock<H::Context>,
}

impl<H: DirectoryDialogHost> Bridge<H> {
    /// Creates an uninitialized bridge over `host`.
    pub fn new(host: H) -> Self {
        Self {
            host,
            context: OnceLock::new(),
        }
    }

    /// Startup hook: stores the execution context supplied by the host runtime.
    ///
    /// The context is write-once; a repeated call keeps the first context.
    pub fn on_startup(&self, context: H::Context) {
        if self.context.set(context).is_err() {
            log::warn!("bridge startup hook invoked more than once; keeping the first context");
            return;
        }
        log::debug!("bridge context stored");
    }

    /// Returns the current lifecycle state.
    pub fn lifecycle(&self) -> BridgeLifecycle {
        if self.context.get().is_some() {
            BridgeLifecycle::Ready
        } else {
            BridgeLifecycle::Uninitialized
        }
    }

    /// Returns whether the startup hook has run.
    pub fn is_ready(&self) -> bool {
        self.lifecycle() == BridgeLifecycle::Ready
    }

    /// Returns the stored execution context, if any.
    pub(crate) fn context(&self) -> Option<&H::Context> {
        self.context.get()
    }

    /// Opens the host's directory dialog and returns the chosen path.
    ///
    /// An empty `title` is replaced by the default title. A cancelled dialog yields whatever the
    /// host reports for "no selection", typically an empty string.
    pub fn open_directory_dialog(&self, title: &str) -> Result<String, BridgeError> {
        self.open_request(&DirectoryDialogRequest::with_title(title))
    }

    /// Opens the host's directory dialog for `request`; a missing title selects the default.
    pub fn open_request(&self, request: &DirectoryDialogRequest) -> Result<String, BridgeError> {
        let context = self.context.get().ok_or(BridgeError::NotReady)?;
        let options = request.to_options();
        log::debug!("opening directory dialog titled {:?}", options.title);

        match self.host.open_directory_dialog(context, &options) {
            Ok(path) => Ok(path),
            Err(err) => {
                log::warn!("directory dialog failed: {err}");
                Err(BridgeError::Dialog(err))
            }
        }
    }
}

impl<H: DirectoryDialogHost> DirectoryDialogHandler for Bridge<H> {
    fn handle_open_directory_dialog(&self, title: &str) -> Result<String, BridgeError> {
        self.open_directory_dialog(title)
    }

    fn handle_request(&self, request: &DirectoryDialogRequest) -> Result<String, BridgeError> {
        self.open_request(request)
    }
}

impl<H: DirectoryDialogHost> fmt::Debug for Bridge<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bridge")
            .field("lifecycle", &self.lifecycle())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{Bridge, BridgeLifecycle};
    use crate::dialog::{DirectoryDialogHost, DirectoryDialogOptions};
    use crate::error::{BridgeError, DialogError};

    struct EchoTitle;

    impl DirectoryDialogHost for EchoTitle {
        type Context = u32;

        fn open_directory_dialog(
            &self,
            context: &u32,
            options: &DirectoryDialogOptions,
        ) -> Result<String, DialogError> {
            Ok(format!("/ctx{context}/{}", options.title))
        }
    }

    #[test]
    fn lifecycle_moves_to_ready_after_startup() {
        let bridge = Bridge::new(EchoTitle);
        assert_eq!(bridge.lifecycle(), BridgeLifecycle::Uninitialized);
        bridge.on_startup(7);
        assert_eq!(bridge.lifecycle(), BridgeLifecycle::Ready);
        assert_eq!(bridge.lifecycle().as_str(), "ready");
    }

    #[test]
    fn dialog_before_startup_is_rejected() {
        let bridge = Bridge::new(EchoTitle);
        assert_eq!(bridge.open_directory_dialog("x"), Err(BridgeError::NotReady));
    }

    #[test]
    fn repeated_startup_keeps_first_context() {
        let bridge = Bridge::new(EchoTitle);
        bridge.on_startup(1);
        bridge.on_startup(2);
        assert_eq!(bridge.context(), Some(&1));
        assert_eq!(bridge.open_directory_dialog("").as_deref(), Ok("/ctx1/Select a folder"));
    }
}
