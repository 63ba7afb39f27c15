//! Tauri adapter and command handler for the native directory dialog.

use sylos_host::{
    Bridge, DialogError, DirectoryDialogHandler, DirectoryDialogHost, DirectoryDialogOptions,
    DirectoryDialogRequest,
};
use tauri_plugin_dialog::{DialogExt, FilePath};

/// Maps a folder-picker selection to the path string returned to the frontend.
///
/// `None` means the user cancelled and yields an empty string. Selections that do not resolve to
/// a local filesystem path are reported as a [`DialogError`].
pub fn selection_to_path(selection: Option<FilePath>) -> Result<String, DialogError> {
    let Some(selection) = selection else {
        return Ok(String::new());
    };

    let path = selection
        .into_path()
        .map_err(|err| DialogError::new(format!("selected folder is not a local path: {err}")))?;
    Ok(path.to_string_lossy().into_owned())
}

/// Directory-dialog facility backed by `tauri-plugin-dialog`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriDirectoryDialog;

impl DirectoryDialogHost for TauriDirectoryDialog {
    type Context = tauri::AppHandle;

    fn open_directory_dialog(
        &self,
        app: &tauri::AppHandle,
        options: &DirectoryDialogOptions,
    ) -> Result<String, DialogError> {
        let selection = app
            .dialog()
            .file()
            .set_title(&options.title)
            .blocking_pick_folder();
        selection_to_path(selection)
    }
}

/// Bridge bound into the Tauri app as managed state.
pub type DesktopBridge = Bridge<TauriDirectoryDialog>;

/// Opens a native "select folder" dialog and returns the chosen path.
///
/// Returns an empty string when the user cancels. Runs as an async command so the blocking dialog
/// wait happens off the UI thread.
#[tauri::command]
pub async fn open_directory_dialog(
    bridge: tauri::State<'_, DesktopBridge>,
    title: Option<String>,
) -> Result<String, String> {
    let request = DirectoryDialogRequest { title };
    bridge
        .handle_request(&request)
        .map_err(|err| err.to_string())
}
