//! Shell environment command handler.

use sylos_host::ShellEnvironment;

/// Returns host facts the frontend uses to tune its presentation.
#[tauri::command]
pub fn shell_environment() -> ShellEnvironment {
    ShellEnvironment::from_process_env()
}
