//! Tauri desktop shell for Sylos.
//!
//! The shell serves the bundled frontend, registers the [`DesktopBridge`] as the bound object, and
//! hands it the application handle from the startup hook. Command registration stays localized
//! here so the host contracts in `sylos_host` never depend on Tauri internals.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

#[doc(hidden)]
pub mod dialog;
mod environment;

pub use dialog::{DesktopBridge, TauriDirectoryDialog};

use std::fmt::Display;
use std::io::{self, Write};

use tauri::Manager;

fn log_plugin<R: tauri::Runtime>() -> tauri::plugin::TauriPlugin<R> {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    tauri_plugin_log::Builder::new().level(level).build()
}

/// Writes the fatal startup message to `out`.
///
/// The log plugin may not be installed yet when the runtime fails, so this goes to stderr directly.
fn write_startup_failure(out: &mut impl Write, err: &impl Display) -> io::Result<()> {
    writeln!(out, "sylos desktop shell failed to start: {err}")
}

/// Starts the Tauri desktop host process.
///
/// Exits the process with status 1 if the host runtime cannot start.
pub fn run() {
    let result = tauri::Builder::default()
        .plugin(log_plugin())
        .plugin(tauri_plugin_dialog::init())
        .manage(DesktopBridge::new(TauriDirectoryDialog))
        .setup(|app| {
            let bridge = app.state::<DesktopBridge>();
            bridge.on_startup(app.handle().clone());
            log::info!("desktop bridge {}", bridge.lifecycle().as_str());
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            dialog::open_directory_dialog,
            environment::shell_environment
        ])
        .run(tauri::generate_context!());

    if let Err(err) = result {
        log::error!("sylos desktop shell failed to start: {err}");
        let _ = write_startup_failure(&mut io::stderr().lock(), &err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::write_startup_failure;

    #[test]
    fn startup_failure_message_names_the_runtime_error() {
        let mut out = Vec::new();
        write_startup_failure(&mut out, &"failed to create window").expect("write message");
        assert_eq!(
            String::from_utf8(out).expect("utf8 message"),
            "sylos desktop shell failed to start: failed to create window\n"
        );
    }
}
