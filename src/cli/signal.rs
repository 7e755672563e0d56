use crate::{cli::messages, errors::AppError};
use std::io::{self, Write};
use std::{process, thread};
use tracing::info;

/// Ends the process with the farewell on Ctrl-C, whichever prompt is waiting.
///
/// SIGINT is registered before this returns, so no interrupt after the
/// banner falls back to the default kill.
pub fn leave_on_interrupt() -> Result<(), AppError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    #[cfg(unix)]
    let mut sigint = {
        use tokio::signal::unix::{SignalKind, signal};

        let _guard = runtime.enter();
        signal(SignalKind::interrupt())?
    };

    thread::Builder::new()
        .name("interrupt".to_string())
        .spawn(move || {
            #[cfg(unix)]
            let received = runtime.block_on(sigint.recv()).is_some();
            #[cfg(not(unix))]
            let received = runtime.block_on(tokio::signal::ctrl_c()).is_ok();

            if received {
                info!("interrupted");
                farewell();
            }
        })?;

    Ok(())
}

fn farewell() -> ! {
    let mut out = io::stdout();
    // The process ends either way, a closed stdout changes nothing.
    let _ = writeln!(out, "{}", messages::LEAVING);
    let _ = out.flush();
    process::exit(0);
}
