use std::io::{self, BufRead, Write};

use securestore_core::BiometricAuthenticator;

/// Stands in for device biometrics by asking for a `y` on the terminal.
pub struct TerminalConfirmation;

fn confirm(reason: &str) -> io::Result<bool> {
    let mut stderr = io::stderr().lock();
    write!(stderr, "{reason} [y/N]: ")?;
    stderr.flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

#[async_trait::async_trait]
impl BiometricAuthenticator for TerminalConfirmation {
    fn is_available(&self) -> bool {
        true
    }

    async fn authenticate(&self, reason: String) -> bool {
        match tokio::task::spawn_blocking(move || confirm(&reason)).await {
            Ok(Ok(approved)) => approved,
            Ok(Err(e)) => {
                tracing::warn!("confirmation prompt failed: {e}");
                false
            }
            Err(e) => {
                tracing::warn!("confirmation task failed: {e}");
                false
            }
        }
    }
}
