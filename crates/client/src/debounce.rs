// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Default quiet period before debounced input is forwarded.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(350);

/// Forwards search input only after it has been quiet for a fixed period.
///
/// Each new input cancels the previously scheduled flush and restarts the
/// timer, so a burst of keystrokes delivers exactly one value, the latest,
/// once typing stops. Dropping the debouncer aborts any pending flush so no
/// stale delivery fires after teardown.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    sender: mpsc::Sender<String>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Creates a debouncer that delivers settled input over `sender`.
    #[must_use]
    pub const fn new(delay: Duration, sender: mpsc::Sender<String>) -> Self {
        Self {
            delay,
            sender,
            pending: None,
        }
    }

    /// Creates a debouncer with the default quiet period.
    #[must_use]
    pub const fn with_default_delay(sender: mpsc::Sender<String>) -> Self {
        Self::new(DEBOUNCE_DELAY, sender)
    }

    /// Records new input, restarting the quiet-period timer.
    ///
    /// The previously scheduled flush, if any, is aborted. Only the text
    /// passed to the most recent call is ever delivered.
    pub fn input(&mut self, text: &str) {
        self.cancel();
        let delay: Duration = self.delay;
        let sender: mpsc::Sender<String> = self.sender.clone();
        let text: String = text.to_owned();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if sender.send(text).await.is_err() {
                tracing::debug!("debounce receiver dropped, discarding input");
            }
        }));
    }

    /// Cancels any pending flush without scheduling a new one.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
