//! Line-based console input shared by the prompts and the command producer.
use std::io::BufRead;

use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Stream of trimmed input lines.
///
/// Reading from the real terminal happens on a dedicated thread so a pending
/// read never holds the async runtime open at exit.
pub struct ConsoleInput {
    rx: mpsc::Receiver<String>,
}

impl ConsoleInput {
    /// Starts reading lines from stdin.
    pub fn stdin() -> Self {
        let (tx, rx) = mpsc::channel::<String>(1);

        let spawned = std::thread::Builder::new()
            .name("console-input".into())
            .spawn(move || {
                let stdin = std::io::stdin();
                for line in stdin.lock().lines() {
                    let Ok(line) = line else {
                        break;
                    };
                    if tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                debug!("console input closed");
            });

        if let Err(error) = spawned {
            // The sender was dropped with the closure, so reads will see end of input.
            warn!(%error, "failed to start console reader");
        }

        Self { rx }
    }

    /// Input fed by the returned sender. The stream ends when it is dropped.
    pub fn channel(capacity: usize) -> (mpsc::Sender<String>, Self) {
        let (tx, rx) = mpsc::channel::<String>(capacity.max(1));
        (tx, Self { rx })
    }

    /// Scripted input, mainly for tests.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let (tx, rx) = mpsc::channel::<String>(lines.len().max(1));
        for line in lines {
            if tx.try_send(line).is_err() {
                break;
            }
        }
        Self { rx }
    }

    /// Next line with surrounding whitespace removed, or `None` at end of input.
    ///
    /// Cancel-safe: dropping the future never loses a line.
    pub async fn next_line(&mut self) -> Option<String> {
        self.rx.recv().await.map(|line| line.trim().to_string())
    }
}
