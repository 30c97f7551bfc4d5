use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use tracing::trace;

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// One period elapsed on the ticker started as `generation`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
}

/// Background thread emitting a `Tick` every period until cancelled or
/// until the receiving side hangs up. Dropping the ticker cancels it.
#[derive(Debug)]
pub struct Ticker {
    token: CancelToken,
}

impl Ticker {
    pub fn spawn(period: Duration, generation: u64, tx: Sender<Tick>) -> Self {
        let token = CancelToken::new();
        let thread_token = token.clone();

        thread::spawn(move || {
            loop {
                thread::sleep(period);
                if thread_token.is_cancelled() {
                    break;
                }
                if tx.send(Tick { generation }).is_err() {
                    break;
                }
            }
            trace!(generation, "ticker exited");
        });

        Self { token }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    #[cfg(test)]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
