//! Background generation.
//!
//! One request runs on one dedicated thread and reports back exactly once
//! over a channel. The request is a snapshot: later edits to the settings
//! it was built from do not reach the running generation.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{PixgenError, Result};
use crate::generate::{generate_cancellable, CancelToken, PixelBuffer};
use crate::types::{ColourPolicy, Settings};

/// Everything a generation run needs, captured at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub width: u32,
    pub height: u32,
    pub policy: ColourPolicy,
    /// Seed for reproducible output. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl GenerationRequest {
    pub fn new(width: u32, height: u32, policy: ColourPolicy) -> Self {
        Self {
            width,
            height,
            policy,
            seed: None,
        }
    }

    /// Snapshot the current settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.width, settings.height, settings.policy())
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Run the request on the current thread.
    pub fn run(&self, cancel: &CancelToken) -> Result<PixelBuffer> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        generate_cancellable(self.width, self.height, &self.policy, &mut rng, cancel)
    }
}

/// Handle to a generation running on a background thread.
pub struct GenerationHandle {
    receiver: Receiver<Result<PixelBuffer>>,
    cancel: CancelToken,
    thread: Option<JoinHandle<()>>,
}

/// Start `request` on a new worker thread.
pub fn spawn(request: GenerationRequest) -> Result<GenerationHandle> {
    let (sender, receiver) = mpsc::sync_channel(1);
    let cancel = CancelToken::new();
    let worker_cancel = cancel.clone();

    let thread = thread::Builder::new()
        .name("pixgen-worker".to_string())
        .spawn(move || {
            let result = request.run(&worker_cancel);
            // The receiver may already be gone if the handle was dropped
            let _ = sender.send(result);
        })?;

    Ok(GenerationHandle {
        receiver,
        cancel,
        thread: Some(thread),
    })
}

impl GenerationHandle {
    /// Ask the worker to stop. It finishes its current row first.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Block until the worker reports back.
    pub fn wait(mut self) -> Result<PixelBuffer> {
        let result = self.receiver.recv().map_err(|_| worker_lost());
        self.join();
        result?
    }

    /// Poll for the result without blocking.
    ///
    /// Returns `None` while the worker is still running. The result is
    /// handed out once; polling again after that reports a lost worker.
    pub fn try_wait(&mut self) -> Option<Result<PixelBuffer>> {
        match self.receiver.try_recv() {
            Ok(result) => {
                self.join();
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(worker_lost())),
        }
    }

    fn join(&mut self) {
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn worker_lost() -> PixgenError {
    PixgenError::Build {
        message: "Generation worker exited without a result".to_string(),
        help: None,
    }
}
