//! Dedicated analysis thread.
//!
//! The SeetaFace detector cannot move between threads, so a single worker
//! thread builds the landmark provider, owns the [`Analyzer`] and serves
//! requests one at a time from a channel.

use std::thread;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::config::Limits;
use crate::detector::LandmarkProvider;
use crate::error::{Error, Result};
use crate::pipeline::{AnalysisResponse, Analyzer};

enum WorkerMessage {
    Analyze {
        bytes: Vec<u8>,
        reply: oneshot::Sender<Result<AnalysisResponse>>,
    },
    Exit,
}

/// Owner of the analysis thread. Dropping it stops and joins the thread.
#[derive(Debug)]
pub struct AnalysisWorker {
    thread_handle: Option<thread::JoinHandle<()>>,
    handle: WorkerHandle,
}

/// Cheap, cloneable sender side used by request handlers.
#[derive(Debug, Clone)]
pub struct WorkerHandle {
    tx: mpsc::UnboundedSender<WorkerMessage>,
}

impl std::fmt::Debug for WorkerMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkerMessage::Analyze { bytes, .. } => write!(f, "Analyze({} bytes)", bytes.len()),
            WorkerMessage::Exit => f.write_str("Exit"),
        }
    }
}

impl AnalysisWorker {
    /// Start the worker thread.
    ///
    /// `make_provider` runs on the new thread. Its error is returned here and
    /// no thread is left behind.
    pub fn spawn<P, F>(make_provider: F, limits: Limits) -> Result<Self>
    where
        P: LandmarkProvider + 'static,
        F: FnOnce() -> Result<P> + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel::<WorkerMessage>();
        let (load_tx, load_rx) = std::sync::mpsc::channel::<Result<()>>();

        let thread_handle = thread::Builder::new()
            .name("analysis-worker".into())
            .spawn(move || match make_provider() {
                Ok(provider) => {
                    // The receiver only disappears if `spawn` itself gave up.
                    let _ = load_tx.send(Ok(()));
                    Self::worker_loop(Analyzer::new(provider), rx, limits);
                }
                Err(e) => {
                    let _ = load_tx.send(Err(e));
                }
            })?;

        match load_rx.recv() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                let _ = thread_handle.join();
                return Err(e);
            }
            Err(_) => {
                let _ = thread_handle.join();
                return Err(Error::WorkerUnavailable);
            }
        }
        info!("analysis worker started");

        Ok(Self {
            thread_handle: Some(thread_handle),
            handle: WorkerHandle { tx },
        })
    }

    fn worker_loop<P: LandmarkProvider>(
        mut analyzer: Analyzer<P>,
        mut rx: mpsc::UnboundedReceiver<WorkerMessage>,
        limits: Limits,
    ) {
        while let Some(message) = rx.blocking_recv() {
            match message {
                WorkerMessage::Exit => break,
                WorkerMessage::Analyze { bytes, reply } => {
                    let result = analyzer.analyze_encoded(&bytes, &limits);
                    if let Err(e) = &result {
                        debug!(error = %e, "analysis failed");
                    }
                    if reply.send(result).is_err() {
                        warn!("analysis requester went away before the result was ready");
                    }
                }
            }
        }
        info!("analysis worker stopped");
    }

    pub fn handle(&self) -> WorkerHandle {
        self.handle.clone()
    }

    /// Stop accepting work and wait for the thread to finish its queue.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(thread_handle) = self.thread_handle.take() {
            // Fails only if the thread already exited.
            let _ = self.handle.tx.send(WorkerMessage::Exit);
            if thread_handle.join().is_err() {
                warn!("analysis worker panicked");
            }
        }
    }
}

impl Drop for AnalysisWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

impl WorkerHandle {
    /// Queue an encoded image for analysis and wait for the result.
    pub async fn analyze(&self, bytes: Vec<u8>) -> Result<AnalysisResponse> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(WorkerMessage::Analyze { bytes, reply })
            .map_err(|_| Error::WorkerUnavailable)?;
        response.await.map_err(|_| Error::WorkerUnavailable)?
    }
}
