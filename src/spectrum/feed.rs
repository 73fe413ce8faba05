use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use super::error::SpectrumError;
use super::ring::SpectrogramWindow;
use super::source::SliceSource;

struct WorkerHandle {
    stop_tx: oneshot::Sender<()>,
    join: JoinHandle<Box<dyn SliceSource + Send>>,
}

/// Owns the spectrogram window and the periodic task that feeds it. Each
/// tick generates one slice and appends it under the window lock, so a
/// reader always sees a fully updated window and never a partial evict.
/// The timer is a cancellable resource: `stop` (or drop) ends the task so
/// no feed outlives its session.
pub struct SpectrumFeed {
    window: Arc<Mutex<SpectrogramWindow>>,
    source: Option<Box<dyn SliceSource + Send>>,
    worker: Option<WorkerHandle>,
}

impl SpectrumFeed {
    /// Pre-fill the window from the source. The feed is created stopped;
    /// call `start` to begin ticking.
    pub fn initialize(
        capacity: usize,
        width: usize,
        mut source: Box<dyn SliceSource + Send>,
    ) -> Result<Self, SpectrumError> {
        let window = SpectrogramWindow::initialize(capacity, width, || source.next_slice(width))?;
        Ok(Self {
            window: Arc::new(Mutex::new(window)),
            source: Some(source),
            worker: None,
        })
    }

    /// Spawn the tick loop: one `next_slice` + `append` per cadence
    /// period.
    pub fn start(&mut self, cadence: Duration) -> Result<(), SpectrumError> {
        if self.worker.is_some() {
            return Err(SpectrumError::AlreadyRunning);
        }
        let mut source = self.source.take().ok_or(SpectrumError::AlreadyRunning)?;

        let window = self.window.clone();
        let (stop_tx, mut stop_rx) = oneshot::channel();

        let join = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(cadence);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            // interval fires immediately once; swallow it so the first
            // append lands one cadence after start.
            ticker.tick().await;

            loop {
                let stopped = tokio::select! {
                    _ = ticker.tick() => false,
                    _ = &mut stop_rx => true,
                };
                if stopped {
                    return source;
                }

                let width = window.lock().unwrap().width();
                let slice = source.next_slice(width);
                if let Err(e) = window.lock().unwrap().append(slice) {
                    log::error!("spectrum feed stopped: {}", e);
                    return source;
                }
            }
        });

        self.worker = Some(WorkerHandle { stop_tx, join });
        Ok(())
    }

    /// Cancel the tick loop and wait for it to finish. The source is
    /// handed back so the feed can be restarted.
    pub async fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.stop_tx.send(());
            if let Ok(source) = worker.join.await {
                self.source = Some(source);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Copy of the current window, taken atomically.
    pub fn snapshot(&self) -> SpectrogramWindow {
        self.window.lock().unwrap().clone()
    }
}

impl Drop for SpectrumFeed {
    fn drop(&mut self) {
        if let Some(worker) = self.worker.take() {
            // Teardown without stop(): kill the timer rather than leak it.
            worker.join.abort();
        }
    }
}
