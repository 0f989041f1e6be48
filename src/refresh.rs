use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{anyhow, Result};

use crate::fetch::CounterSource;

/// Delay between refresh ticks.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(30_000);

/// Wait slice between stop-flag checks while idling out the interval.
const STOP_POLL: Duration = Duration::from_millis(10);

/// Messages delivered to the window loop's queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// New counter text ready to display.
    CounterText(String),
}

/// Periodic counter refresh driver.
///
/// One tick fires immediately on start, then one per interval. Each tick
/// fetches on a short-lived worker thread and publishes the formatted result
/// as a [`UiEvent`]; failures publish the `"0"` fallback instead. While a
/// fetch is in flight further ticks are skipped, so a stalled request never
/// stacks up concurrent attempts.
pub struct RefreshScheduler {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl RefreshScheduler {
    pub fn start<S>(source: S, events: Sender<UiEvent>, interval: Duration) -> Result<Self>
    where
        S: CounterSource + Send + Sync + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let in_flight = Arc::new(AtomicBool::new(false));
        let source = Arc::new(source);

        let handle = thread::Builder::new()
            .name("refresh-timer".to_string())
            .spawn({
                let stop = Arc::clone(&stop);
                move || {
                    while !stop.load(Ordering::SeqCst) {
                        run_tick(&source, &in_flight, &events);
                        let mut waited = Duration::ZERO;
                        while waited < interval && !stop.load(Ordering::SeqCst) {
                            thread::sleep(STOP_POLL);
                            waited += STOP_POLL;
                        }
                    }
                }
            })
            .map_err(|err| anyhow!("failed to spawn refresh timer thread: {err}"))?;

        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    /// Halt future ticks. An in-flight fetch is not interrupted; its late
    /// completion is discarded on the receiving side.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.stop();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn run_tick<S>(source: &Arc<S>, in_flight: &Arc<AtomicBool>, events: &Sender<UiEvent>)
where
    S: CounterSource + Send + Sync + 'static,
{
    if in_flight.swap(true, Ordering::SeqCst) {
        tracing::debug!("previous fetch still in flight; skipping tick");
        return;
    }

    let worker = thread::Builder::new()
        .name("refresh-fetch".to_string())
        .spawn({
            let source = Arc::clone(source);
            let in_flight = Arc::clone(in_flight);
            let events = events.clone();
            move || {
                let text = match source.fetch() {
                    Ok(count) => count.to_string(),
                    Err(err) => {
                        tracing::debug!(?err, "viewer fetch failed; showing fallback");
                        "0".to_string()
                    }
                };
                let _ = events.send(UiEvent::CounterText(text));
                in_flight.store(false, Ordering::SeqCst);
            }
        });

    if let Err(err) = worker {
        tracing::warn!(?err, "failed to spawn fetch worker");
        in_flight.store(false, Ordering::SeqCst);
    }
}
