//! Bounded-concurrency dispatch of target tasks.
//!
//! The dispatcher acquires a semaphore permit before spawning each task, so at
//! most `workers` tasks are in flight and submission waits while the pool is
//! full. Tasks publish their results on a bounded channel as they finish, which
//! gives the consumer completion order rather than submission order.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinHandle;

use crate::config::MAX_WORKERS;
use crate::dns::Resolver;
use crate::initialization::init_semaphore;
use crate::models::ProbeResult;
use crate::probe::Prober;

use super::task::{probe_target_task, TargetTaskParams, TaskContext};

/// Totals reported by the dispatcher once every task has finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Tasks spawned
    pub submitted: usize,
    /// Tasks that panicked before publishing a result
    pub panicked: usize,
}

/// Fixed-width worker pool running one task per target.
pub struct Coordinator {
    ctx: Arc<TaskContext>,
    workers: usize,
}

impl Coordinator {
    /// Creates a coordinator with a pool of `workers` slots.
    ///
    /// The width is clamped to `1..=MAX_WORKERS`.
    pub fn new(resolver: Resolver, prober: Prober, workers: usize) -> Self {
        Self {
            ctx: Arc::new(TaskContext { resolver, prober }),
            workers: workers.clamp(1, MAX_WORKERS),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Starts probing `targets` in the background.
    ///
    /// Must be called within a Tokio runtime. Results are read from the
    /// returned `ProbeStream` in completion order.
    pub fn dispatch(&self, targets: Vec<String>) -> ProbeStream {
        let (tx, rx) = mpsc::channel(self.workers);
        let live_targets = Arc::new(AtomicUsize::new(0));
        let semaphore = init_semaphore(self.workers);

        let dispatcher = tokio::spawn(dispatch_targets(
            targets,
            semaphore,
            Arc::clone(&self.ctx),
            tx,
            Arc::clone(&live_targets),
        ));

        ProbeStream {
            results: rx,
            live_targets,
            dispatcher,
        }
    }
}

/// Completion-ordered results of a dispatch.
pub struct ProbeStream {
    results: mpsc::Receiver<ProbeResult>,
    live_targets: Arc<AtomicUsize>,
    dispatcher: JoinHandle<DispatchSummary>,
}

impl ProbeStream {
    /// Next finished result, or `None` once every task has finished.
    pub async fn next(&mut self) -> Option<ProbeResult> {
        self.results.recv().await
    }

    /// Targets classified live so far.
    pub fn live_count(&self) -> usize {
        self.live_targets.load(Ordering::SeqCst)
    }

    /// Waits for the dispatcher and returns its totals.
    ///
    /// Call after `next()` has returned `None`.
    pub async fn finish(self) -> DispatchSummary {
        match self.dispatcher.await {
            Ok(summary) => summary,
            Err(e) => {
                log::warn!("Dispatcher task failed: {e:?}");
                DispatchSummary::default()
            }
        }
    }
}

async fn dispatch_targets(
    targets: Vec<String>,
    semaphore: Arc<Semaphore>,
    ctx: Arc<TaskContext>,
    results: mpsc::Sender<ProbeResult>,
    live_targets: Arc<AtomicUsize>,
) -> DispatchSummary {
    let mut tasks = FuturesUnordered::new();
    let mut summary = DispatchSummary::default();

    for target in targets {
        // Blocks while the pool is saturated
        let permit = match Arc::clone(&semaphore).acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => {
                log::warn!("Semaphore closed, skipping target: {target}");
                continue;
            }
        };

        summary.submitted += 1;
        tasks.push(tokio::spawn(probe_target_task(TargetTaskParams {
            target,
            ctx: Arc::clone(&ctx),
            permit,
            results: results.clone(),
            live_targets: Arc::clone(&live_targets),
        })));

        // Reap finished handles so the set stays proportional to the pool width
        while let Some(Some(joined)) = tasks.next().now_or_never() {
            record_join(joined, &mut summary);
        }
    }

    // Close our sender so the stream ends when the last task finishes
    drop(results);

    while let Some(joined) = tasks.next().await {
        record_join(joined, &mut summary);
    }
    summary
}

fn record_join(joined: Result<(), tokio::task::JoinError>, summary: &mut DispatchSummary) {
    if let Err(join_error) = joined {
        summary.panicked += 1;
        log::warn!("Task panicked: {:?}", join_error);
    }
}
