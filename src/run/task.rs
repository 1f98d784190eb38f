//! Per-target task processing.
//!
//! One task per target: classify/resolve, then probe HTTP, then HTTPS, then
//! publish the composite result. Each check is independently bounded by the
//! per-check timeout, and no check's failure skips another.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, OwnedSemaphorePermit};

use crate::dns::Resolver;
use crate::models::{ProbeResult, Protocol};
use crate::probe::Prober;

/// Shared, read-only collaborators handed to every task.
pub struct TaskContext {
    pub resolver: Resolver,
    pub prober: Prober,
}

/// Everything a spawned target task owns.
pub struct TargetTaskParams {
    pub target: String,
    pub ctx: Arc<TaskContext>,
    pub permit: OwnedSemaphorePermit,
    pub results: mpsc::Sender<ProbeResult>,
    pub live_targets: Arc<AtomicUsize>,
}

/// Runs the three checks for one target and assembles its result.
pub async fn probe_target(target: &str, ctx: &TaskContext) -> ProbeResult {
    let resolution = ctx.resolver.classify(target).await;
    let http = ctx.prober.probe(&resolution.target, Protocol::Http).await;
    let https = ctx.prober.probe(&resolution.target, Protocol::Https).await;
    ProbeResult::new(
        resolution.target,
        resolution.address,
        http.status(),
        https.status(),
    )
}

/// Process a single target task.
///
/// Spawned as a Tokio task per target. The pool permit is held until the
/// result has been handed to the consumer, so a slow consumer throttles the
/// pool rather than letting results pile up.
pub async fn probe_target_task(params: TargetTaskParams) {
    let TargetTaskParams {
        target,
        ctx,
        permit: _permit, // Hold permit until task completes
        results,
        live_targets,
    } = params;

    let result = probe_target(&target, &ctx).await;

    if result.is_live() {
        live_targets.fetch_add(1, Ordering::SeqCst);
    }
    log::debug!(
        "Finished {target}: dns={:?} http={:?} https={:?} live={}",
        result.dns(),
        result.http_status(),
        result.https_status(),
        result.is_live()
    );

    if results.send(result).await.is_err() {
        log::debug!("Result consumer gone, dropping result for {target}");
    }
}
