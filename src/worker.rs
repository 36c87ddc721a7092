//! Single-use worker for offloaded diffs.
//!
//! One request, one response, one thread:
//!
//! ```text
//! caller                       worker thread
//!   | -- WorkerRequest (by value) -->  |
//!   |                                  | hash items, build table, backtrace
//!   | <-- WorkerResponse (oneshot) --  |
//!   |                                  x exits
//! ```
//!
//! Nothing is shared between the two sides: the request owns copies of both
//! sequences and the comparator, the response owns the operations. The
//! caller awaits the oneshot receiver, so it is suspended rather than blocked
//! and no particular async runtime is required.
//!
//! Only available with the `async` feature.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::thread;

use futures_channel::oneshot;
use tracing::debug;

use crate::algo::calculate_by;
use crate::comparator::Comparator;
use crate::error::{ListDiffError, ListDiffResult};
use crate::operation::Operation;

const WORKER_THREAD_NAME: &str = "list-diff-worker";

/// Everything a worker needs, moved across the thread boundary.
#[derive(Debug)]
pub struct WorkerRequest<T, C> {
    pub old: Vec<T>,
    pub new: Vec<T>,
    pub comparator: C,
}

/// The single message a worker sends back.
pub type WorkerResponse<T> = ListDiffResult<Vec<Operation<T>>>;

impl<T, C> WorkerRequest<T, C>
where
    T: Clone,
    C: Comparator<T>,
{
    pub fn new(old: Vec<T>, new: Vec<T>, comparator: C) -> Self {
        Self { old, new, comparator }
    }

    /// Compute the edit script. Runs on the worker thread.
    ///
    /// Hashes are computed once per item; a hash mismatch settles a pair
    /// without calling `equals`. Since equal items hash equally the result
    /// is the same as comparing with `equals` alone.
    fn handle(self) -> Vec<Operation<T>> {
        let Self { old, new, comparator } = self;
        let old_hashes: Vec<u64> = old.iter().map(|item| comparator.hash(item)).collect();
        let new_hashes: Vec<u64> = new.iter().map(|item| comparator.hash(item)).collect();

        calculate_by(&old, &new, |i, j| {
            old_hashes[i] == new_hashes[j] && comparator.equals(&old[i], &new[j])
        })
    }
}

/// Run `request` on a freshly spawned worker and await its response.
///
/// The worker is never retried. A failed spawn, a panic in the worker or a
/// lost response fails the whole computation.
pub async fn run<T, C>(request: WorkerRequest<T, C>) -> ListDiffResult<Vec<Operation<T>>>
where
    T: Clone + Send + 'static,
    C: Comparator<T> + Send + 'static,
{
    let (tx, rx) = oneshot::channel::<WorkerResponse<T>>();
    let old_len = request.old.len();
    let new_len = request.new.len();

    thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_string())
        .spawn(move || {
            let response = panic::catch_unwind(AssertUnwindSafe(|| request.handle()))
                .map_err(|payload| ListDiffError::WorkerPanicked(panic_message(payload.as_ref())));
            // The receiver is gone if the caller dropped the future.
            let _ = tx.send(response);
        })
        .map_err(|err| {
            debug!(error = %err, "failed to spawn diff worker");
            ListDiffError::spawn(err)
        })?;

    debug!(old_len, new_len, "diff worker spawned");
    receive(rx).await
}

/// Await the worker's single response.
async fn receive<T>(rx: oneshot::Receiver<WorkerResponse<T>>) -> WorkerResponse<T> {
    let response = match rx.await {
        Ok(response) => response,
        Err(oneshot::Canceled) => Err(ListDiffError::WorkerDisconnected),
    };

    match &response {
        Ok(ops) => debug!(ops = ops.len(), "diff worker finished"),
        Err(err) => debug!(error = %err, "diff worker failed"),
    }
    response
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
