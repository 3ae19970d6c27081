//! Persistent worker pool for SELECTING rounds.
//!
//! Each worker owns a job channel and a reply channel. A round sends the
//! same selected-set snapshot to every worker (fan-out) and then receives
//! exactly one reply from each (fan-in). Workers release the snapshot
//! before replying, so once the fan-in completes the driver holds the only
//! reference again.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender};
use pairsel_core::errors::SelectionError;

use super::scan::{PartitionBest, RoundScanner};
use super::state::SelectedSet;

struct RoundJob {
    round: u64,
    selected: Arc<SelectedSet>,
}

struct RoundReply {
    round: u64,
    outcome: Result<PartitionBest, String>,
}

struct WorkerHandle {
    jobs: Option<Sender<RoundJob>>,
    replies: Receiver<RoundReply>,
    thread: Option<JoinHandle<()>>,
}

/// Fixed-size pool scanning strided partitions of the candidate list.
///
/// Dropping the pool closes every job channel and joins the threads.
pub struct WorkerPool {
    workers: Vec<WorkerHandle>,
    rounds: u64,
}

impl WorkerPool {
    /// Spawn `size` workers (at least one) sharing `scanner`.
    pub fn spawn<S: RoundScanner>(size: usize, scanner: S) -> Result<Self, SelectionError> {
        let size = size.max(1);
        let scanner = Arc::new(scanner);
        let mut pool = Self {
            workers: Vec::with_capacity(size),
            rounds: 0,
        };

        for id in 0..size {
            let (job_tx, job_rx) = bounded::<RoundJob>(1);
            let (reply_tx, reply_rx) = bounded::<RoundReply>(1);
            let scanner = Arc::clone(&scanner);

            // On failure the partially built pool is dropped, which joins
            // the workers spawned so far.
            let thread = thread::Builder::new()
                .name(format!("pairsel-worker-{id}"))
                .spawn(move || worker_loop(id, size, scanner.as_ref(), job_rx, reply_tx))
                .map_err(|e| SelectionError::PoolSpawn {
                    message: e.to_string(),
                })?;

            pool.workers.push(WorkerHandle {
                jobs: Some(job_tx),
                replies: reply_rx,
                thread: Some(thread),
            });
        }

        tracing::debug!(workers = size, "worker pool started");
        Ok(pool)
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }

    /// Rounds dispatched so far.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Run one round against `selected` and merge every partition's best.
    ///
    /// All replies are collected even when one worker fails, so the pool
    /// never holds stale replies. The first failure is returned.
    pub fn run_round(&mut self, selected: &Arc<SelectedSet>) -> Result<PartitionBest, SelectionError> {
        self.rounds += 1;
        let round = self.rounds;

        let mut fault: Option<SelectionError> = None;
        let mut dispatched = vec![false; self.workers.len()];

        for (worker, handle) in self.workers.iter().enumerate() {
            let job = RoundJob {
                round,
                selected: Arc::clone(selected),
            };
            let sent = handle.jobs.as_ref().map(|tx| tx.send(job).is_ok());
            if sent == Some(true) {
                dispatched[worker] = true;
            } else if fault.is_none() {
                fault = Some(worker_fault(worker, round, "worker is no longer running"));
            }
        }

        let mut merged = PartitionBest::empty();
        for (worker, handle) in self.workers.iter().enumerate() {
            if !dispatched[worker] {
                continue;
            }
            let failure = match handle.replies.recv() {
                Ok(RoundReply {
                    round: replied,
                    outcome: Ok(best),
                }) if replied == round => {
                    merged.merge(best);
                    None
                }
                Ok(RoundReply {
                    outcome: Err(message),
                    ..
                }) => Some(message),
                Ok(RoundReply { round: replied, .. }) => {
                    Some(format!("replied for round {replied}"))
                }
                Err(_) => Some("worker disconnected before replying".to_string()),
            };
            if let Some(message) = failure {
                tracing::error!(worker, round, %message, "worker fault");
                if fault.is_none() {
                    fault = Some(worker_fault(worker, round, &message));
                }
            }
        }

        match fault {
            Some(err) => Err(err),
            None => Ok(merged),
        }
    }

    /// Stop all workers and wait for them to exit.
    pub fn shutdown(self) {
        drop(self);
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        for handle in &mut self.workers {
            handle.jobs.take();
        }
        for handle in &mut self.workers {
            if let Some(thread) = handle.thread.take() {
                // Panics are already reported through the reply channel.
                let _ = thread.join();
            }
        }
        tracing::debug!(rounds = self.rounds, "worker pool stopped");
    }
}

fn worker_loop(
    id: usize,
    stride: usize,
    scanner: &dyn RoundScanner,
    jobs: Receiver<RoundJob>,
    replies: Sender<RoundReply>,
) {
    while let Ok(RoundJob { round, selected }) = jobs.recv() {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| scanner.scan(&selected, id, stride)))
            .map_err(panic_message);
        drop(selected);

        let failed = outcome.is_err();
        if replies.send(RoundReply { round, outcome }).is_err() || failed {
            break;
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {s}")
    } else {
        "panicked".to_string()
    }
}

fn worker_fault(worker: usize, round: u64, message: &str) -> SelectionError {
    SelectionError::WorkerFault {
        worker,
        round,
        message: message.to_string(),
    }
}
