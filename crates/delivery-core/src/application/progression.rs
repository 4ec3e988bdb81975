use delivery_types::domain::order::{OrderId, OrderStatus};
use delivery_types::ports::order_store::OrderStore;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressionOutcome {
    /// The order reached `Delivered`.
    Completed,
    /// Torn down before completion; `at` is the status left in place.
    Cancelled { at: OrderStatus },
    /// The order id was not (or no longer) in the store.
    OrderMissing,
}

/// Owner of one running status progression.
///
/// Calling [`ProgressionHandle::cancel`] or dropping the handle stops the
/// run at its next suspension point. Status already advanced is kept.
pub struct ProgressionHandle {
    order_id: OrderId,
    cancel: watch::Sender<bool>,
    outcome: watch::Receiver<Option<ProgressionOutcome>>,
    task: JoinHandle<()>,
}

impl ProgressionHandle {
    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn cancel(&self) {
        self.cancel.send_replace(true);
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.borrow().is_some() || self.task.is_finished()
    }

    /// Outcome of the run, once it has ended.
    pub fn outcome(&self) -> Option<ProgressionOutcome> {
        *self.outcome.borrow()
    }

    /// A waiter that does not borrow the handle, so it can be awaited
    /// while the handle stays registered elsewhere.
    pub fn waiter(&self) -> ProgressionWaiter {
        ProgressionWaiter(self.outcome.clone())
    }

    pub async fn wait(&self) -> Result<ProgressionOutcome, AppError> {
        self.waiter().wait().await
    }
}

#[derive(Clone)]
pub struct ProgressionWaiter(watch::Receiver<Option<ProgressionOutcome>>);

impl ProgressionWaiter {
    pub async fn wait(mut self) -> Result<ProgressionOutcome, AppError> {
        let outcome = self
            .0
            .wait_for(Option::is_some)
            .await
            .map_err(|_| AppError::Internal(anyhow::anyhow!("progression task ended early")))?;
        (*outcome).ok_or_else(|| AppError::Internal(anyhow::anyhow!("progression outcome unset")))
    }
}

/// Starts advancing `order_id` one status per `step` until it is delivered.
///
/// Must be called from within a tokio runtime.
pub fn spawn_progression<S>(store: S, order_id: OrderId, step: Duration) -> ProgressionHandle
where
    S: OrderStore + Clone,
{
    let (cancel_tx, cancel_rx) = watch::channel(false);
    let (outcome_tx, outcome_rx) = watch::channel(None);
    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("status_progression", %run_id, order_id = %order_id);
    let progression = run(store, order_id.clone(), step, cancel_rx);
    let task = tokio::spawn(
        async move {
            let outcome = progression.await;
            outcome_tx.send_replace(Some(outcome));
        }
        .instrument(span),
    );
    ProgressionHandle {
        order_id,
        cancel: cancel_tx,
        outcome: outcome_rx,
        task,
    }
}

async fn run<S: OrderStore>(
    store: S,
    order_id: OrderId,
    step: Duration,
    mut cancel: watch::Receiver<bool>,
) -> ProgressionOutcome {
    tracing::debug!(step_ms = step.as_millis() as u64, "progression started");
    loop {
        let Some(current) = store.get(&order_id).map(|o| o.status) else {
            tracing::warn!("order missing, progression stopped");
            return ProgressionOutcome::OrderMissing;
        };
        let Some(next) = current.next() else {
            tracing::info!("order delivered, progression finished");
            return ProgressionOutcome::Completed;
        };

        tokio::select! {
            biased;
            _ = cancelled(&mut cancel) => {
                tracing::info!(status = %current, "progression cancelled");
                return ProgressionOutcome::Cancelled { at: current };
            }
            _ = tokio::time::sleep(step) => {}
        }

        // Forward-only write: a direct update that got ahead meanwhile wins.
        match store.advance_order_status(&order_id, next) {
            None => {
                tracing::warn!("order missing, progression stopped");
                return ProgressionOutcome::OrderMissing;
            }
            Some(o) if o.status > next => {
                tracing::debug!(status = %o.status, "order already past next step");
            }
            Some(_) => tracing::info!(status = %next, "order status advanced"),
        }
    }
}

// Resolves once cancel is requested or the owning handle is gone.
async fn cancelled(rx: &mut watch::Receiver<bool>) {
    while !*rx.borrow_and_update() {
        if rx.changed().await.is_err() {
            return;
        }
    }
}
