use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use delivery_types::domain::order::{Order, OrderId, OrderStatus};
use delivery_types::ports::order_store::OrderStore;
use rust_decimal::Decimal;
use serde::Serialize;
use std::time::Duration;

use crate::application::progression::{spawn_progression, ProgressionHandle, ProgressionOutcome};
use crate::config::Config;
use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TimelineStep {
    pub status: OrderStatus,
    pub reached: bool,
}

/// What the tracking screen shows for one order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TrackingView {
    pub order_id: OrderId,
    pub short_id: String,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub timeline: Vec<TimelineStep>,
    /// A progression is still running for this order.
    pub updating: bool,
}

impl TrackingView {
    fn new(order: &Order, updating: bool) -> Self {
        let timeline = OrderStatus::ALL
            .iter()
            .map(|&status| TimelineStep {
                status,
                reached: status <= order.status,
            })
            .collect();
        Self {
            order_id: order.id.clone(),
            short_id: order.id.short().to_owned(),
            total_amount: order.total_amount,
            status: order.status,
            timeline,
            updating,
        }
    }
}

/// Drives status progression for tracked orders, at most one run per order.
pub struct TrackingService<O: OrderStore + Clone> {
    store: O,
    step: Duration,
    active: DashMap<OrderId, ProgressionHandle>,
}

impl<O: OrderStore + Clone> TrackingService<O> {
    pub fn new(store: O, config: &Config) -> Self {
        Self {
            store,
            step: config.status_step,
            active: DashMap::new(),
        }
    }

    fn find(&self, id: &OrderId) -> Result<Order, AppError> {
        self.store
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("order {}", id)))
    }

    fn is_updating(&self, id: &OrderId) -> bool {
        self.active.get(id).is_some_and(|h| !h.is_finished())
    }

    /// Brings an order into view, starting its progression unless it is
    /// delivered or already being driven.
    pub fn track(&self, id: &OrderId) -> Result<TrackingView, AppError> {
        self.prune();
        let order = self.find(id)?;
        if !order.status.is_terminal() {
            match self.active.entry(id.clone()) {
                Entry::Occupied(e) if !e.get().is_finished() => {
                    tracing::debug!(order_id = %id, "progression already running");
                }
                Entry::Occupied(mut e) => {
                    e.insert(spawn_progression(self.store.clone(), id.clone(), self.step));
                    tracing::info!(order_id = %id, "progression restarted");
                }
                Entry::Vacant(e) => {
                    e.insert(spawn_progression(self.store.clone(), id.clone(), self.step));
                    tracing::info!(order_id = %id, status = %order.status, "progression started");
                }
            }
        }
        Ok(TrackingView::new(&order, self.is_updating(id)))
    }

    pub fn view(&self, id: &OrderId) -> Result<TrackingView, AppError> {
        let order = self.find(id)?;
        Ok(TrackingView::new(&order, self.is_updating(id)))
    }

    /// Tears down the progression for `id`. Returns whether one was registered.
    pub fn stop(&self, id: &OrderId) -> bool {
        match self.active.remove(id) {
            Some((_, handle)) => {
                handle.cancel();
                tracing::info!(order_id = %handle.order_id(), "tracking stopped");
                true
            }
            None => false,
        }
    }

    /// Waits for the progression of `id` to end; `None` if none was started.
    pub async fn wait(&self, id: &OrderId) -> Result<Option<ProgressionOutcome>, AppError> {
        // The map guard must not be held across the await.
        let waiter = self.active.get(id).map(|h| h.waiter());
        let Some(waiter) = waiter else {
            return Ok(None);
        };
        let outcome = waiter.wait().await?;
        self.active.remove_if(id, |_, h| h.is_finished());
        Ok(Some(outcome))
    }

    /// Number of progressions still running.
    pub fn active_count(&self) -> usize {
        self.prune();
        self.active.len()
    }

    // Finished runs hold no resources worth keeping; drop their handles.
    fn prune(&self) {
        self.active.retain(|_, h| !h.is_finished());
    }

    /// Trusted direct status update. Moving backwards is rejected.
    pub fn set_status(&self, id: &OrderId, status: OrderStatus) -> Result<Order, AppError> {
        let updated = self
            .store
            .advance_order_status(id, status)
            .ok_or_else(|| AppError::NotFound(format!("order {}", id)))?;
        if updated.status > status {
            return Err(AppError::StatusRegression {
                id: id.to_string(),
                from: updated.status,
                to: status,
            });
        }
        tracing::info!(order_id = %id, status = %status, "status set directly");
        Ok(updated)
    }
}
