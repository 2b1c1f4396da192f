//! Orders view controller.
//!
//! Owns the view's mutable state (order list, loading flag, error message)
//! and drives the load and create flows against an [`OrdersApi`]. The
//! state is owned by a single controller value per request; concurrent
//! loads are not deduplicated (last write wins).

use csom_core::{Order, OrderDraft};

use super::{OrdersApi, OrdersError};

/// Derived three-state view status.
///
/// Transitions: `Loading` to `Loaded` on success, `Loading` to `Error` on
/// failure. There is no retry path short of a fresh controller; an empty
/// collection is `Loaded` with zero items, not a distinct state. A
/// recorded error takes precedence over a previously loaded list.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<'a> {
    Loading,
    Loaded(&'a [Order]),
    Error(&'a str),
}

/// Controller for the orders list view.
#[derive(Debug, Default)]
pub struct OrdersView {
    orders: Vec<Order>,
    loading: bool,
    error: Option<String>,
}

impl OrdersView {
    /// A fresh view, in the loading state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            orders: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// Current view status.
    #[must_use]
    pub fn state(&self) -> ViewState<'_> {
        if let Some(error) = &self.error {
            ViewState::Error(error)
        } else if self.loading {
            ViewState::Loading
        } else {
            ViewState::Loaded(&self.orders)
        }
    }

    /// The order list as last loaded.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Load the order list, ending `Loaded` or `Error`.
    pub async fn load<A: OrdersApi>(&mut self, api: &A, status: Option<&str>) {
        self.loading = true;
        match api.fetch_orders(status).await {
            Ok(orders) => {
                self.orders = orders;
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
        self.loading = false;
    }

    /// Create an order and optimistically append it to the list.
    ///
    /// On success the created order is appended (no re-fetch, no dedup
    /// against server-assigned identity) and returned. On failure the list
    /// is left unchanged, the error is recorded, and the failure
    /// propagates to the caller so a form can react to it.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`OrdersError`] on any API failure.
    pub async fn create<A: OrdersApi>(
        &mut self,
        api: &A,
        draft: &OrderDraft,
    ) -> Result<Order, OrdersError> {
        match api.create_order(draft).await {
            Ok(order) => {
                self.orders.push(order.clone());
                Ok(order)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}
