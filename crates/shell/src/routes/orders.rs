//! Orders routes: the native orders view and the create form.
//!
//! The request flow is token-then-API: each request acquires a token
//! outcome from the provider, builds an orders client carrying it, and
//! drives the view controller. List failures render as the view's error
//! state; create failures propagate as `AppError` so the form sees the
//! rejection.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect};
use axum::Form;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use csom_core::{OrderDraft, OrderDraftItem, ProductId};

use crate::error::Result;
use crate::filters;
use crate::orders::view::{OrdersView, ViewState};
use crate::state::AppState;

#[derive(Template, WebTemplate)]
#[template(path = "orders.html")]
struct OrdersTemplate<'a> {
    state: ViewState<'a>,
}

/// Query parameters for the orders list.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Optional status filter, passed through to the orders API verbatim.
    status: Option<String>,
}

/// GET `/orders` - load and render the orders list.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let token = state.tokens().acquire_token().await;
    let client = state.orders_client(token);

    let mut view = OrdersView::new();
    view.load(&client, params.status.as_deref()).await;

    OrdersTemplate { state: view.state() }.into_response()
}

/// Create form payload: a single-line draft.
#[derive(Debug, Deserialize)]
pub struct CreateOrderForm {
    product_id: String,
    quantity: u32,
    price: Decimal,
}

/// POST `/orders/create` - validate the draft, create, and re-render.
///
/// On success redirects back to the orders list (which re-fetches); on
/// failure the error propagates as an `AppError` response.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<CreateOrderForm>,
) -> Result<impl IntoResponse> {
    let draft = OrderDraft::new(vec![OrderDraftItem {
        product_id: ProductId::new(form.product_id),
        quantity: form.quantity,
        price: form.price,
    }]);
    draft.validate()?;

    let token = state.tokens().acquire_token().await;
    let client = state.orders_client(token);

    let mut view = OrdersView::new();
    let created = view.create(&client, &draft).await?;
    tracing::info!(order_id = %created.id, "Order created");

    Ok(Redirect::to("/orders"))
}
