//! Checkout route handlers.
//!
//! `GET /checkout` shows the billing form next to the order summary.
//! `POST /checkout` validates the form and places the order: the cart is reset,
//! a success toast is queued and the visitor is sent to the home page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use super::{LoadingTemplate, PageChrome};
use crate::checkout::{
    self, BillingField, BillingForm, FieldErrors, OrderSummary, PaymentMethod, SubmitOutcome,
};
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::Shop;
use crate::models::notification::push_notification;
use crate::shop::{ShopContext, ShopStore};

/// One billing input with its current value and error.
#[derive(Clone, Debug)]
pub struct FieldView {
    pub name: &'static str,
    pub label: Option<&'static str>,
    pub placeholder: Option<&'static str>,
    pub input_type: &'static str,
    pub value: String,
    pub error: Option<&'static str>,
    pub required: bool,
    pub half_width: bool,
    pub multiline: bool,
}

impl FieldView {
    fn new(field: BillingField, form: &BillingForm, errors: &FieldErrors) -> Self {
        Self {
            name: field.name(),
            label: field.label(),
            placeholder: field.placeholder(),
            input_type: field.input_type(),
            value: form.value(field).to_string(),
            error: errors.get(field),
            required: field.is_required(),
            half_width: field.is_name(),
            multiline: field == BillingField::AdditionalInfo,
        }
    }
}

/// Payment option display data. The choice is not submitted.
#[derive(Clone, Debug)]
pub struct PaymentMethodView {
    pub id: &'static str,
    pub label: &'static str,
}

/// Summary row display data.
#[derive(Clone, Debug)]
pub struct SummaryLineView {
    pub title: String,
    pub price: String,
    pub quantity: u32,
    pub subtotal: String,
}

/// Order summary display data.
#[derive(Clone, Debug)]
pub struct SummaryView {
    pub lines: Vec<SummaryLineView>,
    pub subtotal: String,
    pub total: String,
}

impl From<OrderSummary> for SummaryView {
    fn from(summary: OrderSummary) -> Self {
        let total = summary.total.to_string();
        Self {
            lines: summary
                .lines
                .into_iter()
                .map(|line| SummaryLineView {
                    title: line.title,
                    price: line.unit_price.to_string(),
                    quantity: line.quantity,
                    subtotal: line.subtotal.to_string(),
                })
                .collect(),
            subtotal: total.clone(),
            total,
        }
    }
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub chrome: PageChrome,
    pub fields: Vec<FieldView>,
    pub payment_methods: Vec<PaymentMethodView>,
    pub summary: SummaryView,
}

impl CheckoutTemplate {
    fn new(chrome: PageChrome, shop: &ShopContext, form: &BillingForm, errors: &FieldErrors) -> Self {
        Self {
            chrome,
            fields: BillingField::ALL
                .into_iter()
                .map(|field| FieldView::new(field, form, errors))
                .collect(),
            payment_methods: PaymentMethod::ALL
                .into_iter()
                .map(|method| PaymentMethodView {
                    id: method.id(),
                    label: method.label(),
                })
                .collect(),
            summary: OrderSummary::from_store(shop).into(),
        }
    }
}

/// Display the checkout page.
#[instrument(skip(session, shop))]
pub async fn show(session: Session, Shop(shop): Shop) -> Response {
    let Some(shop) = shop else {
        return LoadingTemplate::new().into_response();
    };

    let chrome = PageChrome::load(&shop, &session).await;
    CheckoutTemplate::new(
        chrome,
        &shop,
        &BillingForm::default(),
        &FieldErrors::default(),
    )
    .into_response()
}

/// Submit the checkout form.
///
/// Invalid billing details re-render the form with inline errors (422). An
/// empty cart re-renders the form with an error toast. Otherwise the cart is
/// reset and the visitor is redirected home.
#[instrument(skip(session, shop, form))]
pub async fn place_order(
    session: Session,
    Shop(shop): Shop,
    Form(form): Form<BillingForm>,
) -> Result<Response> {
    let Some(mut shop) = shop else {
        return Ok(LoadingTemplate::new().into_response());
    };

    let items = shop.get_total_cart_items();
    let total = shop.get_total_cart_amount();
    let outcome = checkout::submit(&form, &mut shop);
    let notification = outcome.notification();

    match outcome {
        SubmitOutcome::Invalid(errors) => {
            tracing::debug!(error_count = errors.len(), "Checkout form rejected");
            let chrome = PageChrome::load(&shop, &session).await;
            let page = CheckoutTemplate::new(chrome, &shop, &form, &errors);
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        SubmitOutcome::CartEmpty => {
            tracing::debug!("Checkout attempted with an empty cart");
            let mut chrome = PageChrome::load(&shop, &session).await;
            chrome.notifications.extend(notification);
            let page = CheckoutTemplate::new(chrome, &shop, &form, &FieldErrors::default());
            Ok(page.into_response())
        }
        SubmitOutcome::Placed => {
            shop.save(&session).await?;
            if let Some(notification) = notification {
                push_notification(&session, notification).await?;
            }
            tracing::info!(items, total = %total, "Order placed");
            add_breadcrumb("checkout", "Order placed", None);
            Ok(Redirect::to("/").into_response())
        }
    }
}
