//! Catalog, cart, and checkout commands.

use pawly_client::ApiError;
use pawly_client::api::types::OrderInput;
use pawly_core::{ProductId, format_amount};

use super::Context;

/// Email used for guest checkout when nobody is logged in.
const GUEST_EMAIL: &str = "guest@example.com";

/// List all products.
pub async fn list_products(ctx: &Context) -> Result<(), ApiError> {
    let products = ctx.api.get_products().await?;
    tracing::info!("{} products", products.len());
    for product in products {
        tracing::info!(
            "  #{} {} - {} [{}]",
            product.id,
            product.name,
            format_amount(product.price),
            product.category.as_deref().unwrap_or("uncategorized"),
        );
    }
    Ok(())
}

/// Show one product.
pub async fn show_product(ctx: &Context, id: i64) -> Result<(), ApiError> {
    let product = ctx.api.get_product(ProductId::new(id)).await?;
    tracing::info!("#{} {}", product.id, product.name);
    tracing::info!("  price: {}", format_amount(product.price));
    if let Some(category) = &product.category {
        tracing::info!("  category: {category}");
    }
    if let Some(description) = &product.description {
        tracing::info!("  {description}");
    }
    Ok(())
}

/// Fetch a product and add it to the cart.
pub async fn cart_add(ctx: &mut Context, id: i64, quantity: u32) -> Result<(), ApiError> {
    let product = ctx.api.get_product(ProductId::new(id)).await?;
    ctx.cart.add_item(&product, quantity);

    let snapshot = ctx.cart.snapshot();
    tracing::info!(
        "Added {} x{quantity}; cart now {} items, {}",
        product.name,
        snapshot.item_count,
        snapshot.total_display(),
    );
    Ok(())
}

/// Remove a product from the cart.
pub fn cart_remove(ctx: &mut Context, id: i64) {
    ctx.cart.remove_item(ProductId::new(id));
    let snapshot = ctx.cart.snapshot();
    tracing::info!(
        "Cart now {} items, {}",
        snapshot.item_count,
        snapshot.total_display()
    );
}

/// Set the quantity for a product in the cart.
pub fn cart_set_quantity(ctx: &mut Context, id: i64, quantity: u32) {
    ctx.cart.set_quantity(ProductId::new(id), quantity);
    let snapshot = ctx.cart.snapshot();
    tracing::info!(
        "Cart now {} items, {}",
        snapshot.item_count,
        snapshot.total_display()
    );
}

/// Print the cart contents and totals.
pub fn cart_show(ctx: &Context) {
    let snapshot = ctx.cart.snapshot();
    if snapshot.is_empty() {
        tracing::info!("Cart is empty");
        return;
    }
    for item in &snapshot.items {
        tracing::info!(
            "  #{} {} x{} @ {} = {}",
            item.product_id,
            item.name,
            item.quantity,
            format_amount(item.unit_price),
            format_amount(item.line_total()),
        );
    }
    tracing::info!(
        "{} items, total {}",
        snapshot.item_count,
        snapshot.total_display()
    );
}

/// Empty the cart.
pub fn cart_clear(ctx: &mut Context) {
    ctx.cart.clear();
    tracing::info!("Cart cleared");
}

/// Place an order from the current cart, then clear it.
///
/// Uses the logged-in user's email, falling back to guest checkout.
pub async fn checkout(ctx: &mut Context) -> Result<(), ApiError> {
    let snapshot = ctx.cart.snapshot();
    if snapshot.is_empty() {
        tracing::info!("Cart is empty; nothing to order");
        return Ok(());
    }

    let email = ctx
        .sessions
        .current()
        .and_then(|session| session.email.clone())
        .unwrap_or_else(|| GUEST_EMAIL.to_owned());

    let input = OrderInput::from_snapshot(&snapshot);
    let order = ctx.api.create_order(&input, &email).await?;

    // The cart empties only after the backend accepts the order.
    ctx.cart.clear();
    tracing::info!(
        "Order #{} confirmed for {email}: {}",
        order.id,
        format_amount(order.total_amount)
    );
    Ok(())
}
