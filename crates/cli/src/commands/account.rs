//! Account, session, and profile commands.

use pawly_client::ApiError;
use pawly_client::api::types::RegisterInput;
use pawly_core::{Email, format_amount};

use super::Context;

/// Log in and persist the session.
pub async fn login(ctx: &mut Context, email: &Email, password: &str) -> Result<(), ApiError> {
    let session = ctx.sessions.login(email.as_str(), password).await?;
    tracing::info!(
        "Logged in as {} ({:?})",
        session.email.as_deref().unwrap_or_else(|| email.as_str()),
        session.user_role(),
    );
    Ok(())
}

/// Log out and clear the stored session.
pub fn logout(ctx: &mut Context) {
    ctx.sessions.logout();
    tracing::info!("Logged out");
}

/// Register a new account.
pub async fn register(
    ctx: &Context,
    name: String,
    email: Email,
    password: String,
) -> Result<(), ApiError> {
    ctx.api
        .register(&RegisterInput {
            name,
            email: email.as_str().to_owned(),
            password,
        })
        .await?;
    tracing::info!("Registered {email}; log in with `pawly account login`");
    Ok(())
}

/// Show the current session plus order and appointment history.
///
/// When an email is known, the profile record is refetched and merged into
/// the session first, so the display reflects the backend.
pub async fn profile(ctx: &mut Context) -> Result<(), ApiError> {
    if let Some(email) = ctx
        .sessions
        .current()
        .and_then(|session| session.email.clone())
    {
        let fresh = ctx.api.get_profile(&email).await?;
        ctx.sessions.update_session(&fresh);
    }

    let Some(session) = ctx.sessions.current() else {
        tracing::info!("Not logged in");
        return Ok(());
    };

    tracing::info!("Profile");
    if let Some(name) = &session.name {
        tracing::info!("  name: {name}");
    }
    if let Some(email) = &session.email {
        tracing::info!("  email: {email}");
    }
    if let Some(phone) = &session.phone_number {
        tracing::info!("  phone: {phone}");
    }
    tracing::info!("  role: {:?}", session.user_role());

    let Some(email) = &session.email else {
        return Ok(());
    };

    let orders = ctx.api.get_my_orders(email).await?;
    tracing::info!("Orders: {}", orders.len());
    for order in orders {
        tracing::info!(
            "  #{} {} ({})",
            order.id,
            format_amount(order.total_amount),
            order.status.as_deref().unwrap_or("pending"),
        );
    }

    let appointments = ctx.api.get_my_appointments(email).await?;
    tracing::info!("Appointments: {}", appointments.len());
    for appt in appointments {
        tracing::info!(
            "  #{} {} at {} for {} ({})",
            appt.id,
            appt.date,
            appt.time,
            appt.pet_name,
            appt.status.as_deref().unwrap_or("pending"),
        );
    }
    Ok(())
}

/// Update profile fields: send the partial to the backend, then merge the
/// server's record into the session.
pub async fn update(
    ctx: &mut Context,
    name: Option<String>,
    phone: Option<String>,
) -> Result<(), ApiError> {
    if name.is_none() && phone.is_none() {
        tracing::info!("Nothing to update");
        return Ok(());
    }

    let Some(email) = ctx
        .sessions
        .current()
        .and_then(|session| session.email.clone())
    else {
        tracing::info!("Not logged in; nothing updated");
        return Ok(());
    };

    let mut partial = serde_json::Map::new();
    if let Some(name) = name {
        partial.insert("name".to_owned(), name.into());
    }
    if let Some(phone) = phone {
        partial.insert("phoneNumber".to_owned(), phone.into());
    }

    let updated = ctx.api.update_profile(&email, &partial.into()).await?;
    ctx.sessions.update_session(&updated);
    tracing::info!("Profile updated for {email}");
    Ok(())
}
