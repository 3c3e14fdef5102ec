//! Back-office commands.

use pawly_client::ApiError;
use pawly_client::api::types::{NewBlogPost, NewDoctor, NewProduct};
use pawly_core::{AppointmentId, DoctorId, PetId, PostId, ProductId, format_amount};
use rust_decimal::Decimal;

use super::Context;

/// Show back-office dashboard counters.
pub async fn stats(ctx: &Context) -> Result<(), ApiError> {
    let stats = ctx.api.get_admin_stats().await?;
    tracing::info!("Dashboard");
    tracing::info!("  orders: {}", stats.total_orders.unwrap_or(0));
    tracing::info!("  products: {}", stats.total_products.unwrap_or(0));
    tracing::info!("  appointments: {}", stats.total_appointments.unwrap_or(0));
    tracing::info!("  users: {}", stats.total_users.unwrap_or(0));
    Ok(())
}

/// Add a product to the catalog.
pub async fn add_product(
    ctx: &Context,
    name: String,
    price: Decimal,
    category: Option<String>,
    description: Option<String>,
) -> Result<(), ApiError> {
    let product = ctx
        .api
        .create_product(&NewProduct {
            name,
            description,
            price,
            image: None,
            category,
        })
        .await?;
    tracing::info!(
        "Added product #{}: {} ({})",
        product.id,
        product.name,
        format_amount(product.price)
    );
    Ok(())
}

/// Remove a product from the catalog.
pub async fn remove_product(ctx: &Context, id: i64) -> Result<(), ApiError> {
    ctx.api.delete_product(ProductId::new(id)).await?;
    tracing::info!("Removed product #{id}");
    Ok(())
}

/// Add a doctor to the clinic roster.
pub async fn add_doctor(
    ctx: &Context,
    name: String,
    specialization: Option<String>,
) -> Result<(), ApiError> {
    let doctor = ctx
        .api
        .create_doctor(&NewDoctor {
            name,
            specialization,
            bio: None,
            image: None,
        })
        .await?;
    tracing::info!("Added doctor #{}: {}", doctor.id, doctor.name);
    Ok(())
}

/// Remove a doctor from the clinic roster.
pub async fn remove_doctor(ctx: &Context, id: i64) -> Result<(), ApiError> {
    ctx.api.delete_doctor(DoctorId::new(id)).await?;
    tracing::info!("Removed doctor #{id}");
    Ok(())
}

/// List adoption listings awaiting approval.
pub async fn pending_adoptions(ctx: &Context) -> Result<(), ApiError> {
    let pets = ctx.api.get_pending_pets().await?;
    tracing::info!("{} listings awaiting approval", pets.len());
    for pet in pets {
        tracing::info!(
            "  #{} {} - {}",
            pet.id,
            pet.name,
            pet.species.as_deref().unwrap_or("unknown species"),
        );
    }
    Ok(())
}

/// Approve a pending adoption listing.
pub async fn approve_adoption(ctx: &Context, id: i64) -> Result<(), ApiError> {
    ctx.api.approve_adoption(PetId::new(id)).await?;
    tracing::info!("Approved adoption listing #{id}");
    Ok(())
}

/// List every booked appointment.
pub async fn all_appointments(ctx: &Context) -> Result<(), ApiError> {
    let appointments = ctx.api.get_all_appointments().await?;
    tracing::info!("{} appointments", appointments.len());
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

/// Set the status of an appointment.
pub async fn set_appointment_status(ctx: &Context, id: i64, status: &str) -> Result<(), ApiError> {
    ctx.api
        .update_appointment_status(AppointmentId::new(id), status)
        .await?;
    tracing::info!("Appointment #{id} is now {status}");
    Ok(())
}

/// Publish a blog post.
pub async fn add_post(
    ctx: &Context,
    title: String,
    content: String,
    author: Option<String>,
    category: Option<String>,
) -> Result<(), ApiError> {
    let post = ctx
        .api
        .create_post(&NewBlogPost {
            title,
            content,
            excerpt: None,
            author,
            image: None,
            category,
        })
        .await?;
    tracing::info!("Published post #{}: {}", post.id, post.title);
    Ok(())
}

/// Delete a blog post.
pub async fn remove_post(ctx: &Context, id: i64) -> Result<(), ApiError> {
    ctx.api.delete_post(PostId::new(id)).await?;
    tracing::info!("Removed post #{id}");
    Ok(())
}

/// List submitted volunteer applications.
pub async fn volunteers(ctx: &Context) -> Result<(), ApiError> {
    let volunteers = ctx.api.get_volunteers().await?;
    tracing::info!("{} volunteer applications", volunteers.len());
    for volunteer in volunteers {
        tracing::info!(
            "  #{} {} {} <{}> - {}",
            volunteer.id,
            volunteer.first_name,
            volunteer.last_name,
            volunteer.email,
            volunteer.interest.as_deref().unwrap_or("any area"),
        );
    }
    Ok(())
}
