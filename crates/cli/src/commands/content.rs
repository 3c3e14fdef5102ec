//! Adoption listing, volunteer, and blog commands.

use pawly_client::ApiError;
use pawly_client::api::types::VolunteerApplication;
use pawly_core::{PetId, PostId};

use super::Context;

/// List adoption listings.
pub async fn list_pets(ctx: &Context) -> Result<(), ApiError> {
    let pets = ctx.api.get_pets().await?;
    tracing::info!("{} pets looking for a home", pets.len());
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

/// Show one adoption listing.
pub async fn show_pet(ctx: &Context, id: i64) -> Result<(), ApiError> {
    let pet = ctx.api.get_pet(PetId::new(id)).await?;
    tracing::info!("#{} {}", pet.id, pet.name);
    if let Some(species) = &pet.species {
        tracing::info!("  species: {species}");
    }
    if let Some(breed) = &pet.breed {
        tracing::info!("  breed: {breed}");
    }
    if let Some(age) = pet.age {
        tracing::info!("  age: {age}");
    }
    if let Some(description) = &pet.description {
        tracing::info!("  {description}");
    }
    Ok(())
}

/// Submit a volunteer application.
pub async fn volunteer(ctx: &Context, application: &VolunteerApplication) -> Result<(), ApiError> {
    let accepted = ctx.api.create_volunteer(application).await?;
    tracing::info!(
        "Application #{} received for {} {}; the volunteer coordinator will be in touch",
        accepted.id,
        accepted.first_name,
        accepted.last_name,
    );
    Ok(())
}

/// List blog posts.
pub async fn list_posts(ctx: &Context) -> Result<(), ApiError> {
    let posts = ctx.api.get_posts().await?;
    tracing::info!("{} posts", posts.len());
    for post in posts {
        tracing::info!(
            "  #{} {} by {}",
            post.id,
            post.title,
            post.author.as_deref().unwrap_or("Pawly"),
        );
    }
    Ok(())
}

/// Show one blog post.
pub async fn show_post(ctx: &Context, id: i64) -> Result<(), ApiError> {
    let post = ctx.api.get_post(PostId::new(id)).await?;
    tracing::info!("#{} {}", post.id, post.title);
    if let Some(author) = &post.author {
        tracing::info!("  by {author}");
    }
    if let Some(created_at) = post.created_at {
        tracing::info!("  published {created_at}");
    }
    if let Some(content) = &post.content {
        tracing::info!("{content}");
    }
    Ok(())
}
