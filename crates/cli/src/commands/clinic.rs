//! Clinic doctor and appointment commands.

use pawly_client::ApiError;
use pawly_client::api::types::AppointmentInput;
use pawly_core::DoctorId;

use super::Context;

/// List available doctors.
pub async fn list_doctors(ctx: &Context) -> Result<(), ApiError> {
    let doctors = ctx.api.get_doctors().await?;
    tracing::info!("{} doctors", doctors.len());
    for doctor in doctors {
        tracing::info!(
            "  #{} {} - {}",
            doctor.id,
            doctor.name,
            doctor.specialization.as_deref().unwrap_or("general practice"),
        );
    }
    Ok(())
}

/// Book an appointment with a doctor.
///
/// Requires a logged-in session; the booking is filed under the session's
/// email.
pub async fn book(
    ctx: &Context,
    doctor_id: i64,
    owner: String,
    pet: String,
    date: String,
    time: String,
    reason: String,
) -> Result<(), ApiError> {
    let Some(email) = ctx
        .sessions
        .current()
        .and_then(|session| session.email.clone())
    else {
        tracing::info!("Log in before booking an appointment");
        return Ok(());
    };

    let input = AppointmentInput {
        doctor_id: DoctorId::new(doctor_id),
        owner_name: owner,
        pet_name: pet,
        date,
        time,
        reason,
    };
    let appointment = ctx.api.create_appointment(&input, &email).await?;
    tracing::info!(
        "Appointment #{} booked for {} at {}",
        appointment.id,
        appointment.date,
        appointment.time
    );
    Ok(())
}
