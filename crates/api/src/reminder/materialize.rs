use dosecal_domain::{
    CreatedEventRef, MealProfile, Medication, MedicationReminderResult, ReminderEvent,
    ReminderPlan, ID,
};
use dosecal_infra::{AppContext, CalendarGatewayError};
use tracing::{info, warn};

/// The owner's stored meal profile, or the default profile when none has
/// been saved yet. The fallback is deliberate: a missing profile must not
/// block reminder creation.
pub(crate) async fn resolve_meal_profile(user_id: &ID, ctx: &AppContext) -> MealProfile {
    match ctx.repos.meal_profiles.find(user_id).await {
        Some(profile) => profile,
        None => MealProfile::default(),
    }
}

/// Submits one recurring calendar event per plan slot and folds the
/// per-slot outcomes into a medication-level result.
///
/// Failure handling is two-tier. A gateway error on one slot is logged,
/// counted and the remaining slots are still attempted. A missing or
/// invalid credential is systemic: the remaining slots are skipped and the
/// result is flagged with `needs_auth` so the caller can prompt the user
/// to reconnect their calendar.
pub(crate) async fn materialize(
    medication: &Medication,
    plan: &ReminderPlan,
    ctx: &AppContext,
) -> MedicationReminderResult {
    if plan.is_empty() {
        return MedicationReminderResult {
            medication_name: medication.name.clone(),
            success: false,
            created_events: vec![],
            message: "No medication times to schedule".into(),
            needs_auth: false,
        };
    }

    let now = ctx.sys.now();
    let mut created_events = Vec::with_capacity(plan.len());
    let mut failed_slots = 0;

    for slot in plan.slots() {
        let event = ReminderEvent::from_slot(medication, slot, now);
        match ctx
            .calendar
            .create_recurring_event(&medication.user_id, &event)
            .await
        {
            Ok(created) => {
                info!(
                    "Created reminder event for {} at {}: {}",
                    medication.name, slot.time, created.html_link
                );
                created_events.push(CreatedEventRef {
                    event_id: created.event_id,
                    event_link: created.html_link,
                    time: slot.time,
                    label: slot.label.clone(),
                });
            }
            Err(CalendarGatewayError::AuthenticationRequired) => {
                warn!(
                    "Calendar authentication required for user: {}. Skipping remaining slots of {}",
                    medication.user_id, medication.name
                );
                return MedicationReminderResult {
                    medication_name: medication.name.clone(),
                    success: false,
                    created_events,
                    message: "Calendar authentication required".into(),
                    needs_auth: true,
                };
            }
            Err(CalendarGatewayError::Gateway(e)) => {
                warn!(
                    "Failed to create reminder event for {} at {}: {}",
                    medication.name, slot.time, e
                );
                failed_slots += 1;
            }
        }
    }

    let message = if failed_slots == 0 {
        format!(
            "Created {} recurring reminder(s) for {}",
            created_events.len(),
            medication.name
        )
    } else {
        format!(
            "Created {} recurring reminder(s) for {}, {} slot(s) failed",
            created_events.len(),
            medication.name,
            failed_slots
        )
    };

    MedicationReminderResult {
        medication_name: medication.name.clone(),
        success: true,
        created_events,
        message,
        needs_auth: false,
    }
}
