use super::{materialize, resolve_meal_profile};
use crate::error::ApiError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use dosecal_api_structs::schedule_medication_reminders::*;
use dosecal_domain::{MedicationReminderResult, ReminderPlan, ID};
use dosecal_infra::AppContext;

pub async fn schedule_medication_reminders_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let usecase = ScheduleMedicationRemindersUseCase {
        user_id: path_params.user_id.clone(),
        medication_id: path_params.medication_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|result| HttpResponse::Ok().json(APIResponse::new(result)))
        .map_err(ApiError::from)
}

/// Converts one medication's dosage profile into recurring calendar
/// reminders anchored to its owner's meal schedule.
#[derive(Debug)]
pub struct ScheduleMedicationRemindersUseCase {
    pub user_id: ID,
    pub medication_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    MedicationNotFound(ID),
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MedicationNotFound(medication_id) => Self::NotFound(format!(
                "The medication with id: {}, was not found.",
                medication_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ScheduleMedicationRemindersUseCase {
    type Response = MedicationReminderResult;

    type Error = UseCaseError;

    const NAME: &'static str = "ScheduleMedicationReminders";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        let medication = match ctx.repos.medications.find(&self.medication_id).await {
            Some(medication) if medication.user_id == self.user_id => medication,
            _ => return Err(UseCaseError::MedicationNotFound(self.medication_id.clone())),
        };

        let meals = resolve_meal_profile(&self.user_id, ctx).await;
        let today = ctx.sys.now().date_naive();
        let plan = ReminderPlan::build(&meals, &medication, today);

        Ok(materialize(&medication, &plan, ctx).await)
    }
}
