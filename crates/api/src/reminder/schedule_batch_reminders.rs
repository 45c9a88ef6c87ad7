use super::{materialize, resolve_meal_profile};
use crate::error::ApiError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use dosecal_api_structs::schedule_batch_reminders::*;
use dosecal_domain::{BatchSummary, ReminderPlan, ID};
use dosecal_infra::AppContext;

pub async fn schedule_batch_reminders_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let usecase = ScheduleBatchRemindersUseCase {
        user_id: path_params.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|summary| HttpResponse::Ok().json(APIResponse::new(summary)))
        .map_err(ApiError::from)
}

/// Schedules reminders for every medication of a user, one medication at
/// a time.
///
/// Submissions run sequentially: the calendar backend rate-limits writes
/// against a single calendar, so slots are never created concurrently.
/// A failing medication, including one that needs re-authentication,
/// never stops the rest of the batch; every medication is attempted and
/// reported individually.
#[derive(Debug)]
pub struct ScheduleBatchRemindersUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ScheduleBatchRemindersUseCase {
    type Response = BatchSummary;

    type Error = UseCaseError;

    const NAME: &'static str = "ScheduleBatchReminders";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        let medications = ctx.repos.medications.find_by_user(&self.user_id).await;

        let mut results = Vec::with_capacity(medications.len());
        for medication in medications {
            let meals = resolve_meal_profile(&medication.user_id, ctx).await;
            let today = ctx.sys.now().date_naive();
            let plan = ReminderPlan::build(&meals, &medication, today);
            results.push(materialize(&medication, &plan, ctx).await);
        }

        Ok(BatchSummary::tally(results))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;
    use dosecal_domain::{DosageProfile, Medication, TimingPreference, SCHEDULING_TZ};
    use dosecal_infra::{
        CalendarGatewayError, Config, FixedSys, InMemoryCalendarGateway, Repos,
    };
    use std::sync::Arc;

    fn medication(user_id: &ID, name: &str, dosage: DosageProfile) -> Medication {
        Medication {
            id: Default::default(),
            name: name.into(),
            dosage,
            timing: TimingPreference::AfterFood,
            duration: "5 days".into(),
            prescription_id: ID::new(),
            user_id: user_id.clone(),
        }
    }

    fn setup() -> (AppContext, Arc<InMemoryCalendarGateway>) {
        let gateway = Arc::new(InMemoryCalendarGateway::new());
        let now = SCHEDULING_TZ
            .with_ymd_and_hms(2026, 8, 7, 10, 0, 0)
            .unwrap()
            .timestamp_millis();
        let ctx = AppContext {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(FixedSys(now)),
            calendar: gateway.clone(),
        };
        (ctx, gateway)
    }

    fn one_dose_morning() -> DosageProfile {
        DosageProfile {
            morning: 1,
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn tallies_mixed_outcomes_without_aborting() {
        let (ctx, _gateway) = setup();
        let user_id = ID::new();

        // Second medication has nothing to schedule and counts as failed
        for m in &[
            medication(&user_id, "Amoxicillin", one_dose_morning()),
            medication(&user_id, "Cetirizine", DosageProfile::default()),
            medication(&user_id, "Ibuprofen", one_dose_morning()),
        ] {
            ctx.repos.medications.insert(m).await.unwrap();
        }

        let mut usecase = ScheduleBatchRemindersUseCase {
            user_id: user_id.clone(),
        };
        let summary = usecase.execute(&ctx).await.unwrap();

        assert_eq!(summary.total_count, 3);
        assert_eq!(summary.success_count, 2);
        assert_eq!(summary.failed_count, 1);
        assert!(!summary.needs_auth());
        assert_eq!(summary.results[1].medication_name, "Cetirizine");
        assert!(!summary.results[1].success);
    }

    #[actix_web::test]
    async fn auth_failure_on_one_medication_does_not_stop_the_batch() {
        let (ctx, gateway) = setup();
        let user_id = ID::new();

        for m in &[
            medication(&user_id, "Amoxicillin", one_dose_morning()),
            medication(&user_id, "Ibuprofen", one_dose_morning()),
        ] {
            ctx.repos.medications.insert(m).await.unwrap();
        }
        gateway.script_error(CalendarGatewayError::AuthenticationRequired);

        let mut usecase = ScheduleBatchRemindersUseCase {
            user_id: user_id.clone(),
        };
        let summary = usecase.execute(&ctx).await.unwrap();

        assert_eq!(summary.total_count, 2);
        assert_eq!(summary.failed_count, 1);
        assert!(summary.needs_auth());
        assert!(summary.results[0].needs_auth);
        // The second medication was still attempted and succeeded
        assert!(summary.results[1].success);
        assert_eq!(gateway.created_events().len(), 1);
    }

    #[actix_web::test]
    async fn empty_medication_list_yields_empty_summary() {
        let (ctx, _gateway) = setup();

        let mut usecase = ScheduleBatchRemindersUseCase { user_id: ID::new() };
        let summary = usecase.execute(&ctx).await.unwrap();

        assert_eq!(summary.total_count, 0);
        assert_eq!(summary.success_count, 0);
        assert_eq!(summary.failed_count, 0);
    }
}
