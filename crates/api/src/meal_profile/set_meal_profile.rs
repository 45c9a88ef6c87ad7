use crate::error::ApiError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use dosecal_api_structs::set_meal_profile::*;
use dosecal_domain::{InvalidTimeError, MealProfile, ID};
use dosecal_infra::AppContext;

pub async fn set_meal_profile_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let body = body.0;
    let usecase = SetMealProfileUseCase {
        user_id: path_params.user_id.clone(),
        breakfast_time: body.breakfast_time,
        lunch_time: body.lunch_time,
        dinner_time: body.dinner_time,
    };

    execute(usecase, &ctx)
        .await
        .map(|profile| HttpResponse::Ok().json(APIResponse::new(profile)))
        .map_err(ApiError::from)
}

#[derive(Debug)]
pub struct SetMealProfileUseCase {
    pub user_id: ID,
    pub breakfast_time: String,
    pub lunch_time: String,
    pub dinner_time: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidMealTime(InvalidTimeError),
    StorageError,
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidMealTime(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetMealProfileUseCase {
    type Response = MealProfile;

    type Error = UseCaseError;

    const NAME: &'static str = "SetMealProfile";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        let profile = MealProfile {
            breakfast_time: self
                .breakfast_time
                .parse()
                .map_err(UseCaseError::InvalidMealTime)?,
            lunch_time: self
                .lunch_time
                .parse()
                .map_err(UseCaseError::InvalidMealTime)?,
            dinner_time: self
                .dinner_time
                .parse()
                .map_err(UseCaseError::InvalidMealTime)?,
        };

        ctx.repos
            .meal_profiles
            .save(&self.user_id, &profile)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(profile)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use dosecal_domain::ClockTime;
    use dosecal_infra::setup_context_inmemory;

    fn usecase(user_id: ID, breakfast: &str, lunch: &str, dinner: &str) -> SetMealProfileUseCase {
        SetMealProfileUseCase {
            user_id,
            breakfast_time: breakfast.into(),
            lunch_time: lunch.into(),
            dinner_time: dinner.into(),
        }
    }

    #[actix_web::test]
    async fn stores_parsed_profile() {
        let ctx = setup_context_inmemory();
        let user_id = ID::new();

        let mut usecase = usecase(user_id.clone(), "07:15", "12:45", "20:00");
        let profile = usecase.execute(&ctx).await.unwrap();

        assert_eq!(profile.breakfast_time, ClockTime::hm(7, 15));
        assert_eq!(
            ctx.repos.meal_profiles.find(&user_id).await,
            Some(profile)
        );
    }

    #[actix_web::test]
    async fn rejects_malformed_meal_time() {
        let ctx = setup_context_inmemory();
        let user_id = ID::new();

        let mut usecase = usecase(user_id.clone(), "7 o'clock", "12:45", "20:00");
        let res = usecase.execute(&ctx).await;

        assert!(matches!(
            res.unwrap_err(),
            UseCaseError::InvalidMealTime(_)
        ));
        assert!(ctx.repos.meal_profiles.find(&user_id).await.is_none());
    }
}
