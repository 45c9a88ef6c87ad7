use crate::error::ApiError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use dosecal_api_structs::get_meal_profile::*;
use dosecal_domain::{MealProfile, ID};
use dosecal_infra::AppContext;

pub async fn get_meal_profile_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let usecase = GetMealProfileUseCase {
        user_id: path_params.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|profile| HttpResponse::Ok().json(APIResponse::new(profile)))
        .map_err(ApiError::from)
}

#[derive(Debug)]
pub struct GetMealProfileUseCase {
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
impl UseCase for GetMealProfileUseCase {
    type Response = MealProfile;

    type Error = UseCaseError;

    const NAME: &'static str = "GetMealProfile";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        // Users without a stored profile get the defaults
        Ok(ctx
            .repos
            .meal_profiles
            .find(&self.user_id)
            .await
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use dosecal_domain::ClockTime;
    use dosecal_infra::setup_context_inmemory;

    #[actix_web::test]
    async fn returns_default_profile_when_none_stored() {
        let ctx = setup_context_inmemory();

        let mut usecase = GetMealProfileUseCase { user_id: ID::new() };
        let profile = usecase.execute(&ctx).await.unwrap();

        assert_eq!(profile, MealProfile::default());
    }

    #[actix_web::test]
    async fn returns_stored_profile() {
        let ctx = setup_context_inmemory();
        let user_id = ID::new();
        let stored = MealProfile {
            breakfast_time: ClockTime::hm(6, 45),
            ..MealProfile::default()
        };
        ctx.repos
            .meal_profiles
            .save(&user_id, &stored)
            .await
            .unwrap();

        let mut usecase = GetMealProfileUseCase { user_id };
        let profile = usecase.execute(&ctx).await.unwrap();

        assert_eq!(profile, stored);
    }
}
