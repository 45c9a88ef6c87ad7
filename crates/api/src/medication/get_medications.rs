use crate::error::ApiError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use dosecal_api_structs::get_medications::*;
use dosecal_domain::{Medication, ID};
use dosecal_infra::AppContext;

pub async fn get_medications_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let usecase = GetMedicationsUseCase {
        user_id: path_params.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|medications| HttpResponse::Ok().json(APIResponse::new(medications)))
        .map_err(ApiError::from)
}

#[derive(Debug)]
pub struct GetMedicationsUseCase {
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
impl UseCase for GetMedicationsUseCase {
    type Response = Vec<Medication>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetMedications";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx.repos.medications.find_by_user(&self.user_id).await)
    }
}
