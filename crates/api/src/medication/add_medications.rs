use crate::error::ApiError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use dosecal_api_structs::add_medications::*;
use dosecal_domain::{Medication, ID};
use dosecal_infra::AppContext;

pub async fn add_medications_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, ApiError> {
    let usecase = AddMedicationsUseCase {
        user_id: path_params.user_id.clone(),
        prescription_id: path_params.prescription_id.clone(),
        medications: body.0.medications,
    };

    execute(usecase, &ctx)
        .await
        .map(|medications| HttpResponse::Created().json(APIResponse::new(medications)))
        .map_err(ApiError::from)
}

/// Stores the medications of one prescription, as extracted by the
/// ingestion pipeline or entered manually.
#[derive(Debug)]
pub struct AddMedicationsUseCase {
    pub user_id: ID,
    pub prescription_id: ID,
    pub medications: Vec<MedicationInput>,
}

#[derive(Debug)]
pub enum UseCaseError {
    EmptyName,
    StorageError,
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyName => {
                Self::BadClientData("Medication name must not be empty".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for AddMedicationsUseCase {
    type Response = Vec<Medication>;

    type Error = UseCaseError;

    const NAME: &'static str = "AddMedications";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        if self.medications.iter().any(|m| m.name.trim().is_empty()) {
            return Err(UseCaseError::EmptyName);
        }

        let mut created = Vec::with_capacity(self.medications.len());
        for input in &self.medications {
            let medication = Medication {
                id: Default::default(),
                name: input.name.clone(),
                dosage: input.dosage.clone(),
                timing: input.timing,
                duration: input.duration.clone(),
                prescription_id: self.prescription_id.clone(),
                user_id: self.user_id.clone(),
            };
            ctx.repos
                .medications
                .insert(&medication)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
            created.push(medication);
        }

        Ok(created)
    }
}
