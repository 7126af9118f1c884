use crate::{
    error::CalenduhError,
    shared::{
        auth::session_token,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use calenduh_api_structs::logout::*;
use calenduh_domain::Session;
use calenduh_infra::CalenduhContext;

pub async fn logout_controller(
    http_req: HttpRequest,
    ctx: web::Data<CalenduhContext>,
) -> Result<HttpResponse, CalenduhError> {
    let session_id = session_token(&http_req).ok_or_else(|| {
        CalenduhError::Unauthorized("Unable to find a session id in the request".into())
    })?;

    let usecase = LogoutUseCase { session_id };

    execute(usecase, &ctx)
        .await
        .map(|session| HttpResponse::Ok().json(APIResponse::new(session)))
        .map_err(CalenduhError::from)
}

#[derive(Debug)]
pub struct LogoutUseCase {
    pub session_id: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    SessionNotFound,
    StorageError,
}

impl From<UseCaseError> for CalenduhError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::SessionNotFound => {
                Self::Unauthorized("The session does not exist".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for LogoutUseCase {
    type Response = Session;
    type Error = UseCaseError;

    const NAME: &'static str = "Logout";

    async fn execute(&mut self, ctx: &CalenduhContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .sessions
            .delete(&self.session_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .ok_or(UseCaseError::SessionNotFound)
    }
}
