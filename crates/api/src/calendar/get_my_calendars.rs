use crate::{
    error::CalenduhError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use calenduh_api_structs::get_my_calendars::APIResponse;
use calenduh_domain::{Calendar, ID};
use calenduh_infra::CalenduhContext;

pub async fn get_my_calendars_controller(
    http_req: HttpRequest,
    ctx: web::Data<CalenduhContext>,
) -> Result<HttpResponse, CalenduhError> {
    let authed = protect_route(&http_req, &ctx).await?;

    let usecase = GetMyCalendarsUseCase {
        user_id: authed.user.id,
    };

    execute(usecase, &ctx)
        .await
        .map(|calendars| HttpResponse::Ok().json(APIResponse::new(calendars)))
        .map_err(CalenduhError::from)
}

#[derive(Debug)]
pub struct GetMyCalendarsUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for CalenduhError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetMyCalendarsUseCase {
    type Response = Vec<Calendar>;
    type Error = UseCaseError;

    const NAME: &'static str = "GetMyCalendars";

    async fn execute(&mut self, ctx: &CalenduhContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .calendars
            .find_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
