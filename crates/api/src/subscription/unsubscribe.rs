use crate::{
    error::CalenduhError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use calenduh_api_structs::unsubscribe::*;
use calenduh_domain::{Subscription, ID};
use calenduh_infra::CalenduhContext;

pub async fn unsubscribe_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<CalenduhContext>,
) -> Result<HttpResponse, CalenduhError> {
    let authed = protect_route(&http_req, &ctx).await?;

    let usecase = UnsubscribeUseCase {
        user_id: authed.user.id,
        calendar_id: path.calendar_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|subscription| HttpResponse::Ok().json(APIResponse::new(subscription)))
        .map_err(CalenduhError::from)
}

#[derive(Debug)]
pub struct UnsubscribeUseCase {
    pub user_id: ID,
    pub calendar_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for CalenduhError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(calendar_id) => Self::NotFound(format!(
                "No subscription to the calendar with id: {}, was found.",
                calendar_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UnsubscribeUseCase {
    type Response = Subscription;
    type Error = UseCaseError;

    const NAME: &'static str = "Unsubscribe";

    async fn execute(&mut self, ctx: &CalenduhContext) -> Result<Self::Response, Self::Error> {
        let removed = ctx
            .repos
            .subscriptions
            .delete(&self.user_id, &self.calendar_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        if removed {
            Ok(Subscription {
                user_id: self.user_id,
                calendar_id: self.calendar_id,
            })
        } else {
            Err(UseCaseError::NotFound(self.calendar_id))
        }
    }
}
