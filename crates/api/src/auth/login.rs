use super::{start_session, with_session_cookie};
use crate::{
    error::CalenduhError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use calenduh_api_structs::login::*;
use calenduh_domain::{Session, User};
use calenduh_infra::CalenduhContext;

pub async fn login_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<CalenduhContext>,
) -> Result<HttpResponse, CalenduhError> {
    let body = body.0;
    let usecase = LoginUseCase {
        username: body.username,
        password: body.password,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            with_session_cookie(&mut HttpResponse::Ok(), &res.session)
                .json(APIResponse::new(res.session, res.user))
        })
        .map_err(CalenduhError::from)
}

pub struct LoginUseCase {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginUseCase")
            .field("username", &self.username)
            .finish()
    }
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub user: User,
    pub session: Session,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidCredentials,
    StorageError,
}

impl From<UseCaseError> for CalenduhError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidCredentials => {
                Self::Unauthorized("Invalid username or password".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for LoginUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "Login";

    async fn execute(&mut self, ctx: &CalenduhContext) -> Result<Self::Response, Self::Error> {
        let user = match ctx
            .repos
            .users
            .find_by_username(self.username.trim())
            .await
            .map_err(|_| UseCaseError::StorageError)?
        {
            Some(user) if user.verify_password(&self.password) => user,
            _ => return Err(UseCaseError::InvalidCredentials),
        };

        let session = start_session(&user, ctx)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseRes { user, session })
    }
}
