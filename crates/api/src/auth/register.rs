use super::{start_session, with_session_cookie};
use crate::{
    error::CalenduhError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use calenduh_api_structs::register::*;
use calenduh_domain::{Session, User};
use calenduh_infra::CalenduhContext;
use tracing::error;

pub async fn register_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<CalenduhContext>,
) -> Result<HttpResponse, CalenduhError> {
    let body = body.0;
    let usecase = RegisterUseCase {
        username: body.username,
        password: body.password,
        email: body.email,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            with_session_cookie(&mut HttpResponse::Created(), &res.session)
                .json(APIResponse::new(res.session, res.user))
        })
        .map_err(CalenduhError::from)
}

pub struct RegisterUseCase {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
}

// Keeps the password out of the logs
impl std::fmt::Debug for RegisterUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUseCase")
            .field("username", &self.username)
            .field("email", &self.email)
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
    InvalidCredentials(String),
    UsernameTaken(String),
    PasswordHashing,
    StorageError,
}

impl From<UseCaseError> for CalenduhError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidCredentials(msg) => Self::BadClientData(msg),
            UseCaseError::UsernameTaken(username) => Self::Conflict(format!(
                "The username: {} is already taken.",
                username
            )),
            UseCaseError::PasswordHashing | UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RegisterUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "Register";

    async fn execute(&mut self, ctx: &CalenduhContext) -> Result<Self::Response, Self::Error> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(UseCaseError::InvalidCredentials(
                "The username can not be empty".into(),
            ));
        }
        if self.password.is_empty() {
            return Err(UseCaseError::InvalidCredentials(
                "The password can not be empty".into(),
            ));
        }

        let existing = ctx
            .repos
            .users
            .find_by_username(username)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        if existing.is_some() {
            return Err(UseCaseError::UsernameTaken(username.to_string()));
        }

        let mut user = User::new(
            username.to_string(),
            self.email.clone(),
            ctx.sys.get_timestamp_millis(),
        );
        user.set_password(&self.password).map_err(|e| {
            error!("{}", e);
            UseCaseError::PasswordHashing
        })?;
        ctx.repos
            .users
            .insert(&user)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let session = start_session(&user, ctx)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseRes { user, session })
    }
}
