use crate::{
    error::CalenduhError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use calenduh_api_structs::{create_calendar, create_group_calendar, CreateCalendarBody};
use calenduh_domain::{Calendar, CalendarOwner};
use calenduh_infra::CalenduhContext;
use calenduh_utils::create_random_secret;

const DEFAULT_COLOR: &str = "#4285F4";
const INVITE_CODE_LEN: usize = 8;

pub async fn create_calendar_controller(
    http_req: HttpRequest,
    body: web::Json<create_calendar::RequestBody>,
    ctx: web::Data<CalenduhContext>,
) -> Result<HttpResponse, CalenduhError> {
    let authed = protect_route(&http_req, &ctx).await?;

    let usecase = CreateCalendarUseCase::new(CalendarOwner::User(authed.user.id), body.0);

    execute(usecase, &ctx)
        .await
        .map(|calendar| HttpResponse::Created().json(create_calendar::APIResponse::new(calendar)))
        .map_err(CalenduhError::from)
}

pub async fn create_group_calendar_controller(
    http_req: HttpRequest,
    path: web::Path<create_group_calendar::PathParams>,
    body: web::Json<create_group_calendar::RequestBody>,
    ctx: web::Data<CalenduhContext>,
) -> Result<HttpResponse, CalenduhError> {
    let authed = protect_route(&http_req, &ctx).await?;
    if !authed.is_member_of(&path.group_id) {
        return Err(CalenduhError::Unauthorized(format!(
            "Not a member of the group with id: {}",
            path.group_id
        )));
    }

    let usecase = CreateCalendarUseCase::new(CalendarOwner::Group(path.group_id), body.0);

    execute(usecase, &ctx)
        .await
        .map(|calendar| {
            HttpResponse::Created().json(create_group_calendar::APIResponse::new(calendar))
        })
        .map_err(CalenduhError::from)
}

#[derive(Debug)]
pub struct CreateCalendarUseCase {
    pub owner: CalendarOwner,
    pub title: String,
    pub color: Option<String>,
    pub is_public: bool,
}

impl CreateCalendarUseCase {
    fn new(owner: CalendarOwner, body: CreateCalendarBody) -> Self {
        Self {
            owner,
            title: body.title,
            color: body.color,
            is_public: body.is_public.unwrap_or(false),
        }
    }
}

#[derive(Debug)]
pub enum UseCaseError {
    EmptyTitle,
    StorageError,
}

impl From<UseCaseError> for CalenduhError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyTitle => {
                Self::BadClientData("The calendar title can not be empty".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateCalendarUseCase {
    type Response = Calendar;
    type Error = UseCaseError;

    const NAME: &'static str = "CreateCalendar";

    async fn execute(&mut self, ctx: &CalenduhContext) -> Result<Self::Response, Self::Error> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(UseCaseError::EmptyTitle);
        }
        let color = self
            .color
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_COLOR);

        let mut calendar = Calendar::new(
            self.owner,
            title.to_string(),
            color.to_string(),
            ctx.sys.get_timestamp_millis(),
        );
        calendar.is_public = self.is_public;
        calendar.invite_code = Some(create_random_secret(INVITE_CODE_LEN));

        ctx.repos
            .calendars
            .insert(&calendar)
            .await
            .map(|_| calendar)
            .map_err(|_| UseCaseError::StorageError)
    }
}
