use crate::error::CalenduhError;
use actix_web::{http::header, HttpRequest};
use calenduh_domain::{Calendar, Group, User, ID};
use calenduh_infra::CalenduhContext;
use tracing::error;

pub const SESSION_COOKIE: &str = "sessionId";

/// The user behind a request together with the groups it is a member of
#[derive(Debug, Clone)]
pub struct AuthedUser {
    pub user: User,
    pub groups: Vec<Group>,
}

impl AuthedUser {
    pub fn group_ids(&self) -> Vec<ID> {
        self.groups.iter().map(|g| g.id).collect()
    }

    pub fn is_member_of(&self, group_id: &ID) -> bool {
        self.groups.iter().any(|g| g.id == *group_id)
    }
}

/// Session token from the `sessionId` cookie or else the `Authorization`
/// header, with or without a `Bearer ` prefix
pub fn session_token(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

fn internal_error(e: anyhow::Error) -> CalenduhError {
    error!("Repository error while authenticating: {:?}", e);
    CalenduhError::InternalError
}

pub async fn protect_route(
    req: &HttpRequest,
    ctx: &CalenduhContext,
) -> Result<AuthedUser, CalenduhError> {
    let token = session_token(req).ok_or_else(|| {
        CalenduhError::Unauthorized("Unable to find a session id in the request".into())
    })?;

    let session = match ctx.repos.sessions.find(&token).await.map_err(internal_error)? {
        Some(session) if !session.is_expired(ctx.sys.get_timestamp_millis()) => session,
        _ => {
            return Err(CalenduhError::Unauthorized(
                "The session is invalid or has expired".into(),
            ))
        }
    };

    let user = match ctx
        .repos
        .users
        .find(&session.user_id)
        .await
        .map_err(internal_error)?
    {
        Some(user) => user,
        None => {
            return Err(CalenduhError::Unauthorized(
                "Unable to find user from session".into(),
            ))
        }
    };

    let groups = ctx
        .repos
        .groups
        .find_by_user(&user.id)
        .await
        .map_err(internal_error)?;

    ctx.activity.record(&user.id.as_string());

    Ok(AuthedUser { user, groups })
}

/// Finds a calendar the user may read. Calendars the user is not allowed to
/// see are reported as not found.
pub async fn user_can_read_calendar(
    authed: &AuthedUser,
    calendar_id: &ID,
    ctx: &CalenduhContext,
) -> Result<Calendar, CalenduhError> {
    let not_found =
        || CalenduhError::NotFound(format!("The calendar with id: {}, was not found.", calendar_id));

    let calendar = ctx
        .repos
        .calendars
        .find(calendar_id)
        .await
        .map_err(internal_error)?
        .ok_or_else(not_found)?;

    let is_subscribed = ctx
        .repos
        .subscriptions
        .exists(&authed.user.id, calendar_id)
        .await
        .map_err(internal_error)?;

    if calendar.can_read(&authed.user.id, &authed.group_ids(), is_subscribed) {
        Ok(calendar)
    } else {
        Err(not_found())
    }
}

pub async fn user_can_modify_calendar(
    authed: &AuthedUser,
    calendar_id: &ID,
    ctx: &CalenduhContext,
) -> Result<Calendar, CalenduhError> {
    let calendar = user_can_read_calendar(authed, calendar_id, ctx).await?;
    if calendar.can_edit(&authed.user.id, &authed.group_ids()) {
        Ok(calendar)
    } else {
        Err(CalenduhError::Unauthorized(format!(
            "Not allowed to modify the calendar with id: {}",
            calendar_id
        )))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::{cookie::Cookie, test::TestRequest};
    use calenduh_domain::{CalendarOwner, GroupMember, Session, SessionKind, Subscription};

    async fn setup_session(ctx: &CalenduhContext, expires_ts: i64) -> (User, String) {
        let user = User::new("alice".into(), None, 0);
        ctx.repos.users.insert(&user).await.unwrap();
        let token = format!("token-{}", user.id);
        let session = Session::new(token.clone(), user.id, SessionKind::Local, expires_ts);
        ctx.repos.sessions.insert(&session).await.unwrap();
        (user, token)
    }

    fn far_future() -> i64 {
        5609418990073
    }

    #[test]
    fn reads_session_token_from_header_or_cookie() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer abc"))
            .to_http_request();
        assert_eq!(session_token(&req), Some("abc".into()));

        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "abc"))
            .to_http_request();
        assert_eq!(session_token(&req), Some("abc".into()));

        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer other"))
            .cookie(Cookie::new(SESSION_COOKIE, "from-cookie"))
            .to_http_request();
        assert_eq!(session_token(&req), Some("from-cookie".into()));

        let req = TestRequest::default().to_http_request();
        assert_eq!(session_token(&req), None);
    }

    #[actix_web::test]
    async fn accepts_valid_session() {
        let ctx = CalenduhContext::create_inmemory();
        let (user, token) = setup_session(&ctx, far_future()).await;
        let group = Group::new("Team".into(), 0);
        ctx.repos.groups.insert(&group).await.unwrap();
        ctx.repos
            .groups
            .insert_member(&GroupMember {
                group_id: group.id,
                user_id: user.id,
            })
            .await
            .unwrap();

        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_http_request();
        let authed = protect_route(&req, &ctx).await.unwrap();
        assert_eq!(authed.user.id, user.id);
        assert!(authed.is_member_of(&group.id));
        assert_eq!(ctx.activity.active_users.len(), 1);
    }

    #[actix_web::test]
    async fn rejects_expired_or_unknown_session() {
        let ctx = CalenduhContext::create_inmemory();
        let (_, token) = setup_session(&ctx, 100).await;

        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, token))
            .to_http_request();
        assert!(protect_route(&req, &ctx).await.is_err());

        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "unknown"))
            .to_http_request();
        assert!(protect_route(&req, &ctx).await.is_err());
    }

    #[actix_web::test]
    async fn calendar_access_follows_ownership_and_subscriptions() {
        let ctx = CalenduhContext::create_inmemory();
        let owner = AuthedUser {
            user: User::new("owner".into(), None, 0),
            groups: vec![],
        };
        let reader = AuthedUser {
            user: User::new("reader".into(), None, 0),
            groups: vec![],
        };
        let calendar = Calendar::new(
            CalendarOwner::User(owner.user.id),
            "Private".into(),
            "#fff".into(),
            0,
        );
        ctx.repos.calendars.insert(&calendar).await.unwrap();

        assert!(user_can_modify_calendar(&owner, &calendar.id, &ctx).await.is_ok());
        assert!(matches!(
            user_can_read_calendar(&reader, &calendar.id, &ctx).await,
            Err(CalenduhError::NotFound(_))
        ));

        ctx.repos
            .subscriptions
            .insert(&Subscription {
                user_id: reader.user.id,
                calendar_id: calendar.id,
            })
            .await
            .unwrap();
        assert!(user_can_read_calendar(&reader, &calendar.id, &ctx).await.is_ok());
        assert!(matches!(
            user_can_modify_calendar(&reader, &calendar.id, &ctx).await,
            Err(CalenduhError::Unauthorized(_))
        ));
    }
}
