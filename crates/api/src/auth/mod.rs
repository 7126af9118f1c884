mod login;
mod logout;
mod register;

use crate::shared::auth::SESSION_COOKIE;
use actix_web::{cookie::Cookie, web, HttpResponseBuilder};
use calenduh_domain::{Session, SessionKind, User};
use calenduh_infra::CalenduhContext;
use calenduh_utils::create_random_secret;
use login::login_controller;
use logout::logout_controller;
use register::register_controller;

const SESSION_TOKEN_LEN: usize = 32;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/local/register", web::post().to(register_controller));
    cfg.route("/auth/local/login", web::post().to(login_controller));
    cfg.route("/auth/logout", web::post().to(logout_controller));
}

/// Creates and stores a new local session for the user
async fn start_session(user: &User, ctx: &CalenduhContext) -> anyhow::Result<Session> {
    let session = Session::new(
        create_random_secret(SESSION_TOKEN_LEN),
        user.id,
        SessionKind::Local,
        ctx.sys.get_timestamp_millis() + ctx.config.session_duration,
    );
    ctx.repos.sessions.insert(&session).await?;
    Ok(session)
}

fn with_session_cookie<'a>(
    res: &'a mut HttpResponseBuilder,
    session: &Session,
) -> &'a mut HttpResponseBuilder {
    let cookie = Cookie::build(SESSION_COOKIE, session.id.clone())
        .path("/")
        .http_only(true)
        .finish();
    res.cookie(cookie)
}
