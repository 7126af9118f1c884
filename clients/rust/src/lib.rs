mod auth;
mod base;
mod calendar;
mod event;
mod group;
mod status;
mod subscription;
mod user;

use auth::AuthClient;
pub use auth::{LoginInput, RegisterInput};
pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use calendar::CalendarClient;
pub use calendar::CreateCalendarInput;
use event::CalendarEventClient;
pub use event::{CreateEventInput, GetOccurrencesInput, UpdateEventInput};
use group::GroupClient;
use status::StatusClient;
use std::sync::Arc;
use subscription::SubscriptionClient;
pub use subscription::SubscribeInput;
use user::UserClient;

pub use calenduh_api_structs::dtos::*;
pub use calenduh_api_structs::update_event::RequestBody as UpdateEventBody;
pub use calenduh_domain::ID;
pub use reqwest::StatusCode;

// Domain
pub use calenduh_api_structs::dtos::CalendarDTO as Calendar;
pub use calenduh_api_structs::dtos::CalendarEventDTO as CalendarEvent;
pub use calenduh_api_structs::dtos::GroupDTO as Group;
pub use calenduh_api_structs::dtos::OccurrenceDTO as Occurrence;
pub use calenduh_api_structs::dtos::UserDTO as User;

/// Calenduh Server SDK
///
/// The SDK contains methods for interacting with the Calenduh server API.
/// Requests are authenticated with the session id given to `with_session`.
#[derive(Clone)]
pub struct CalenduhSDK {
    pub auth: AuthClient,
    pub calendar: CalendarClient,
    pub event: CalendarEventClient,
    pub group: GroupClient,
    pub status: StatusClient,
    pub subscription: SubscriptionClient,
    pub user: UserClient,
}

impl CalenduhSDK {
    pub fn new<T: Into<String>>(address: T) -> Self {
        Self::from_base(BaseClient::new(address.into()))
    }

    pub fn with_session<T: Into<String>, S: Into<String>>(address: T, session_id: S) -> Self {
        let mut base = BaseClient::new(address.into());
        base.set_session_id(session_id.into());
        Self::from_base(base)
    }

    fn from_base(base: BaseClient) -> Self {
        let base = Arc::new(base);

        Self {
            auth: AuthClient::new(base.clone()),
            calendar: CalendarClient::new(base.clone()),
            event: CalendarEventClient::new(base.clone()),
            group: GroupClient::new(base.clone()),
            status: StatusClient::new(base.clone()),
            subscription: SubscriptionClient::new(base.clone()),
            user: UserClient::new(base),
        }
    }
}
