mod auth;
mod calendar;
mod event;
mod group;
mod status;
mod subscription;
mod user;

pub mod dtos {
    pub use crate::auth::dtos::*;
    pub use crate::calendar::dtos::*;
    pub use crate::event::dtos::*;
    pub use crate::group::dtos::*;
    pub use crate::subscription::dtos::*;
    pub use crate::user::dtos::*;
}

pub use crate::auth::api::*;
pub use crate::calendar::api::*;
pub use crate::event::api::*;
pub use crate::group::api::*;
pub use crate::status::api::*;
pub use crate::subscription::api::*;
pub use crate::user::api::*;
