mod calendar;
mod event;
mod expander;
mod group;
mod occurrence;
mod session;
mod shared;
mod subscription;
mod user;
mod window;

pub use calendar::{Calendar, CalendarOwner};
pub use event::CalendarEvent;
pub use expander::{EventSetExpander, ExpansionError};
pub use group::{Group, GroupMember};
pub use occurrence::{
    CapScope, Occurrence, OccurrenceCap, OccurrenceGenerator, DEFAULT_OCCURRENCE_CAP,
};
pub use session::{Session, SessionKind};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use shared::recurrence::{InvalidRecurrenceRuleError, RecurrenceRule};
pub use subscription::Subscription;
pub use user::{PasswordHashError, User};
pub use window::{InvalidWindowError, TimeWindow, WindowResolver, DEFAULT_WINDOW_END};
