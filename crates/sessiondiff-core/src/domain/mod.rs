mod calendar;
mod security;
mod session;
mod timestamp;

pub use calendar::CalendarDate;
pub use security::Security;
pub use session::{Session, SessionKind};
pub use timestamp::UtcDateTime;
