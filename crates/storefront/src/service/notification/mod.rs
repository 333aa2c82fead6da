mod command;
mod query;

pub use self::command::NotificationCommandService;
pub use self::query::NotificationQueryService;
