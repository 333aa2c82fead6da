mod command;
mod query;

pub use self::command::NotificationCommandRepository;
pub use self::query::NotificationQueryRepository;
