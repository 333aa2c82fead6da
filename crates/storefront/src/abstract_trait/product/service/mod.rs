mod command;
mod query;

use std::sync::Arc;

pub use self::command::ProductCommandServiceTrait;
pub use self::query::ProductQueryServiceTrait;

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;
pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;
