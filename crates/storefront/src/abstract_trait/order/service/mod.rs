mod command;
mod query;

use std::sync::Arc;

pub use self::command::OrderCommandServiceTrait;
pub use self::query::OrderQueryServiceTrait;

pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;
pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;
