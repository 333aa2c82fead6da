mod command;
mod query;

use std::sync::Arc;

pub use self::command::OrderCommandRepositoryTrait;
pub use self::query::OrderQueryRepositoryTrait;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
