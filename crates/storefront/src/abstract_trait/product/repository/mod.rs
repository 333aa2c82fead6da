mod command;
mod query;

use std::sync::Arc;

pub use self::command::ProductCommandRepositoryTrait;
pub use self::query::ProductQueryRepositoryTrait;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;
pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;
