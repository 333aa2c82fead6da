use crate::{
    abstract_trait::{
        notification::{
            DynNotificationCommandRepository, DynNotificationCommandService,
            DynNotificationQueryRepository, DynNotificationQueryService,
        },
        order::{
            repository::{DynOrderCommandRepository, DynOrderQueryRepository},
            service::{DynOrderCommandService, DynOrderQueryService},
        },
        order_item::{DynOrderItemQueryRepository, DynOrderItemQueryService},
        product::{
            repository::{DynProductCommandRepository, DynProductQueryRepository},
            service::{DynProductCommandService, DynProductQueryService},
        },
        user_role::DynUserRoleQueryRepository,
    },
    repository::{
        notification::{NotificationCommandRepository, NotificationQueryRepository},
        order::{OrderCommandRepository, OrderQueryRepository},
        order_item::OrderItemQueryRepository,
        product::{ProductCommandRepository, ProductQueryRepository},
        user_role::UserRoleQueryRepository,
    },
    service::{
        notification::{NotificationCommandService, NotificationQueryService},
        order::{OrderCommandService, OrderCommandServiceDeps, OrderQueryService},
        order_item::OrderItemQueryService,
        product::{ProductCommandService, ProductQueryService},
    },
};
use anyhow::Result;
use prometheus_client::registry::Registry;
use shared::{
    cache::CacheStore,
    config::{ConnectionPool, RedisClient},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_command: DynOrderCommandService,
    pub order_query: DynOrderQueryService,
    pub order_item_query: DynOrderItemQueryService,
    pub product_command: DynProductCommandService,
    pub product_query: DynProductQueryService,
    pub notification_command: DynNotificationCommandService,
    pub notification_query: DynNotificationQueryService,
    pub user_roles: DynUserRoleQueryRepository,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_command", &"OrderCommandService")
            .field("order_query", &"OrderQueryService")
            .field("order_item_query", &"OrderItemQueryService")
            .field("product_command", &"ProductCommandService")
            .field("product_query", &"ProductQueryService")
            .field("notification_command", &"NotificationCommandService")
            .field("notification_query", &"NotificationQueryService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub redis: RedisClient,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Result<Self> {
        let DependenciesInjectDeps { pool, redis } = deps;

        let order_command_repo: DynOrderCommandRepository =
            Arc::new(OrderCommandRepository::new(pool.clone()));
        let order_query_repo: DynOrderQueryRepository =
            Arc::new(OrderQueryRepository::new(pool.clone()));
        let order_item_query_repo: DynOrderItemQueryRepository =
            Arc::new(OrderItemQueryRepository::new(pool.clone()));
        let product_command_repo: DynProductCommandRepository =
            Arc::new(ProductCommandRepository::new(pool.clone()));
        let product_query_repo: DynProductQueryRepository =
            Arc::new(ProductQueryRepository::new(pool.clone()));
        let notification_command_repo: DynNotificationCommandRepository =
            Arc::new(NotificationCommandRepository::new(pool.clone()));
        let notification_query_repo: DynNotificationQueryRepository =
            Arc::new(NotificationQueryRepository::new(pool.clone()));
        let user_roles: DynUserRoleQueryRepository =
            Arc::new(UserRoleQueryRepository::new(pool.clone()));

        let cache = Arc::new(CacheStore::new(redis.pool.clone()));

        let notification_command: DynNotificationCommandService =
            Arc::new(NotificationCommandService::new(notification_command_repo));
        let notification_query: DynNotificationQueryService =
            Arc::new(NotificationQueryService::new(notification_query_repo));

        let order_command: DynOrderCommandService = Arc::new(OrderCommandService::new(
            OrderCommandServiceDeps {
                command: order_command_repo,
                query: order_query_repo.clone(),
                notification: notification_command.clone(),
            },
            registry,
        ));

        let order_query: DynOrderQueryService = Arc::new(OrderQueryService::new(
            order_query_repo,
            registry,
            cache.clone(),
        ));

        let order_item_query: DynOrderItemQueryService =
            Arc::new(OrderItemQueryService::new(order_item_query_repo, registry));

        let product_command: DynProductCommandService =
            Arc::new(ProductCommandService::new(product_command_repo, registry));

        let product_query: DynProductQueryService = Arc::new(ProductQueryService::new(
            product_query_repo,
            registry,
            cache,
        ));

        Ok(Self {
            order_command,
            order_query,
            order_item_query,
            product_command,
            product_query,
            notification_command,
            notification_query,
            user_roles,
        })
    }
}
