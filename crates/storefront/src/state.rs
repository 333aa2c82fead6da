use crate::{
    abstract_trait::{rate_limit::DynRateLimitMiddleware, session::DynSessionMiddleware},
    cache::{RateLimiter, SessionStore},
    di::{DependenciesInject, DependenciesInjectDeps},
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynJwtService,
    config::{Config, ConnectionPool, JwtConfig, RedisClient},
    utils::{SystemMetrics, run_metrics_collector},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub rate_limit: DynRateLimitMiddleware,
    pub session: DynSessionMiddleware,
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub system_metrics: Arc<SystemMetrics>,
    pub redis: Arc<RedisClient>,
}

impl AppState {
    pub async fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let mut registry = Registry::default();
        let system_metrics = Arc::new(SystemMetrics::new());

        info!("Initializing Redis connection");
        let redis = RedisClient::new(&config.redis).context("Failed to connect to Redis")?;

        redis.ping().context("Failed to ping Redis server")?;

        let rate_limit = Arc::new(RateLimiter::new(redis.client.clone())) as DynRateLimitMiddleware;
        let session = Arc::new(SessionStore::new(redis.pool.clone())) as DynSessionMiddleware;

        let deps = DependenciesInjectDeps {
            pool,
            redis: redis.clone(),
        };

        let di_container = DependenciesInject::new(deps, &mut registry)
            .context("Failed to initialize dependency injection container")?;

        system_metrics.register(&mut registry);

        tokio::spawn(run_metrics_collector(system_metrics.clone()));

        Ok(Self {
            jwt_config,
            rate_limit,
            session,
            di_container,
            registry: Arc::new(Mutex::new(registry)),
            system_metrics,
            redis: Arc::new(redis),
        })
    }
}
