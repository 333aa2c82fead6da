use crate::config::RedisSettings;
use anyhow::Result;
use deadpool_redis::{Pool, Runtime};
use redis::{Client, Connection, RedisResult};
use tracing::info;

#[derive(Clone)]
pub struct RedisClient {
    pub client: Client,
    pub pool: Pool,
}

impl RedisClient {
    pub fn new(settings: &RedisSettings) -> Result<Self> {
        info!("Creating redis client");

        let url = match &settings.password {
            Some(pw) => format!(
                "redis://:{}@{}:{}/{}",
                pw, settings.host, settings.port, settings.db
            ),
            None => format!("redis://{}:{}/{}", settings.host, settings.port, settings.db),
        };

        let client = Client::open(url.clone())?;

        let pool = deadpool_redis::Config::from_url(url)
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| anyhow::anyhow!("Failed to create redis pool: {e}"))?;

        Ok(Self { client, pool })
    }

    pub fn get_connection(&self) -> RedisResult<Connection> {
        self.client.get_connection()
    }

    pub fn ping(&self) -> Result<()> {
        let mut conn = self.get_connection()?;

        info!("Pinging redis");

        let _: () = redis::cmd("PING").query(&mut conn)?;

        info!("Pinged redis");

        Ok(())
    }
}
