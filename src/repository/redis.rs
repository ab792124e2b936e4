use crate::repository::store::{Collection, DocumentStore, Result, StoreError};
use async_trait::async_trait;
use log::error;
use mobc::{Connection, Pool};
use mobc_redis::redis::AsyncCommands;
use mobc_redis::{redis, RedisConnectionManager};
use std::collections::HashMap;
use std::time::Duration;

pub type MobcPool = Pool<RedisConnectionManager>;
pub type MobcConn = Connection<RedisConnectionManager>;

const CACHE_POOL_MAX_OPEN: u64 = 16;
const CACHE_POOL_MAX_IDLE: u64 = 8;
const CACHE_POOL_TIMEOUT_SECONDS: u64 = 1;
const CACHE_POOL_EXPIRE_SECONDS: u64 = 60;

/// Document store on Redis: one hash per collection, keyed by document id,
/// holding the JSON body.
pub struct RedisStore {
    pool: MobcPool,
}

impl RedisStore {
    pub fn new(redis_url: &str) -> Result<Self> {
        let client = redis::Client::open(redis_url).map_err(StoreError::Client)?;
        let manager = RedisConnectionManager::new(client);
        let pool = Pool::builder()
            .get_timeout(Some(Duration::from_secs(CACHE_POOL_TIMEOUT_SECONDS)))
            .max_open(CACHE_POOL_MAX_OPEN)
            .max_idle(CACHE_POOL_MAX_IDLE)
            .max_lifetime(Some(Duration::from_secs(CACHE_POOL_EXPIRE_SECONDS)))
            .build(manager);

        Ok(RedisStore { pool })
    }

    async fn get_conn(&self) -> Result<MobcConn> {
        self.pool.get().await.map_err(|e| {
            error!("error connecting to redis: {}", e);
            StoreError::Pool(e)
        })
    }
}

#[async_trait]
impl DocumentStore for RedisStore {
    async fn list(&self, collection: Collection) -> Result<Vec<String>> {
        let mut con = self.get_conn().await?;
        let docs: HashMap<String, String> = con
            .hgetall(collection.key())
            .await
            .map_err(StoreError::Command)?;
        let mut docs: Vec<(String, String)> = docs.into_iter().collect();
        docs.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(docs.into_iter().map(|(_, body)| body).collect())
    }

    async fn get(&self, collection: Collection, id: &str) -> Result<Option<String>> {
        let mut con = self.get_conn().await?;
        con.hget(collection.key(), id)
            .await
            .map_err(StoreError::Command)
    }

    async fn put(&self, collection: Collection, id: &str, body: String) -> Result<()> {
        let mut con = self.get_conn().await?;
        con.hset::<_, _, _, ()>(collection.key(), id, body)
            .await
            .map_err(StoreError::Command)
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<bool> {
        let mut con = self.get_conn().await?;
        let removed: i64 = con
            .hdel(collection.key(), id)
            .await
            .map_err(StoreError::Command)?;
        Ok(removed > 0)
    }

    fn backend_type(&self) -> &'static str {
        "redis"
    }
}
