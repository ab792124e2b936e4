use async_trait::async_trait;
use mobc_redis::redis;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("could not get redis connection from pool: {0}")]
    Pool(mobc::Error<redis::RedisError>),
    #[error("error executing redis command: {0}")]
    Command(redis::RedisError),
    #[error("error creating redis client: {0}")]
    Client(redis::RedisError),
    #[error("error (de)serializing document: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The collections kept in the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Teams,
    Fixtures,
    Players,
}

impl Collection {
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Teams => "teams",
            Collection::Fixtures => "fixtures",
            Collection::Players => "players",
        }
    }
}

/// A JSON document living in one collection, addressed by its id.
pub trait Document: Serialize + DeserializeOwned + Send + Sync {
    const COLLECTION: Collection;

    fn id(&self) -> &str;
}

/// Raw access to a document store. Each call is an independent write or
/// read; there are no multi-document transactions.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Every document body in the collection.
    async fn list(&self, collection: Collection) -> Result<Vec<String>>;

    async fn get(&self, collection: Collection, id: &str) -> Result<Option<String>>;

    /// Insert or overwrite a document.
    async fn put(&self, collection: Collection, id: &str, body: String) -> Result<()>;

    /// Returns whether a document was removed.
    async fn delete(&self, collection: Collection, id: &str) -> Result<bool>;

    /// Backend name for logging.
    fn backend_type(&self) -> &'static str;
}

pub async fn fetch_all<D: Document>(store: &dyn DocumentStore) -> Result<Vec<D>> {
    store
        .list(D::COLLECTION)
        .await?
        .iter()
        .map(|body| serde_json::from_str(body).map_err(StoreError::from))
        .collect()
}

pub async fn fetch_one<D: Document>(store: &dyn DocumentStore, id: &str) -> Result<Option<D>> {
    match store.get(D::COLLECTION, id).await? {
        Some(body) => Ok(Some(serde_json::from_str(&body)?)),
        None => Ok(None),
    }
}

pub async fn save<D: Document>(store: &dyn DocumentStore, doc: &D) -> Result<()> {
    let body = serde_json::to_string(doc)?;
    store.put(D::COLLECTION, doc.id(), body).await
}

pub async fn remove<D: Document>(store: &dyn DocumentStore, id: &str) -> Result<bool> {
    store.delete(D::COLLECTION, id).await
}
