use crate::OpenEdgeAsyncDialect;
use deadpool::managed::{self, Manager, Metrics, Object, Pool, PoolError, RecycleError, RecycleResult};
use std::{borrow::Cow, sync::Arc};
use weft_core::{AsyncConnector, Context, Dialect, Error, Result};

/// Pool sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_size: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_size: managed::PoolConfig::default().max_size,
        }
    }
}

/// Creates initialized async OpenEdge connections and pings them before reuse.
pub struct OpenEdgeManager<C: AsyncConnector> {
    connector: C,
    url: Cow<'static, str>,
    dialect: Arc<OpenEdgeAsyncDialect>,
}

impl<C: AsyncConnector> OpenEdgeManager<C> {
    pub fn new(
        connector: C,
        url: impl Into<Cow<'static, str>>,
        dialect: Arc<OpenEdgeAsyncDialect>,
    ) -> Self {
        Self {
            connector,
            url: url.into(),
            dialect,
        }
    }
}

impl<C: AsyncConnector> Manager for OpenEdgeManager<C> {
    type Type = C::Connection;
    type Error = Error;

    async fn create(&self) -> Result<C::Connection> {
        let mut connection = self
            .connector
            .connect(&self.url)
            .await
            .with_context(|| format!("While trying to connect to `{}`", self.url))
            .map_err(|e| {
                log::error!("{:#}", e);
                e
            })?;
        self.dialect.initialize(&mut connection).await?;
        Ok(connection)
    }

    async fn recycle(
        &self,
        connection: &mut C::Connection,
        _metrics: &Metrics,
    ) -> RecycleResult<Error> {
        match self.dialect.ping(connection).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(RecycleError::Message("Ping failed".into())),
            Err(error) => Err(RecycleError::Backend(error)),
        }
    }
}

pub type PooledConnection<C> = Object<OpenEdgeManager<C>>;

/// Pool of async OpenEdge connections sharing one dialect.
pub struct OpenEdgePool<C: AsyncConnector> {
    pool: Pool<OpenEdgeManager<C>>,
    dialect: Arc<OpenEdgeAsyncDialect>,
}

impl<C: AsyncConnector> OpenEdgePool<C> {
    pub fn new(connector: C, url: impl Into<Cow<'static, str>>, config: PoolConfig) -> Result<Self> {
        let dialect = Arc::new(OpenEdgeAsyncDialect::new());
        let manager = OpenEdgeManager::new(connector, url, dialect.clone());
        let pool = Pool::builder(manager)
            .max_size(config.max_size)
            .build()
            .map_err(|e| {
                let error = Error::msg(e.to_string()).context("While building the OpenEdge pool");
                log::error!("{:#}", error);
                error
            })?;
        Ok(Self { pool, dialect })
    }

    pub fn dialect(&self) -> &OpenEdgeAsyncDialect {
        &self.dialect
    }

    /// Check out a connection, pinging it first when it is reused.
    pub async fn get(&self) -> Result<PooledConnection<C>> {
        self.pool.get().await.map_err(|e| {
            let error = match e {
                PoolError::Backend(e) => e,
                e => Error::msg(e.to_string()),
            }
            .context("While checking out an OpenEdge connection");
            log::error!("{:#}", error);
            error
        })
    }

    /// Take the connection out of the pool when the error is a disconnect, otherwise hand it back.
    pub fn evict_if_disconnect(
        &self,
        connection: PooledConnection<C>,
        error: &Error,
    ) -> Option<PooledConnection<C>> {
        if self.dialect.is_disconnect(error) {
            log::warn!("Discarding a disconnected OpenEdge connection: {:#}", error);
            drop(Object::take(connection));
            None
        } else {
            Some(connection)
        }
    }

    pub fn status(&self) -> managed::Status {
        self.pool.status()
    }
}
