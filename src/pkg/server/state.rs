use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool, Pool, Postgres, Transaction};

use crate::{
    conf::Settings,
    pkg::internal::{ai::GeminiClient, files::FileStore},
    prelude::Result,
};

pub fn db_pool(settings: &Settings) -> Result<Pool<Postgres>> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.database_pool_max_connections)
        .connect_lazy(&settings.database_url)?;
    Ok(pool)
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: Arc<PgPool>,
    pub ai_client: Arc<GeminiClient>,
    pub file_store: Arc<FileStore>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Result<AppState> {
        Ok(AppState {
            db_pool: Arc::new(db_pool(settings)?),
            ai_client: Arc::new(GeminiClient::new(settings)),
            file_store: Arc::new(FileStore::new(&settings.upload_dir)),
        })
    }
}

#[async_trait]
pub trait GetTxn {
    async fn begin_txn(&self) -> Result<Transaction<'static, Postgres>>;
}

#[async_trait]
impl GetTxn for Arc<PgPool> {
    async fn begin_txn(&self) -> Result<Transaction<'static, Postgres>> {
        Ok(self.begin().await?)
    }
}
