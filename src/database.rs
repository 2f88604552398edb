use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, SqlitePool, migrate::Migrator};
use tracing::info;

use crate::argument_parsing::Args;
use crate::buckets::HourBucket;
use crate::models::{ClickEvent, EventCount};
use crate::postgres_queries::INSERT_CLICKS_QUERY;
use crate::shared_queries::{SELECT_EVENT_COUNTS_IN_RANGE_QUERY, SELECT_PAGES_QUERY};
use crate::sqlite_queries::INSERT_CLICK_QUERY;
use crate::store::{ClickStore, StorageError};

const POSTGRES_MIGRATIONS: &str = "./migrations_pg";
const SQLITE_MIGRATIONS: &str = "./migrations_sq";

#[derive(Clone, Debug)]
pub enum Database {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl Database {
    /// Postgres when a non-blank connection string was given, Sqlite otherwise.
    pub async fn connect(args: &Args) -> Result<Self, StorageError> {
        match args.postgres_url() {
            Some(pg) => {
                info!("connecting to postgres");
                Ok(Self::Postgres(PgPool::connect(pg).await?))
            }
            None => {
                info!(url = %args.sqlite, "connecting to sqlite");
                Ok(Self::Sqlite(SqlitePool::connect(&args.sqlite).await?))
            }
        }
    }

    pub async fn migrate(&self) -> Result<(), StorageError> {
        match self {
            Self::Postgres(p) => Migrator::new(Path::new(POSTGRES_MIGRATIONS))
                .await?
                .run(p)
                .await?,
            Self::Sqlite(s) => Migrator::new(Path::new(SQLITE_MIGRATIONS))
                .await?
                .run(s)
                .await?,
        }
        Ok(())
    }

    async fn insert_events_postgres(
        pool: &PgPool,
        events: &[ClickEvent],
    ) -> Result<u64, StorageError> {
        let times: Vec<DateTime<Utc>> = events.iter().map(|e| e.time).collect();
        let pages: Vec<String> = events.iter().map(|e| e.page.clone()).collect();
        let names: Vec<String> = events.iter().map(|e| e.event.clone()).collect();

        let result = sqlx::query(INSERT_CLICKS_QUERY)
            .bind(times)
            .bind(pages)
            .bind(names)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn insert_events_sqlite(
        pool: &SqlitePool,
        events: &[ClickEvent],
    ) -> Result<u64, StorageError> {
        let mut tx = pool.begin().await?;
        let mut inserted = 0;
        for event in events {
            inserted += sqlx::query(INSERT_CLICK_QUERY)
                .bind(event.time)
                .bind(&event.page)
                .bind(&event.event)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }
        tx.commit().await?;

        Ok(inserted)
    }
}

#[async_trait]
impl ClickStore for Database {
    async fn pages(&self) -> Result<Vec<String>, StorageError> {
        let pages = match self {
            Self::Postgres(p) => {
                sqlx::query_scalar::<_, String>(SELECT_PAGES_QUERY)
                    .fetch_all(p)
                    .await?
            }
            Self::Sqlite(s) => {
                sqlx::query_scalar::<_, String>(SELECT_PAGES_QUERY)
                    .fetch_all(s)
                    .await?
            }
        };
        Ok(pages)
    }

    async fn event_counts(
        &self,
        page: &str,
        bucket: HourBucket,
    ) -> Result<Vec<EventCount>, StorageError> {
        let rows = match self {
            Self::Postgres(p) => {
                sqlx::query_as::<_, EventCount>(SELECT_EVENT_COUNTS_IN_RANGE_QUERY)
                    .bind(page)
                    .bind(bucket.start)
                    .bind(bucket.end)
                    .fetch_all(p)
                    .await?
            }
            Self::Sqlite(s) => {
                sqlx::query_as::<_, EventCount>(SELECT_EVENT_COUNTS_IN_RANGE_QUERY)
                    .bind(page)
                    .bind(bucket.start)
                    .bind(bucket.end)
                    .fetch_all(s)
                    .await?
            }
        };
        Ok(rows)
    }

    async fn insert_events(&self, events: &[ClickEvent]) -> Result<u64, StorageError> {
        if events.is_empty() {
            return Ok(0);
        }
        match self {
            Self::Postgres(p) => Self::insert_events_postgres(p, events).await,
            Self::Sqlite(s) => Self::insert_events_sqlite(s, events).await,
        }
    }
}
