use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;

pub mod holiday;

#[derive(Clone)]
pub struct Database {
    pool: AnyPool,
}

impl Database {
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        // Register the bundled drivers for AnyPool (idempotent)
        sqlx::any::install_default_drivers();

        // SQLite serializes writers on a database-wide lock; give contending
        // transactions time to wait instead of failing with SQLITE_BUSY.
        // The pragma is per-connection, so it runs on every connection the
        // pool opens, not once against the pool.
        let is_sqlite = database_url.starts_with("sqlite");

        let pool = AnyPoolOptions::new()
            .max_connections(20)
            .min_connections(5)
            .after_connect(move |conn, _meta| {
                Box::pin(async move {
                    if is_sqlite {
                        sqlx::query("PRAGMA busy_timeout = 5000")
                            .execute(conn)
                            .await?;
                    }
                    Ok(())
                })
            })
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("migrations/sqlite").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }
}
