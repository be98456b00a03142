#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod schema;

#[cfg(feature = "server")]
use sqlx::{sqlite::SqlitePool, Executor, Pool, Sqlite};
#[cfg(feature = "server")]
use std::path::PathBuf;
#[cfg(feature = "server")]
use std::sync::OnceLock;

/// The global database connection pool
#[cfg(feature = "server")]
static DB_POOL: OnceLock<Pool<Sqlite>> = OnceLock::new();

/// Initialize the database
#[cfg(feature = "server")]
pub async fn init_database() -> Result<Pool<Sqlite>, sqlx::Error> {
    // Check for existing pool
    if let Some(pool) = DB_POOL.get() {
        return Ok(pool.clone());
    }

    // Desktop builds keep the donor registry on disk so it survives
    // restarts; everything else runs on an in-memory database.
    #[cfg(feature = "desktop")]
    {
        let db_path = get_desktop_database_path();

        if db_path == PathBuf::from(":memory:") {
            tracing::warn!("Using in-memory database - donors will not persist between sessions");
            return get_memory_database().await;
        }

        tracing::info!("Using database at: {}", db_path.display());
        let db_url = format!("sqlite:{}", db_path.display());

        match SqlitePool::connect(&db_url).await {
            Ok(pool) => {
                if let Err(e) = run_migrations(&pool).await {
                    tracing::error!("Migration error: {}", e);
                    return get_memory_database().await;
                }

                // Store in global static
                let _ = DB_POOL.set(pool.clone());
                return Ok(pool);
            }
            Err(e) => {
                tracing::error!(
                    "Database connection error: {} for path {}",
                    e,
                    db_path.display()
                );
                return get_memory_database().await;
            }
        }
    }

    // For non-desktop builds, just use in-memory database
    #[cfg(not(feature = "desktop"))]
    {
        return get_memory_database().await;
    }
}

/// Get a connection to the database
#[cfg(feature = "server")]
pub async fn get_database() -> Result<Pool<Sqlite>, sqlx::Error> {
    if let Some(pool) = DB_POOL.get() {
        Ok(pool.clone())
    } else {
        init_database().await
    }
}

/// Run database migrations
#[cfg(feature = "server")]
async fn run_migrations(pool: &Pool<Sqlite>) -> Result<(), sqlx::Error> {
    // Create tables if they don't exist
    pool.execute(
        r#"
        CREATE TABLE IF NOT EXISTS donors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            blood_group TEXT NOT NULL,
            phone TEXT NOT NULL,
            email TEXT NOT NULL,
            address TEXT NOT NULL,
            registration_date TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            last_donation TEXT
        );
        "#,
    )
    .await?;

    Ok(())
}

/// Get the path to the database file
#[cfg(feature = "server")]
fn get_desktop_database_path() -> PathBuf {
    // Keep the registry under ~/Documents/donorhub for desktop builds
    if let Some(home_dir) = dirs::home_dir() {
        let app_dir = home_dir.join("Documents").join("donorhub");

        if !app_dir.exists() {
            if let Err(e) = std::fs::create_dir_all(&app_dir) {
                tracing::error!("Could not create app directory: {}", e);
                return PathBuf::from(":memory:");
            }
        }

        let db_path = app_dir.join("donors.db");

        // If file doesn't exist, try to create it
        if !db_path.exists() {
            if let Err(e) = std::fs::File::create(&db_path) {
                tracing::error!("Could not create database file: {}", e);
                return PathBuf::from(":memory:");
            }
        }

        // Final check - make sure the file is writable
        match std::fs::OpenOptions::new().write(true).open(&db_path) {
            Ok(_) => return db_path,
            Err(e) => {
                tracing::error!(
                    "Database file is not writable: {} - {}",
                    db_path.display(),
                    e
                );
                return PathBuf::from(":memory:");
            }
        }
    }

    tracing::warn!("Could not determine home directory, using in-memory database");
    PathBuf::from(":memory:")
}

/// Get an in-memory database connection - useful when file permissions are an issue
#[cfg(feature = "server")]
pub async fn get_memory_database() -> Result<Pool<Sqlite>, sqlx::Error> {
    let pool = SqlitePool::connect("sqlite::memory:").await?;

    if let Err(e) = run_migrations(&pool).await {
        tracing::warn!("Migration error on in-memory database: {}", e);
    }

    let _ = DB_POOL.set(pool.clone());
    Ok(pool)
}
