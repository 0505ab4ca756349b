//! Temp-file database used by the repository tests.

use std::sync::Arc;

use tempfile::TempDir;

use crate::db::{create_pool, init, run_migrations, spawn_writer, DbPool, WriteHandle};

pub struct Store {
    pub pool: Arc<DbPool>,
    pub writer: WriteHandle,
    // Deleted on drop; keep it alive for the whole test.
    _dir: TempDir,
}

/// Must be called from within a Tokio runtime (the writer is spawned on it).
pub fn setup() -> Store {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let db_path = dir.path().join("test.db").to_string_lossy().to_string();
    let db_path = init(&db_path).expect("Failed to initialize database");
    let pool = create_pool(&db_path).expect("Failed to create pool");
    run_migrations(&pool).expect("Failed to run migrations");
    let writer = spawn_writer((*pool).clone());
    Store {
        pool,
        writer,
        _dir: dir,
    }
}
