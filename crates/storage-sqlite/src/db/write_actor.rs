use std::any::Any;

use diesel::{Connection, SqliteConnection};
use log::{debug, error};
use tokio::sync::{mpsc, oneshot};

use super::DbPool;
use crate::errors::StorageError;
use spendtrack_core::errors::{Error, Result};

// A write job runs against the actor's connection inside an immediate transaction.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;
type AnyBox = Box<dyn Any + Send + 'static>;
type Envelope = (Job<AnyBox>, oneshot::Sender<Result<AnyBox>>);

const WRITE_QUEUE_CAPACITY: usize = 1024;

/// Handle for sending jobs to the writer actor.
///
/// All mutations go through one connection so SQLite never sees two
/// concurrent writers from this process.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<Envelope>,
}

impl WriteHandle {
    /// Executes `job` on the writer's connection and waits for its result.
    ///
    /// The job's changes are committed only when it returns `Ok`.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as AnyBox)),
                ret_tx,
            ))
            .await
            .map_err(|_| Error::Unexpected("Database writer is not running".to_string()))?;

        let boxed = ret_rx.await.map_err(|_| {
            Error::Unexpected("Database writer dropped the reply channel".to_string())
        })??;

        boxed
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| Error::Unexpected("Database writer returned an unexpected type".to_string()))
    }
}

/// Spawns the background task that owns the single writer connection.
///
/// The task ends once every `WriteHandle` has been dropped.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<Envelope>(WRITE_QUEUE_CAPACITY);

    tokio::spawn(async move {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                error!("Writer actor could not acquire a database connection: {}", e);
                // Dropping `rx` makes every pending and future `exec` fail.
                return;
            }
        };

        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<AnyBox> = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(Error::from);

            // The caller may have gone away (request cancelled); nothing to do then.
            let _ = reply_tx.send(result);
        }
        debug!("Writer actor stopped");
    });

    WriteHandle { tx }
}
