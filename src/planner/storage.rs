use std::{
    future::Future,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Result;
use fs4::tokio::AsyncFileExt;
use serde::{de::DeserializeOwned, Serialize};
use tokio::{
    fs::File,
    io::{AsyncReadExt, AsyncWriteExt},
};
use tracing::{debug, warn};

/// Interface for abstracting persistence of whole collections keyed by name.
/// Loading never fails from the caller's point of view: anything absent or
/// unreadable comes back as `None` and the application starts that collection
/// empty.
pub trait StateStorage {
    fn load<T: DeserializeOwned>(&self, key: &str) -> impl Future<Output = Option<T>>;

    fn save<T: Serialize + Sync>(&self, key: &str, value: &T)
        -> impl Future<Output = Result<()>>;
}

/// The main realization of [StateStorage]. Each key lives in its own
/// `<key>.json` file under the state directory, guarded by advisory file
/// locks so overlapping invocations degrade to last-write-wins instead of
/// torn files.
pub struct JsonStateStorage {
    state_dir: PathBuf,
}

impl JsonStateStorage {
    pub fn new(state_dir: PathBuf) -> Result<Self, std::io::Error> {
        std::fs::create_dir_all(&state_dir)?;

        Ok(Self { state_dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.state_dir.join(format!("{key}.json"))
    }

    async fn read_raw(path: &Path) -> std::io::Result<Option<String>> {
        let mut file = match File::open(path).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        file.lock_shared()?;
        let mut contents = String::new();
        let read = file.read_to_string(&mut contents).await;
        file.unlock_async().await?;
        read?;
        Ok(Some(contents))
    }
}

impl StateStorage for JsonStateStorage {
    async fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.key_path(key);
        debug!("Loading {path:?}");

        let contents = match Self::read_raw(&path).await {
            Ok(Some(contents)) => contents,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read {path:?}: {e}");
                return None;
            }
        };

        match serde_json::from_str::<T>(&contents) {
            Ok(value) => Some(value),
            Err(e) => {
                // Corrupt state is not worth dying over; the collection
                // restarts empty and the next save overwrites the file.
                warn!("Ignoring corrupt state in {path:?}: {e}");
                None
            }
        }
    }

    async fn save<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.key_path(key);
        let contents = serde_json::to_string(value)?;

        let mut file = File::options()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .await?;

        file.lock_exclusive()?;
        let write = async {
            file.set_len(0).await?;
            file.write_all(contents.as_bytes()).await?;
            file.flush().await?;
            Ok::<_, std::io::Error>(())
        }
        .await;
        file.unlock_async().await?;
        write?;
        Ok(())
    }
}
