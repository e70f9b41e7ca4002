use crate::{
    domain::{Club, Competition},
    ports::record_store::{Error, RecordStorePort},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Record store over the legacy JSON files.
///
/// Each collection lives in its own file as a top-level object with a single
/// key (`"clubs"` or `"competitions"`) holding the record array. Every save
/// rewrites the whole file; there is no locking, so this adapter assumes a
/// single writing process.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    clubs_path: PathBuf,
    competitions_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(clubs_path: impl AsRef<Path>, competitions_path: impl AsRef<Path>) -> Self {
        Self {
            clubs_path: clubs_path.as_ref().to_path_buf(),
            competitions_path: competitions_path.as_ref().to_path_buf(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ClubsFile {
    clubs: Vec<Club>,
}

#[derive(Serialize, Deserialize)]
struct CompetitionsFile {
    competitions: Vec<Competition>,
}

#[async_trait::async_trait]
impl RecordStorePort for JsonFileStore {
    async fn load_clubs(&self) -> Result<Vec<Club>, Error> {
        let raw = fs::read(&self.clubs_path).await?;
        let file: ClubsFile = serde_json::from_slice(&raw)?;
        Ok(file.clubs)
    }

    async fn load_competitions(&self) -> Result<Vec<Competition>, Error> {
        let raw = fs::read(&self.competitions_path).await?;
        let file: CompetitionsFile = serde_json::from_slice(&raw)?;
        Ok(file.competitions)
    }

    async fn save_clubs(&self, clubs: Vec<Club>) -> Result<(), Error> {
        let raw = serde_json::to_vec_pretty(&ClubsFile { clubs })?;
        fs::write(&self.clubs_path, raw).await?;
        Ok(())
    }

    async fn save_competitions(&self, competitions: Vec<Competition>) -> Result<(), Error> {
        let raw = serde_json::to_vec_pretty(&CompetitionsFile { competitions })?;
        fs::write(&self.competitions_path, raw).await?;
        Ok(())
    }
}

/// Adapter-specific error conversions, erased into the port's storage error.
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(Box::new(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(Box::new(err))
    }
}
