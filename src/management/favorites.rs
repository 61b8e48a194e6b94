use std::{io::Error, path::PathBuf};

#[derive(Debug)]
pub enum FavoritesError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for FavoritesError {
    fn from(err: Error) -> Self {
        FavoritesError::IoError(err)
    }
}

/// The persisted favorites set: artist ids in toggle order, stored as a JSON
/// array under a single well-known file.
///
/// Read once at startup; every toggle rewrites the full array. Missing or
/// corrupt stored content yields the empty set, never an error.
pub struct FavoritesManager {
    favorites: Vec<u32>,
}

impl FavoritesManager {
    pub fn new() -> Self {
        Self {
            favorites: Vec::new(),
        }
    }

    /// Builds a manager from raw stored content. Corrupt content reads as
    /// the empty set.
    pub fn from_json(content: &str) -> Self {
        Self {
            favorites: serde_json::from_str(content).unwrap_or_default(),
        }
    }

    pub async fn load() -> Self {
        let path = Self::store_path();
        match async_fs::read_to_string(path).await {
            Ok(content) => Self::from_json(&content),
            Err(_) => Self::new(),
        }
    }

    pub fn contains(&self, artist_id: u32) -> bool {
        self.favorites.contains(&artist_id)
    }

    /// Toggles membership; returns whether the id is a favorite afterwards.
    /// Toggling twice restores the original membership state.
    pub fn toggle(&mut self, artist_id: u32) -> bool {
        match self.favorites.iter().position(|id| *id == artist_id) {
            Some(index) => {
                self.favorites.remove(index);
                false
            }
            None => {
                self.favorites.push(artist_id);
                true
            }
        }
    }

    pub fn ids(&self) -> &Vec<u32> {
        &self.favorites
    }

    pub fn count(&self) -> usize {
        self.favorites.len()
    }

    /// Rewrites the full persisted array. No partial or merge writes.
    pub async fn persist(&self) -> Result<(), FavoritesError> {
        let path = Self::store_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| FavoritesError::IoError(e))?;
        }

        let json =
            serde_json::to_string_pretty(&self.favorites).map_err(|e| FavoritesError::SerdeError(e))?;
        async_fs::write(path, json)
            .await
            .map_err(|e| FavoritesError::IoError(e))
    }

    fn store_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("groupli/state/favorites.json");
        path
    }
}

impl Default for FavoritesManager {
    fn default() -> Self {
        Self::new()
    }
}
