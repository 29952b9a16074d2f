//! In-memory album collection and its access operations.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::error::StoreError;

/// A single album record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    /// Caller-supplied identifier, used as the lookup key.
    pub id: String,
    /// Album title, free text.
    pub title: String,
    /// Artist name, free text.
    pub artist: String,
    /// Price, no range validation.
    pub price: f64,
}

/// Ordered in-memory collection of albums.
///
/// The whole collection sits behind a single lock: reads share it, mutations
/// are serialized. Lookup is a linear scan comparing `id` by exact string
/// equality; duplicate ids are permitted and the first match wins.
#[derive(Debug)]
pub struct AlbumStore {
    albums: RwLock<Vec<Album>>,
}

impl AlbumStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            albums: RwLock::new(Vec::new()),
        }
    }

    /// Create a store holding the three seed records.
    pub fn seeded() -> Self {
        Self {
            albums: RwLock::new(vec![
                Album {
                    id: "1".to_string(),
                    title: "Blue Train".to_string(),
                    artist: "John Coltrane".to_string(),
                    price: 56.99,
                },
                Album {
                    id: "2".to_string(),
                    title: "Jeru".to_string(),
                    artist: "Gerry Mulligan".to_string(),
                    price: 17.99,
                },
                Album {
                    id: "3".to_string(),
                    title: "Sarah Vaughan and Clifford Brown".to_string(),
                    artist: "Sarah Vaughan".to_string(),
                    price: 39.99,
                },
            ]),
        }
    }

    /// Return the full ordered snapshot of the collection.
    pub async fn list(&self) -> Vec<Album> {
        let albums = self.albums.read().await;
        info!("album collection was read ({} records)", albums.len());
        albums.clone()
    }

    /// Return the first album whose `id` matches the input exactly.
    pub async fn get(&self, id: &str) -> Result<Album, StoreError> {
        let albums = self.albums.read().await;
        albums
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    /// Append the candidate to the end of the collection, unmodified.
    ///
    /// The caller-supplied id is kept as-is, even if empty or a duplicate of
    /// an existing record.
    pub async fn create(&self, album: Album) -> Album {
        let mut albums = self.albums.write().await;
        albums.push(album.clone());
        info!(id = %album.id, "album created");
        album
    }

    /// Overwrite the first album matching `id` with `replacement`.
    ///
    /// The replacement's own id field is discarded and forced to the `id`
    /// supplied here: resource identity is anchored to the URL parameter,
    /// never to the body.
    pub async fn update(&self, id: &str, mut replacement: Album) -> Result<Album, StoreError> {
        let mut albums = self.albums.write().await;
        match albums.iter_mut().find(|a| a.id == id) {
            Some(slot) => {
                replacement.id = id.to_string();
                *slot = replacement.clone();
                info!(id = %id, "album updated");
                Ok(replacement)
            }
            None => Err(StoreError::NotFound { id: id.to_string() }),
        }
    }

    /// Remove exactly the first album matching `id`.
    ///
    /// The relative order of the remaining albums is preserved.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut albums = self.albums.write().await;
        match albums.iter().position(|a| a.id == id) {
            Some(index) => {
                albums.remove(index);
                info!(id = %id, "album deleted");
                Ok(())
            }
            None => Err(StoreError::NotFound { id: id.to_string() }),
        }
    }

    /// Number of albums currently held.
    pub async fn len(&self) -> usize {
        self.albums.read().await.len()
    }

    /// Whether the collection is empty.
    pub async fn is_empty(&self) -> bool {
        self.albums.read().await.is_empty()
    }
}

impl Default for AlbumStore {
    fn default() -> Self {
        Self::new()
    }
}
