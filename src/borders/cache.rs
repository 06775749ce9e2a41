use axum::body::Bytes;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Rendered silhouettes keyed by canonical country name.
#[derive(Clone)]
pub struct BorderCache {
    storage: Arc<RwLock<HashMap<String, Bytes>>>,
    image_size: u32,
}

impl BorderCache {
    pub fn new(image_size: u32) -> Self {
        Self {
            storage: Arc::default(),
            image_size,
        }
    }

    pub fn image_size(&self) -> u32 {
        self.image_size
    }

    pub async fn get(&self, country: &str) -> Option<Bytes> {
        self.storage.read().await.get(country).cloned()
    }

    pub async fn insert(&self, country: String, png: Bytes) {
        self.storage.write().await.insert(country, png);
    }
}
