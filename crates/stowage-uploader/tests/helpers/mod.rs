//! Test helpers: a scripted in-memory storage gateway.

// Shared across test binaries; not every binary uses every helper.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use stowage_storage::{StorageError, StorageGateway, StorageResult};

/// In-memory gateway that records calls and fails on demand.
///
/// Failures are scripted per file-name fragment; generated object keys end
/// with the sanitized file name, so matching on the name is enough.
#[derive(Default)]
pub struct ScriptedGateway {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    objects: HashMap<String, Bytes>,
    put_keys: Vec<String>,
    failures: HashMap<String, String>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `put_object` fail with `message` for keys containing `fragment`.
    pub fn fail_for(&self, fragment: &str, message: &str) {
        self.inner
            .lock()
            .unwrap()
            .failures
            .insert(fragment.to_string(), message.to_string());
    }

    /// Keys passed to `put_object`, in call order.
    pub fn put_keys(&self) -> Vec<String> {
        self.inner.lock().unwrap().put_keys.clone()
    }

    pub fn object_count(&self) -> usize {
        self.inner.lock().unwrap().objects.len()
    }

    pub fn object(&self, key: &str) -> Option<Bytes> {
        self.inner.lock().unwrap().objects.get(key).cloned()
    }
}

#[async_trait]
impl StorageGateway for ScriptedGateway {
    async fn put_object(&self, key: &str, data: Bytes) -> StorageResult<String> {
        let mut inner = self.inner.lock().unwrap();
        inner.put_keys.push(key.to_string());

        if let Some(message) = inner
            .failures
            .iter()
            .find(|(fragment, _)| key.contains(fragment.as_str()))
            .map(|(_, message)| message.clone())
        {
            return Err(StorageError::Remote(message));
        }

        inner.objects.insert(key.to_string(), data);
        Ok(key.to_string())
    }

    fn public_url(&self, key: &str) -> String {
        format!("http://storage.test/{}", key)
    }

    async fn download(&self, key: &str) -> StorageResult<Vec<u8>> {
        self.inner
            .lock()
            .unwrap()
            .objects
            .get(key)
            .map(|data| data.to_vec())
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }
}
