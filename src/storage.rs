use std::cell::RefCell;
use std::collections::HashMap;

use web_sys::Storage;

use crate::common::{FormStoreError, FormStoreResult};

/// Persistent key-value store behind the persistence component.
///
/// `clear_all` wipes the whole storage area, not just one key; the
/// opt-out path relies on that. A host that needs a narrower clear can
/// inject its own impl.
pub trait FormStorage {
    fn load_content(&self, key: &str) -> FormStoreResult<Option<String>>;
    fn save_content(&self, key: &str, content: &str) -> FormStoreResult<()>;
    fn delete_content(&self, key: &str) -> FormStoreResult<()>;
    fn clear_all(&self) -> FormStoreResult<()>;

    fn exists(&self, key: &str) -> FormStoreResult<bool> {
        Ok(self.load_content(key)?.is_some())
    }
}

/// The browser's origin-scoped `window.localStorage`.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserStorage {
    storage: Storage,
}

impl BrowserStorage {
    pub fn new() -> FormStoreResult<Self> {
        let window = web_sys::window().ok_or(FormStoreError::NoWindow)?;
        let storage = window
            .local_storage()?
            .ok_or(FormStoreError::NoStorage)?;
        Ok(Self { storage })
    }

    pub fn list_keys(&self) -> FormStoreResult<Vec<String>> {
        let mut result = Vec::new();
        let len = self.storage.length()?;
        for i in 0..len {
            if let Some(key) = self.storage.key(i)? {
                result.push(key);
            }
        }
        Ok(result)
    }
}

impl FormStorage for BrowserStorage {
    fn load_content(&self, key: &str) -> FormStoreResult<Option<String>> {
        Ok(self.storage.get_item(key)?)
    }

    fn save_content(&self, key: &str, content: &str) -> FormStoreResult<()> {
        Ok(self.storage.set_item(key, content)?)
    }

    fn delete_content(&self, key: &str) -> FormStoreResult<()> {
        Ok(self.storage.remove_item(key)?)
    }

    fn clear_all(&self) -> FormStoreResult<()> {
        Ok(self.storage.clear()?)
    }
}

/// In-memory stand-in for tests and headless hosts.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    content: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage {
            content: RefCell::new(HashMap::new()),
        }
    }
}

impl FormStorage for MemoryStorage {
    fn load_content(&self, key: &str) -> FormStoreResult<Option<String>> {
        Ok(self.content.borrow().get(key).cloned())
    }

    fn save_content(&self, key: &str, content: &str) -> FormStoreResult<()> {
        self.content
            .borrow_mut()
            .insert(key.to_string(), content.to_string());
        Ok(())
    }

    fn delete_content(&self, key: &str) -> FormStoreResult<()> {
        self.content.borrow_mut().remove(key);
        Ok(())
    }

    fn clear_all(&self) -> FormStoreResult<()> {
        self.content.borrow_mut().clear();
        Ok(())
    }
}
