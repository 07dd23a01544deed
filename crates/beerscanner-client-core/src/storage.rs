//! Client-local persistent key/value storage

use std::{
    collections::{BTreeMap, HashMap},
    fmt::Debug,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::Context as _;

/// Somewhere to keep small string values across runs
pub trait KeyValueStorage: Debug + Send + Sync + 'static {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
    fn remove(&self, key: &str) -> anyhow::Result<()>;
}

/// Lives as long as the process, mainly for tests
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl Debug for MemoryStorage {
    // Values are left out because they hold the token
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys: Vec<String> = self
            .values
            .lock()
            .map(|values| values.keys().cloned().collect())
            .unwrap_or_default();
        f.debug_struct("MemoryStorage").field("keys", &keys).finish()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.values.lock().expect("mutex poisoned").get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values
            .lock()
            .expect("mutex poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.values.lock().expect("mutex poisoned").remove(key);
        Ok(())
    }
}

/// Keeps all values in one RON file. A missing file is the same as an empty one
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> anyhow::Result<BTreeMap<String, String>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {:?}", self.path));
            }
        };
        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        ron::from_str(&text).with_context(|| format!("failed to deserialize {:?}", self.path))
    }

    /// Written to a sibling file first so a crash never leaves half a file
    fn save(&self, values: &BTreeMap<String, String>) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create folder {parent:?}"))?;
            }
        }
        let text = ron::ser::to_string_pretty(values, ron::ser::PrettyConfig::default())
            .context("failed to serialize to ron")?;
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, text).with_context(|| format!("failed to write {tmp_path:?}"))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("failed to replace {:?}", self.path))?;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let _guard = self.lock.lock().expect("mutex poisoned");
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let _guard = self.lock.lock().expect("mutex poisoned");
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        let _guard = self.lock.lock().expect("mutex poisoned");
        let mut values = self.load()?;
        if values.remove(key).is_some() {
            self.save(&values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        std::env::temp_dir()
            .join("beerscanner-storage-tests")
            .join(format!(
                "{}-{}-{name}.ron",
                std::process::id(),
                COUNTER.fetch_add(1, Ordering::SeqCst)
            ))
    }

    #[test]
    fn file_storage_survives_new_instance() {
        // Arrange
        let path = temp_file("persist");
        FileStorage::new(&path).set("token", "abc").unwrap();

        // Act
        let actual = FileStorage::new(&path).get("token").unwrap();

        // Assert
        assert_eq!(actual.as_deref(), Some("abc"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_empty() {
        let storage = FileStorage::new(temp_file("missing"));

        assert_eq!(storage.get("token").unwrap(), None);
        storage.remove("token").unwrap();
        assert!(!storage.path().exists());
    }

    #[test]
    fn remove_only_drops_that_key() {
        // Arrange
        let path = temp_file("remove");
        let storage = FileStorage::new(&path);
        storage.set("token", "abc").unwrap();
        storage.set("other", "keep").unwrap();

        // Act
        storage.remove("token").unwrap();

        // Assert
        assert_eq!(storage.get("token").unwrap(), None);
        assert_eq!(storage.get("other").unwrap().as_deref(), Some("keep"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let path = temp_file("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not ron {").unwrap();

        let actual = FileStorage::new(&path).get("token");

        assert!(actual.is_err());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn memory_debug_hides_values() {
        let storage = MemoryStorage::default();
        storage.set("token", "secret-value").unwrap();

        let actual = format!("{storage:?}");

        assert!(actual.contains("token"));
        assert!(!actual.contains("secret-value"));
    }
}
