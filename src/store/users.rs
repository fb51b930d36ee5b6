use crate::{
    error::{LaunchpadError, Result},
    model::User,
    validation,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::sync::RwLock;

/// Serialized shape of the user table
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct UserTable {
    #[serde(default)]
    next_id: u64,
    /// Users keyed by email
    #[serde(default)]
    users: BTreeMap<String, User>,
}

impl UserTable {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn user_mut(&mut self, email: &str) -> Result<&mut User> {
        self.users
            .get_mut(email)
            .ok_or_else(|| LaunchpadError::UserNotFound(email.to_string()))
    }
}

pub struct UserStore {
    table: RwLock<UserTable>,
    snapshot_path: Option<PathBuf>,
}

impl UserStore {
    pub fn in_memory() -> Self {
        Self {
            table: RwLock::new(UserTable::default()),
            snapshot_path: None,
        }
    }

    /// Open a store backed by a JSON snapshot, loading it if it exists.
    pub fn open(path: &Path) -> Result<Self> {
        let table = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let mut table: UserTable = serde_json::from_str(&content)?;
            let max_id = table.users.values().map(|u| u.id).max().unwrap_or(0);
            table.next_id = table.next_id.max(max_id);
            tracing::info!(path = %path.display(), users = table.users.len(), "Loaded user snapshot");
            table
        } else {
            UserTable::default()
        };

        Ok(Self {
            table: RwLock::new(table),
            snapshot_path: Some(path.to_path_buf()),
        })
    }

    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.table.read().await.users.get(email).cloned()
    }

    /// Return the user for `email`, creating one if needed.
    pub async fn find_or_create(&self, email: &str) -> Result<User> {
        validation::validate_email(email)?;

        if let Some(user) = self.find_by_email(email).await {
            return Ok(user);
        }

        self.update(|table| {
            // another writer may have created it since the read above
            if let Some(user) = table.users.get(email) {
                return Ok(user.clone());
            }
            let id = table.allocate_id();
            let user = User::new(id, email.to_string());
            tracing::info!(id = user.id, email = %user.email, "Creating user");
            table.users.insert(email.to_string(), user.clone());
            Ok(user)
        })
        .await
    }

    pub async fn set_token(&self, email: &str, token: String) -> Result<User> {
        self.update(|table| {
            let user = table.user_mut(email)?;
            user.token = Some(token);
            Ok(user.clone())
        })
        .await
    }

    /// Book each launch for the user; already-booked launches are left as is.
    pub async fn book_trips(&self, email: &str, launch_ids: &[String]) -> Result<()> {
        self.update(|table| {
            let user = table.user_mut(email)?;
            for id in launch_ids {
                user.book(id);
            }
            tracing::info!(email = %email, launches = ?launch_ids, "Booking trips");
            Ok(())
        })
        .await
    }

    /// Returns false when the user had no such trip.
    pub async fn cancel_trip(&self, email: &str, launch_id: &str) -> Result<bool> {
        self.update(|table| {
            let cancelled = table.user_mut(email)?.cancel(launch_id);
            if cancelled {
                tracing::info!(email = %email, launch = %launch_id, "Cancelling trip");
            }
            Ok(cancelled)
        })
        .await
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Apply `change` to a copy of the table, write the snapshot, then swap
    /// the copy in. A failed change or write leaves the table untouched.
    async fn update<T, F>(&self, change: F) -> Result<T>
    where
        F: FnOnce(&mut UserTable) -> Result<T>,
    {
        let mut table = self.table.write().await;
        let mut next = table.clone();
        let out = change(&mut next)?;
        self.persist(&next).await?;
        *table = next;
        Ok(out)
    }

    async fn persist(&self, table: &UserTable) -> Result<()> {
        let Some(path) = self.snapshot_path.clone() else {
            return Ok(());
        };
        let content = serde_json::to_string_pretty(table)?;
        tokio::task::spawn_blocking(move || atomic_write(&path, &content))
            .await
            .map_err(|e| LaunchpadError::Storage(format!("Snapshot writer failed: {}", e)))?
    }
}

fn atomic_write(target_path: &Path, content: &str) -> Result<()> {
    let target_dir = target_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(target_dir)?;

    // Temp file must live beside the target for the rename to be atomic
    let mut temp_file = NamedTempFile::new_in(target_dir)
        .map_err(|e| LaunchpadError::Storage(format!("Failed to create temp file: {}", e)))?;

    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| LaunchpadError::Storage(format!("Failed to write to temp file: {}", e)))?;

    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| LaunchpadError::Storage(format!("Failed to sync temp file: {}", e)))?;

    temp_file.persist(target_path).map_err(|e| {
        LaunchpadError::Storage(format!(
            "Failed to persist {}: {}",
            target_path.display(),
            e.error
        ))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_find_or_create_assigns_sequential_ids() {
        let store = UserStore::in_memory();
        let a = store.find_or_create("a@example.com").await.unwrap();
        let b = store.find_or_create("b@example.com").await.unwrap();
        let a_again = store.find_or_create("a@example.com").await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a_again.id, 1);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_find_or_create_rejects_bad_email() {
        let store = UserStore::in_memory();
        assert!(store.find_or_create("nope").await.is_err());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_book_and_cancel() {
        let store = UserStore::in_memory();
        store.find_or_create("a@example.com").await.unwrap();

        store
            .book_trips("a@example.com", &ids(&["3", "4", "3"]))
            .await
            .unwrap();

        let user = store.find_by_email("a@example.com").await.unwrap();
        assert_eq!(user.trips, vec!["3", "4"]);

        assert!(store.cancel_trip("a@example.com", "3").await.unwrap());
        assert!(!store.cancel_trip("a@example.com", "3").await.unwrap());
        let user = store.find_by_email("a@example.com").await.unwrap();
        assert_eq!(user.trips, vec!["4"]);
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let store = UserStore::in_memory();
        let err = store
            .book_trips("ghost@example.com", &ids(&["1"]))
            .await
            .unwrap_err();
        assert!(matches!(err, LaunchpadError::UserNotFound(_)));
        assert_eq!(err.to_string(), "User not found: ghost@example.com");
    }

    #[tokio::test]
    async fn test_snapshot_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state").join("users.json");

        {
            let store = UserStore::open(&path).unwrap();
            store.find_or_create("a@example.com").await.unwrap();
            store
                .set_token("a@example.com", "tok".to_string())
                .await
                .unwrap();
            store
                .book_trips("a@example.com", &ids(&["7"]))
                .await
                .unwrap();
        }
        assert!(path.exists());

        let store = UserStore::open(&path).unwrap();
        let user = store.find_by_email("a@example.com").await.unwrap();
        assert_eq!(user.trips, vec!["7"]);
        assert_eq!(user.token.as_deref(), Some("tok"));

        // ids keep counting from the snapshot
        let b = store.find_or_create("b@example.com").await.unwrap();
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn test_failed_snapshot_write_leaves_table_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        // parent of the snapshot is a regular file, so every write fails
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();
        let store = UserStore::open(&blocker.join("users.json")).unwrap();

        assert!(store.find_or_create("a@example.com").await.is_err());
        assert!(store.find_by_email("a@example.com").await.is_none());
        assert!(store.find_or_create("a@example.com").await.is_err());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_failed_write_keeps_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");
        let store = UserStore::open(&path).unwrap();
        store.find_or_create("a@example.com").await.unwrap();
        store
            .book_trips("a@example.com", &ids(&["1"]))
            .await
            .unwrap();

        // replace the snapshot's directory entry with a directory so the rename fails
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();

        assert!(store.cancel_trip("a@example.com", "1").await.is_err());
        let user = store.find_by_email("a@example.com").await.unwrap();
        assert_eq!(user.trips, vec!["1"]);
    }
}
