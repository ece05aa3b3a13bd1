//! # Note store — owner-scoped CRUD over the `notes` table
//!
//! [`NoteStore`] is the only code that touches the table. Every statement
//! binds the caller's `owner_id`, and the mutating ones also bind the note id,
//! so a user can neither see nor change a row they do not own. Each method
//! runs exactly one auto-committed statement.
//!
//! Writes that cannot apply are silent: blank text is skipped, and updating or
//! deleting an id that does not exist (or belongs to someone else) succeeds
//! without touching anything.

use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::Note;

#[derive(Debug, Clone)]
pub struct NoteStore {
    pool: SqlitePool,
}

impl NoteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All notes belonging to `owner_id`, in storage order.
    pub async fn list(&self, owner_id: &str) -> Result<Vec<Note>> {
        let notes = sqlx::query_as::<_, Note>(
            "SELECT id, owner_id, text FROM notes WHERE owner_id = ?1",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(notes)
    }

    /// Add a note for `owner_id`. Blank text is ignored.
    pub async fn create(&self, owner_id: &str, text: &str) -> Result<()> {
        if is_blank(text) {
            tracing::debug!(owner_id, "skipping blank note");
            return Ok(());
        }

        let id = sqlx::query("INSERT INTO notes (owner_id, text) VALUES (?1, ?2)")
            .bind(owner_id)
            .bind(text)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        tracing::debug!(owner_id, id, "note created");
        Ok(())
    }

    /// Replace the text of note `note_id` if `owner_id` owns it. Blank text is ignored.
    pub async fn update(&self, owner_id: &str, note_id: i64, text: &str) -> Result<()> {
        if is_blank(text) {
            tracing::debug!(owner_id, note_id, "skipping blank update");
            return Ok(());
        }

        let rows_affected = sqlx::query(
            "UPDATE notes SET text = ?1 WHERE id = ?2 AND owner_id = ?3",
        )
        .bind(text)
        .bind(note_id)
        .bind(owner_id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        tracing::debug!(owner_id, note_id, rows_affected, "note update");
        Ok(())
    }

    /// Remove note `note_id` if `owner_id` owns it.
    pub async fn delete(&self, owner_id: &str, note_id: i64) -> Result<()> {
        let rows_affected = sqlx::query("DELETE FROM notes WHERE id = ?1 AND owner_id = ?2")
            .bind(note_id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::debug!(owner_id, note_id, rows_affected, "note delete");
        Ok(())
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    async fn store() -> NoteStore {
        let pool = db::connect("sqlite::memory:").await.unwrap();
        db::init_schema(&pool).await.unwrap();
        NoteStore::new(pool)
    }

    async fn total_rows(store: &NoteStore) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM notes")
            .fetch_one(&store.pool)
            .await
            .unwrap();
        count
    }

    #[tokio::test]
    async fn create_then_list_returns_the_note() {
        let store = store().await;
        store.create("user-1", "hello").await.unwrap();

        let notes = store.list("user-1").await.unwrap();
        assert_eq!(
            notes,
            vec![Note {
                id: 1,
                owner_id: "user-1".into(),
                text: "hello".into(),
            }]
        );
    }

    #[tokio::test]
    async fn text_is_stored_verbatim() {
        let store = store().await;
        store.create("user-1", "  spaced out \n").await.unwrap();
        store
            .create("user-1", "<b>'; DROP TABLE notes; --</b>")
            .await
            .unwrap();

        let texts: Vec<String> = store
            .list("user-1")
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.text)
            .collect();
        assert!(texts.contains(&"  spaced out \n".to_string()));
        assert!(texts.contains(&"<b>'; DROP TABLE notes; --</b>".to_string()));
    }

    #[tokio::test]
    async fn blank_text_is_not_created() {
        let store = store().await;
        store.create("user-1", "").await.unwrap();
        store.create("user-1", "   \t\n").await.unwrap();

        assert!(store.list("user-1").await.unwrap().is_empty());
        assert_eq!(total_rows(&store).await, 0);
    }

    #[tokio::test]
    async fn owners_only_see_their_own_notes() {
        let store = store().await;
        store.create("alice", "alice's note").await.unwrap();
        store.create("bob", "bob's note").await.unwrap();
        store.create("alice", "another").await.unwrap();

        let alice = store.list("alice").await.unwrap();
        let bob = store.list("bob").await.unwrap();

        assert_eq!(alice.len(), 2);
        assert!(alice.iter().all(|n| n.owner_id == "alice"));
        assert_eq!(bob.len(), 1);
        assert_eq!(bob[0].text, "bob's note");
        assert!(store.list("carol").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_changes_only_the_owned_row() {
        let store = store().await;
        store.create("alice", "first").await.unwrap();
        store.create("alice", "second").await.unwrap();

        store.update("alice", 1, "edited").await.unwrap();

        let notes = store.list("alice").await.unwrap();
        let first = notes.iter().find(|n| n.id == 1).unwrap();
        let second = notes.iter().find(|n| n.id == 2).unwrap();
        assert_eq!(first.text, "edited");
        assert_eq!(second.text, "second");
    }

    #[tokio::test]
    async fn update_by_another_owner_is_a_silent_no_op() {
        let store = store().await;
        store.create("alice", "mine").await.unwrap();

        store.update("bob", 1, "hijacked").await.unwrap();

        assert_eq!(store.list("alice").await.unwrap()[0].text, "mine");
        assert!(store.list("bob").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_of_missing_id_is_a_silent_no_op() {
        let store = store().await;
        store.create("alice", "mine").await.unwrap();

        store.update("alice", 99, "ghost").await.unwrap();

        assert_eq!(store.list("alice").await.unwrap()[0].text, "mine");
        assert_eq!(total_rows(&store).await, 1);
    }

    #[tokio::test]
    async fn blank_update_keeps_existing_text() {
        let store = store().await;
        store.create("alice", "keep me").await.unwrap();

        store.update("alice", 1, " ").await.unwrap();

        assert_eq!(store.list("alice").await.unwrap()[0].text, "keep me");
    }

    #[tokio::test]
    async fn delete_removes_the_owned_row() {
        let store = store().await;
        store.create("alice", "doomed").await.unwrap();
        store.create("alice", "survivor").await.unwrap();

        store.delete("alice", 1).await.unwrap();

        let notes = store.list("alice").await.unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].text, "survivor");
    }

    #[tokio::test]
    async fn delete_by_another_owner_or_missing_id_is_a_silent_no_op() {
        let store = store().await;
        store.create("alice", "mine").await.unwrap();

        store.delete("bob", 1).await.unwrap();
        store.delete("alice", 42).await.unwrap();

        assert_eq!(total_rows(&store).await, 1);
        assert_eq!(store.list("alice").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = store().await;
        store.create("alice", "one").await.unwrap();
        store.delete("alice", 1).await.unwrap();
        store.create("alice", "two").await.unwrap();

        assert_eq!(store.list("alice").await.unwrap()[0].id, 2);
    }
}
