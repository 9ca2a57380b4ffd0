use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use std::path::Path;
use std::sync::Arc;
use wall_shared::models::Note;

const NOTES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("notes");

pub struct Storage {
    db: Database,
}

impl Storage {
    pub fn open(path: &Path) -> Arc<Self> {
        let db = Database::create(path)
            .unwrap_or_else(|e| panic!("Failed to open database at {}: {}", path.display(), e));

        // Ensure table exists
        let write_txn = db.begin_write().expect("Failed to begin write txn");
        {
            let _ = write_txn.open_table(NOTES_TABLE);
        }
        write_txn.commit().expect("Failed to commit initial txn");

        Arc::new(Storage { db })
    }

    pub fn save_note(&self, note: &Note) -> Result<(), String> {
        let json = serde_json::to_vec(note).map_err(|e| e.to_string())?;

        let write_txn = self.db.begin_write().map_err(|e| e.to_string())?;
        {
            let mut table = write_txn.open_table(NOTES_TABLE).map_err(|e| e.to_string())?;
            table
                .insert(note.id.as_str(), json.as_slice())
                .map_err(|e| e.to_string())?;
        }
        write_txn.commit().map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn get_note(&self, id: &str) -> Result<Option<Note>, String> {
        let read_txn = self.db.begin_read().map_err(|e| e.to_string())?;
        let table = read_txn.open_table(NOTES_TABLE).map_err(|e| e.to_string())?;

        match table.get(id).map_err(|e| e.to_string())? {
            Some(value) => {
                let note: Note =
                    serde_json::from_slice(value.value()).map_err(|e| e.to_string())?;
                Ok(Some(note))
            }
            None => Ok(None),
        }
    }

    /// All notes, newest first (creation time, then id as a tie-break so
    /// the order is total).
    pub fn list_notes(&self) -> Result<Vec<Note>, String> {
        let read_txn = self.db.begin_read().map_err(|e| e.to_string())?;
        let table = read_txn.open_table(NOTES_TABLE).map_err(|e| e.to_string())?;

        let mut notes = Vec::new();
        for entry in table.iter().map_err(|e| e.to_string())? {
            let (_, value) = entry.map_err(|e| e.to_string())?;
            let note: Note = serde_json::from_slice(value.value()).map_err(|e| e.to_string())?;
            notes.push(note);
        }
        notes.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(notes)
    }

    pub fn count_notes(&self) -> Result<u64, String> {
        let read_txn = self.db.begin_read().map_err(|e| e.to_string())?;
        let table = read_txn.open_table(NOTES_TABLE).map_err(|e| e.to_string())?;
        table.len().map_err(|e| e.to_string())
    }

    pub fn delete_note(&self, id: &str) -> Result<bool, String> {
        let write_txn = self.db.begin_write().map_err(|e| e.to_string())?;
        let removed = {
            let mut table = write_txn.open_table(NOTES_TABLE).map_err(|e| e.to_string())?;
            let result = table.remove(id).map_err(|e| e.to_string())?;
            result.is_some()
        };
        write_txn.commit().map_err(|e| e.to_string())?;
        Ok(removed)
    }
}
