use ankiconnect_core::{Audio, Note, NoteId};
use indexmap::IndexMap;
use serde_json::json;

use crate::action::Action;
use crate::anki::{single, Anki, Info};
use crate::error::Result;
use crate::protocol::params;

impl Anki {
    /// Add `note` and return its ID
    ///
    /// The remote rejects duplicates and notes that fail its checks by
    /// answering `null`, reported as [`crate::Error::ActionFailed`].
    pub async fn add_note(&self, note: &Note) -> Result<NoteId> {
        let params = params(json!({ "note": note }));
        self.perform(Action::AddNote, params, || {
            serde_json::to_string(note).unwrap_or_default()
        })
        .await
    }

    /// Overwrite fields of an existing note, optionally attaching audio
    pub async fn update_note_fields<K, V>(
        &self,
        note: NoteId,
        fields: impl IntoIterator<Item = (K, V)>,
        audio: &[Audio],
    ) -> Result<&Self>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let fields: IndexMap<String, String> = fields
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();

        let mut update = json!({ "id": note, "fields": fields });
        if !audio.is_empty() {
            update["audio"] = json!(audio);
        }

        let params = params(json!({ "note": update }));
        self.run(Action::UpdateNoteFields, params, || note.to_string())
            .await
    }

    /// Add `tag` to `notes`
    pub async fn add_tags(&self, tag: &str, notes: &[NoteId]) -> Result<&Self> {
        let params = params(json!({ "notes": notes, "tags": tag }));
        self.run(Action::AddTags, params, String::new).await
    }

    /// Remove `tag` from `notes`
    pub async fn remove_tags(&self, tag: &str, notes: &[NoteId]) -> Result<&Self> {
        let params = params(json!({ "notes": notes, "tags": tag }));
        self.run(Action::RemoveTags, params, String::new).await
    }

    /// Every tag in the collection
    pub async fn tags(&self) -> Result<Vec<String>> {
        self.perform(Action::GetTags, None, String::new).await
    }

    /// IDs of the notes matching a search query
    pub async fn find_notes(&self, query: &str) -> Result<Vec<NoteId>> {
        let params = params(json!({ "query": query }));
        self.perform(Action::FindNotes, params, String::new).await
    }

    /// Info objects keyed by note ID; fails when any note does not exist
    pub async fn notes_info(&self, notes: &[NoteId]) -> Result<IndexMap<NoteId, Info>> {
        self.lookup(Action::NotesInfo, "notes", "noteId", "Note", notes)
            .await
    }

    pub async fn note_info(&self, note: NoteId) -> Result<Info> {
        single(self.notes_info(&[note]).await?, note, "Note")
    }

    pub async fn delete_notes(&self, notes: &[NoteId]) -> Result<&Self> {
        let params = params(json!({ "notes": notes }));
        self.run(Action::DeleteNotes, params, String::new).await
    }
}
