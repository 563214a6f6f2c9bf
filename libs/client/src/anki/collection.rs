use serde_json::json;

use crate::action::Action;
use crate::anki::Anki;
use crate::error::Result;
use crate::protocol::params;

impl Anki {
    /// Names of every profile
    pub async fn profiles(&self) -> Result<Vec<String>> {
        self.perform(Action::GetProfiles, None, String::new).await
    }

    /// Switch to profile `name`
    pub async fn load_profile(&self, name: &str) -> Result<&Self> {
        self.run(Action::LoadProfile, params(json!({ "name": name })), || {
            name.to_string()
        })
        .await
    }

    /// Synchronize the local collection with AnkiWeb
    pub async fn sync(&self) -> Result<&Self> {
        self.run(Action::Sync, None, String::new).await
    }

    pub async fn reload_collection(&self) -> Result<&Self> {
        self.run(Action::ReloadCollection, None, String::new).await
    }

    /// Import an `.apkg` file; `path` is resolved by the remote
    pub async fn import_package(&self, path: &str) -> Result<&Self> {
        self.run(Action::ImportPackage, params(json!({ "path": path })), || {
            path.to_string()
        })
        .await
    }

    /// Export `deck` to an `.apkg` file at `path`, optionally with scheduling data
    pub async fn export_package(
        &self,
        deck: &str,
        path: &str,
        include_sched: bool,
    ) -> Result<&Self> {
        let params = params(json!({
            "deck": deck,
            "path": path,
            "includeSched": include_sched,
        }));

        self.run(Action::ExportPackage, params, || format!("{deck}: {path}"))
            .await
    }
}
