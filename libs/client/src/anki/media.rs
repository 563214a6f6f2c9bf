use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::json;

use crate::action::Action;
use crate::anki::Anki;
use crate::error::Result;
use crate::protocol::params;

impl Anki {
    /// Store base64-encoded `data` as `filename` in the media folder
    pub async fn store_media_base64(&self, filename: &str, data: &str) -> Result<&Self> {
        let params = params(json!({ "filename": filename, "data": data }));
        self.run(Action::StoreMediaFile, params, || filename.to_string())
            .await
    }

    /// Store raw bytes as `filename`
    pub async fn store_media_bytes(&self, filename: &str, bytes: &[u8]) -> Result<&Self> {
        self.store_media_base64(filename, &STANDARD.encode(bytes))
            .await
    }

    /// Let the remote download `url` and store it as `filename`
    pub async fn store_media_url(&self, filename: &str, url: &str) -> Result<&Self> {
        let params = params(json!({ "filename": filename, "url": url }));
        self.run(Action::StoreMediaFile, params, || filename.to_string())
            .await
    }

    /// Content of `filename`, base64-encoded
    pub async fn retrieve_media(&self, filename: &str) -> Result<String> {
        let params = params(json!({ "filename": filename }));
        self.perform(Action::RetrieveMediaFile, params, || filename.to_string())
            .await
    }

    /// Content of `filename`, decoded
    pub async fn retrieve_media_bytes(&self, filename: &str) -> Result<Vec<u8>> {
        let params = params(json!({ "filename": filename }));
        let exchange = self
            .settle(Action::RetrieveMediaFile, params, || filename.to_string())
            .await?;

        let encoded: String = exchange.decode()?;
        STANDARD
            .decode(encoded)
            .map_err(|_| exchange.unexpected())
    }

    pub async fn delete_media(&self, filename: &str) -> Result<&Self> {
        let params = params(json!({ "filename": filename }));
        self.run(Action::DeleteMediaFile, params, || filename.to_string())
            .await
    }
}
