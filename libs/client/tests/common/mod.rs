#![allow(dead_code)]

use std::sync::Arc;

use ankiconnect::{Anki, Client, ScriptedTransport};
use tracing_subscriber::EnvFilter;

pub const VERSION_6: &str = r#"{"result":6,"error":null}"#;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Client on the default endpoint whose transport replays `replies`
pub fn scripted_client(version: u32, replies: &[&str]) -> (Client, Arc<ScriptedTransport>) {
    init_tracing();

    let transport = Arc::new(ScriptedTransport::new());
    for reply in replies {
        transport.respond(*reply);
    }

    let client = Client::new("127.0.0.1", 8765, version)
        .unwrap()
        .with_transport(transport.clone());
    (client, transport)
}

/// Façade past its version check, with `replies` queued for the calls under test
pub async fn scripted_anki(replies: &[&str]) -> (Anki, Arc<ScriptedTransport>) {
    let mut script = vec![VERSION_6];
    script.extend_from_slice(replies);

    let (client, transport) = scripted_client(6, &script);
    let anki = Anki::new(client).await.unwrap();
    (anki, transport)
}

/// Body of the most recent request
pub fn last_request(transport: &ScriptedTransport) -> String {
    transport
        .requests()
        .last()
        .map(|request| request.body_text())
        .unwrap_or_default()
}
