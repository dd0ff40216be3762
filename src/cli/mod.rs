pub mod apps;
pub mod config;
pub mod fetch;
pub mod login;
pub mod logout;

use appcenter_fetch::core::CredentialStore;
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

/// Token from flag or environment, else the one saved by `login`
/// (unless the keychain is switched off).
pub fn resolve_api_token(from_args: Option<String>, use_keychain: bool) -> Option<String> {
    from_args
        .filter(|t| !t.is_empty())
        .or_else(|| use_keychain.then(CredentialStore::stored_api_token).flatten())
}

/// Await `fut` behind a spinner on stderr (hidden when stderr is not a terminal)
pub async fn with_spinner<F: Future>(message: &str, fut: F) -> F::Output {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    let output = fut.await;

    pb.finish_and_clear();
    output
}
