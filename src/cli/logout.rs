use appcenter_fetch::core::credentials::API_TOKEN_KEY;
use appcenter_fetch::core::{AppCenterResult, CredentialStore};

pub fn run() -> AppCenterResult<()> {
    if !CredentialStore::exists(API_TOKEN_KEY) {
        println!("No stored API token");
        return Ok(());
    }

    CredentialStore::delete(API_TOKEN_KEY)?;
    println!("✓ API token removed");

    Ok(())
}
