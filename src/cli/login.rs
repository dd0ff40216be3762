use appcenter_fetch::core::credentials::API_TOKEN_KEY;
use appcenter_fetch::core::{AppCenterError, AppCenterResult, CredentialStore};
use dialoguer::Password;

pub async fn run(token: Option<String>) -> AppCenterResult<()> {
    let token = match token {
        Some(token) => token,
        None => {
            println!("App Center Login");
            println!("Create a token under Account settings > User API tokens.");
            println!();

            Password::new()
                .with_prompt("API Token")
                .interact()
                .map_err(|e| AppCenterError::Prompt(format!("Failed to read input: {}", e)))?
        }
    };
    let token = token.trim().to_string();

    if token.is_empty() {
        return Err(AppCenterError::Validation(
            "API token cannot be empty".to_string(),
        ));
    }

    CredentialStore::store(API_TOKEN_KEY, &token)?;

    println!();
    println!("✓ API token stored securely");

    Ok(())
}
