use super::{resolve_api_token, with_spinner};
use appcenter_fetch::core::{validate_api_token, AppCenterResult};
use appcenter_fetch::di::ServiceContainer;
use appcenter_fetch::fetch::rank_apps;

pub async fn run(
    api_token: Option<String>,
    filter: Option<String>,
    json: bool,
    use_keychain: bool,
    container: &ServiceContainer,
) -> AppCenterResult<()> {
    let token = validate_api_token(resolve_api_token(api_token, use_keychain))?;

    let apps = with_spinner("Listing apps...", container.appcenter.list_apps(&token)).await;
    let apps = rank_apps(apps, filter.as_deref());

    if json {
        println!("{}", serde_json::to_string_pretty(&apps)?);
        return Ok(());
    }

    if apps.is_empty() {
        eprintln!("No apps found");
        return Ok(());
    }

    for app in &apps {
        println!("{}", app.label());
    }

    Ok(())
}
