//! Dashboard links for releases

use crate::core::OwnerType;

/// Default App Center dashboard host
pub const DEFAULT_WEB_URL: &str = "https://appcenter.ms";

/// Build the dashboard URL of a release.
///
/// Users live under `/users/<owner>`, organizations under `/orgs/<owner>`.
pub fn release_url(
    web_url: &str,
    owner_type: OwnerType,
    owner_name: &str,
    app_name: &str,
    release_id: u64,
) -> String {
    let owner_path = match owner_type {
        OwnerType::User => "users",
        OwnerType::Organization => "orgs",
    };
    format!(
        "{}/{}/{}/apps/{}/distribute/releases/{}",
        web_url.trim_end_matches('/'),
        owner_path,
        owner_name,
        app_name,
        release_id
    )
}
