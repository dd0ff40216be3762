use super::{resolve_api_token, with_spinner};
use appcenter_fetch::core::{validate_api_token, AppCenterResult, FetchRequest};
use appcenter_fetch::di::ServiceContainer;
use appcenter_fetch::fetch::{select_app, DialoguerInput, FetchResult};
use clap::Args;

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// API Token for App Center Access
    #[arg(long, env = "APPCENTER_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Name of the owner of the application on App Center
    #[arg(long, env = "APPCENTER_OWNER_NAME")]
    pub owner_name: Option<String>,

    /// Owner type, either 'user' or 'organization'
    #[arg(long, env = "APPCENTER_OWNER_TYPE")]
    pub owner_type: Option<String>,

    /// Name of the application on App Center
    #[arg(long, env = "APPCENTER_APP_NAME")]
    pub app_name: Option<String>,

    /// The version to get the latest release for (accepted, not used to narrow the lookup)
    #[arg(long = "version", env = "APPCENTER_APP_VERSION")]
    pub app_version: Option<String>,

    /// Choose the app from the apps visible to the token
    #[arg(short, long)]
    pub interactive: bool,

    /// Narrow the interactive app list (fuzzy match)
    #[arg(short, long, requires = "interactive")]
    pub filter: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(
    args: FetchArgs,
    use_keychain: bool,
    container: &ServiceContainer,
) -> AppCenterResult<()> {
    let api_token = resolve_api_token(args.api_token, use_keychain);
    let mut owner_name = args
        .owner_name
        .or_else(|| container.config.default_owner_name().map(str::to_string));
    let mut owner_type = args
        .owner_type
        .or_else(|| Some(container.config.default_owner_type().to_string()));
    let mut app_name = args.app_name;

    if args.interactive {
        let token = validate_api_token(api_token.clone())?;
        let apps = with_spinner("Listing apps...", container.appcenter.list_apps(&token)).await;
        let app = select_app(apps, args.filter.as_deref(), &DialoguerInput)?;
        owner_name = Some(app.owner.name);
        owner_type = Some(app.owner.owner_type.to_string());
        app_name = Some(app.name);
    }

    let request = FetchRequest::builder()
        .api_token(api_token)
        .owner_name(owner_name)
        .owner_type(owner_type)
        .app_name(app_name)
        .version(args.app_version)
        .build()?;
    tracing::debug!("Fetching with {:?}", request);

    let fetcher = container.version_fetcher();
    let result = with_spinner("Fetching release...", fetcher.fetch(&request)).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }

    Ok(())
}

fn print_result(result: &FetchResult) {
    println!("id: {}", result.id);
    println!("version: {}", result.version);
    println!("build_number: {}", result.build_number);
    println!(
        "release_notes: {}",
        result.release_notes.as_deref().unwrap_or_default()
    );
    println!("release_url: {}", result.release_url);
}
