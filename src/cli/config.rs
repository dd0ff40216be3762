use appcenter_fetch::config::Config;
use appcenter_fetch::core::path::config_file;
use appcenter_fetch::core::{AppCenterError, AppCenterResult, OwnerType};
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration and where it is stored
    Show,
    /// Set the App Center API base URL
    SetApiUrl {
        /// Base URL, e.g. https://api.appcenter.ms
        url: String,
    },
    /// Set the App Center dashboard base URL used for release links
    SetWebUrl {
        /// Base URL, e.g. https://appcenter.ms
        url: String,
    },
    /// Set the default owner used when --owner-name is not given
    SetOwner {
        /// Owner name (omit to clear)
        name: Option<String>,
        /// Owner type, either 'user' or 'organization'
        #[arg(long)]
        owner_type: Option<String>,
    },
}

pub fn run(cmd: ConfigCommands) -> AppCenterResult<()> {
    match cmd {
        ConfigCommands::Show => show(),
        ConfigCommands::SetApiUrl { url } => update(|config| {
            config.api_url = validate_url(url)?;
            Ok(())
        }),
        ConfigCommands::SetWebUrl { url } => update(|config| {
            config.web_url = validate_url(url)?;
            Ok(())
        }),
        ConfigCommands::SetOwner { name, owner_type } => update(|config| {
            config.default_owner_name = name.filter(|n| !n.is_empty());
            if let Some(owner_type) = owner_type {
                config.default_owner_type = owner_type.parse::<OwnerType>()?;
            }
            Ok(())
        }),
    }
}

fn show() -> AppCenterResult<()> {
    let config = Config::load()?;
    println!("# {}", config_file()?.display());
    print!("{}", serde_yaml::to_string(&config)?);
    Ok(())
}

fn update<F>(apply: F) -> AppCenterResult<()>
where
    F: FnOnce(&mut Config) -> AppCenterResult<()>,
{
    let mut config = Config::load()?;
    apply(&mut config)?;
    config.save()?;

    println!("✓ Configuration saved to {}", config_file()?.display());
    Ok(())
}

fn validate_url(url: String) -> AppCenterResult<String> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.trim_end_matches('/').to_string())
    } else {
        Err(AppCenterError::Config(format!(
            "Invalid URL '{}': expected an http:// or https:// address",
            url
        )))
    }
}
