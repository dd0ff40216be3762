//! Picking an app from the apps visible to a token

use crate::appcenter::types::App;
use crate::core::{AppCenterError, AppCenterResult};
use dialoguer::Select;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

// Trait for user input (for dependency injection in tests)
pub trait UserInput {
    fn prompt_select(&self, prompt: &str, items: &[String], default: usize) -> AppCenterResult<usize>;
}

// Real implementation using dialoguer
pub struct DialoguerInput;

impl UserInput for DialoguerInput {
    fn prompt_select(&self, prompt: &str, items: &[String], default: usize) -> AppCenterResult<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(|e| AppCenterError::Prompt(format!("Failed to read input: {}", e)))
    }
}

/// Order apps by fuzzy score against `query`, dropping non-matches.
///
/// Without a query the service order is kept.
pub fn rank_apps(apps: Vec<App>, query: Option<&str>) -> Vec<App> {
    let query = match query {
        Some(q) if !q.trim().is_empty() => q.trim(),
        _ => return apps,
    };

    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(i64, App)> = apps
        .into_iter()
        .filter_map(|app| {
            matcher
                .fuzzy_match(&app.label(), query)
                .map(|score| (score, app))
        })
        .collect();

    // Sort by score (higher is better); stable so ties keep service order
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, app)| app).collect()
}

/// Let the user choose one app, narrowed by an optional query.
///
/// A single candidate is taken without prompting.
pub fn select_app(apps: Vec<App>, query: Option<&str>, input: &dyn UserInput) -> AppCenterResult<App> {
    let mut candidates = rank_apps(apps, query);

    match candidates.len() {
        0 => Err(AppCenterError::NoAppsFound),
        1 => {
            let app = candidates.remove(0);
            tracing::info!("Using the only matching app: {}", app.label());
            Ok(app)
        }
        _ => {
            let labels: Vec<String> = candidates.iter().map(App::label).collect();
            let index = input.prompt_select("Select an app", &labels, 0)?;
            if index >= candidates.len() {
                return Err(AppCenterError::Prompt(format!(
                    "Selection {} is out of range",
                    index
                )));
            }
            Ok(candidates.swap_remove(index))
        }
    }
}
