//! Jobdeck - query-state engine and CLI for the scheduling dashboard.
//!
//! Main entry point for the jobdeck CLI.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use jobdeck_client::{JobService, SchedulerApiClient};
use jobdeck_config::{ConfigLoader, DashboardConfig};
use jobdeck_core::cache_key::derive_key;
use jobdeck_core::notify::NotificationHub;
use jobdeck_core::view::{ViewIntent, ViewStore};
use jobdeck_protocols::{FilterItem, NoopInvalidator, ParamMap, QueryState, ReservedParams};

mod cli;

use cli::{Cli, Commands, JobsAction, ViewArgs};

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => DashboardConfig::default(),
    };
    debug!(base_url = %config.api.base_url, "Loaded configuration");

    match cli.command {
        Commands::Inspect { query, entity_type } => {
            inspect(&config, &query, entity_type.as_deref())
        }
        Commands::Jobs { action } => handle_jobs_command(&config, action).await,
    }
}

fn reserved_params(config: &DashboardConfig) -> ReservedParams {
    ReservedParams::with_entity_key(config.query.entity_param.clone())
}

/// Parse a location query string and print what the dashboard would make
/// of it: the canonical state, its serialized form, and its cache tag.
fn inspect(
    config: &DashboardConfig,
    query: &str,
    entity_type: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let reserved = reserved_params(config);
    let default_entity = entity_type.unwrap_or(&config.query.default_entity_type);
    let params = ParamMap::from_query(query);
    let store = ViewStore::from_location(&params, reserved.clone(), default_entity);
    let state = store.state();

    println!("Entity type: {}", state.entity_type);
    println!("Page:        {}", state.page);
    println!("Limit:       {}", state.limit);
    if !state.search.is_empty() {
        println!("Search:      {}", state.search);
    }
    if !state.filters.is_empty() {
        println!("Filters:");
        for item in state.filters.iter() {
            let polarity = if item.include { "include" } else { "exclude" };
            println!("  {polarity} {} = {}", item.key, item.value);
        }
    }
    println!("Canonical query: {}", state.to_params(&reserved).to_query());
    println!("Cache tag:       {}", derive_key(state));
    Ok(())
}

async fn handle_jobs_command(
    config: &DashboardConfig,
    action: JobsAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let base_url = Url::parse(&config.api.base_url)?;
    let client = SchedulerApiClient::new(
        base_url,
        Duration::from_secs(config.api.timeout_seconds),
    )?;

    let hub = Arc::new(NotificationHub::new(16));
    let mut notifications = hub.subscribe()?;
    let printer = tokio::spawn(async move {
        while let Ok(notification) = notifications.recv().await {
            eprintln!("{}", notification.message);
        }
    });

    let service =
        JobService::new(Arc::new(client), Arc::new(NoopInvalidator)).with_hub(hub.clone());

    let result = run_jobs_action(config, &service, action).await;

    hub.close();
    let _ = printer.await;
    result
}

async fn run_jobs_action(
    config: &DashboardConfig,
    service: &JobService,
    action: JobsAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        JobsAction::List { view } => {
            let state = view_state(config, &view)?;
            let page = service.list(&state).await?;
            println!(
                "{:<8} {:<24} {:<12} {:<12} {:<16} {}",
                "ID", "NAME", "STATUS", "USER", "SCHEDULE", "NEXT RUN"
            );
            for job in &page.results {
                let next_run = job
                    .next_run_at
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<8} {:<24} {:<12} {:<12} {:<16} {}",
                    job.id, job.name, job.status, job.username, job.schedule, next_run
                );
            }
            println!("{} of {} job(s)", page.results.len(), page.count);
        }
        JobsAction::Delete { entity_type, ids } => {
            let entity_type =
                entity_type.unwrap_or_else(|| config.query.default_entity_type.clone());
            if ids.len() == 1 {
                service.delete(&entity_type, &ids[0]).await?;
            } else {
                service.delete_many(&entity_type, &ids).await?;
            }
        }
        JobsAction::Export { view } => {
            let state = view_state(config, &view)?;
            let bytes = service.export_csv(&state).await?;
            std::io::stdout().write_all(&bytes)?;
        }
    }
    Ok(())
}

/// Build a canonical view state from CLI flags, running every value through
/// the same transitions the dashboard store applies. Limits honor the
/// configured `query.max_limit` cap, which may be tighter than the protocol
/// bound.
fn view_state(
    config: &DashboardConfig,
    view: &ViewArgs,
) -> Result<QueryState, Box<dyn std::error::Error>> {
    let entity_type = view
        .entity_type
        .clone()
        .unwrap_or_else(|| config.query.default_entity_type.clone());
    let mut store = ViewStore::new(QueryState::new(entity_type), reserved_params(config));

    let limit = view
        .limit
        .unwrap_or(config.query.default_limit)
        .min(config.query.max_limit);
    store.dispatch(ViewIntent::SetLimit(limit))?;
    if !view.search.is_empty() {
        store.dispatch(ViewIntent::SetSearch(view.search.clone()))?;
    }
    for raw in &view.filters {
        let (key, value) = parse_pair(raw)?;
        store.dispatch(ViewIntent::AddFilter(FilterItem::include(key, value)))?;
    }
    for raw in &view.excludes {
        let (key, value) = parse_pair(raw)?;
        store.dispatch(ViewIntent::AddFilter(FilterItem::exclude(key, value)))?;
    }
    store.dispatch(ViewIntent::SetPage(view.page))?;

    Ok(store.state().clone())
}

fn parse_pair(raw: &str) -> Result<(&str, &str), Box<dyn std::error::Error>> {
    raw.split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use jobdeck_core::Debouncer;

    fn view_args(limit: Option<u32>) -> ViewArgs {
        ViewArgs {
            entity_type: None,
            page: 1,
            limit,
            search: String::new(),
            filters: Vec::new(),
            excludes: Vec::new(),
        }
    }

    #[test]
    fn test_view_state_honors_configured_max_limit() {
        let mut config = DashboardConfig::default();
        config.query.max_limit = 50;

        let state = view_state(&config, &view_args(Some(90))).unwrap();
        assert_eq!(state.limit, 50);
    }

    #[test]
    fn test_view_state_uses_configured_default_limit() {
        let mut config = DashboardConfig::default();
        config.query.default_limit = 25;

        let state = view_state(&config, &view_args(None)).unwrap();
        assert_eq!(state.limit, 25);
    }

    #[test]
    fn test_view_state_parses_filter_flags() {
        let config = DashboardConfig::default();
        let mut view = view_args(None);
        view.filters = vec!["status=ACTIVE".to_string()];
        view.excludes = vec!["username=bob".to_string()];

        let state = view_state(&config, &view).unwrap();
        assert_eq!(state.filters.len(), 2);
        let exclude = state.filters.get(1).unwrap();
        assert_eq!(exclude.key, "username");
        assert!(!exclude.include);
    }

    #[test]
    fn test_view_state_rejects_malformed_filter_flag() {
        let config = DashboardConfig::default();
        let mut view = view_args(None);
        view.filters = vec!["status".to_string()];

        assert!(view_state(&config, &view).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_configured_window_drives_debouncer() {
        let mut config = DashboardConfig::default();
        config.query.debounce_ms = 150;

        let debouncer = Debouncer::new(config.query.debounce_window());
        let pending = tokio::spawn({
            let debouncer = debouncer.clone();
            async move { debouncer.settle().await }
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(debouncer.settle().await);
        assert!(!pending.await.unwrap());
    }
}
