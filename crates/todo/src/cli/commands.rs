//! # CLI Layer
//!
//! The only place that knows about stdout, stderr, logging setup and the
//! async runtime. Everything it calls returns plain values or errors.
//!
//! 1. **Parse** arguments with clap ([`super::setup`]).
//! 2. **Configure**: init `env_logger`, load [`TodoConfig`], apply flags.
//! 3. **Dispatch**: `serve` runs the server; every other command makes one
//!    request through [`TodoClient`].
//! 4. **Render** the result ([`super::render`]).

use super::render;
use super::setup::{Cli, Commands, ServeArgs};
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::sync::Arc;
use todoapp::api::TodoApi;
use todoapp::client::TodoClient;
use todoapp::config::{default_config_path, TodoConfig};
use todoapp::model::{NewTodo, TodoPatch};
use todoapp::{server, store};
use tokio::net::TcpListener;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = load_config(&cli)?;
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    match cli.command {
        Commands::Serve(args) => runtime.block_on(handle_serve(config, args)),
        command => {
            let url = cli.url.unwrap_or_else(|| config.server_url());
            log::debug!("Using server at {}", url);
            let client = TodoClient::new(url);
            runtime.block_on(handle_client(&client, command))
        }
    }
}

fn init_logging(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if matches!(cli.command, Commands::Serve(_)) {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn load_config(cli: &Cli) -> Result<TodoConfig> {
    let path = cli.config.clone().or_else(default_config_path);
    if let Some(path) = &path {
        log::debug!("Loading config from {}", path.display());
    }
    let config = TodoConfig::load(path.as_deref()).context("Failed to load configuration")?;
    Ok(config)
}

/// Flags win over environment and file settings.
fn apply_serve_args(config: &mut TodoConfig, args: ServeArgs) {
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(backend) = args.backend {
        config.backend = backend.into();
    }
    if let Some(data_file) = args.data_file {
        config.data_file = data_file;
    }
    if let Some(storage_file) = args.storage_file {
        config.storage_file = storage_file;
    }
    if args.seed_url.is_some() {
        config.seed_url = args.seed_url;
    }
}

async fn handle_serve(mut config: TodoConfig, args: ServeArgs) -> Result<()> {
    apply_serve_args(&mut config, args);

    let listener = TcpListener::bind((config.bind.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.bind, config.port))?;

    log::info!("Using {} backend", config.backend);
    let api = Arc::new(TodoApi::new(store::open(&config)));
    server::serve(listener, api).await?;
    Ok(())
}

async fn handle_client(client: &TodoClient, command: Commands) -> Result<()> {
    match command {
        Commands::Serve(_) => bail!("serve is not a client command"),
        Commands::List { json } => {
            let todos = client.list().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&todos)?);
            } else {
                render::print_todos(&todos);
            }
        }
        Commands::Add {
            title,
            done,
            user_id,
        } => {
            let mut draft = NewTodo::new(title.join(" "));
            if done {
                draft = draft.completed(true);
            }
            if let Some(user_id) = user_id {
                draft = draft.user_id(user_id);
            }
            let todo = client.create(&draft).await?;
            render::print_success(&format!("Added #{}", todo.id));
            render::print_todo(&todo);
        }
        Commands::Show { id } => {
            let todo = client.get(&id).await?;
            render::print_todo(&todo);
        }
        Commands::Done { id } => {
            let todo = client
                .update(&id, &TodoPatch::default().completed(true))
                .await?;
            render::print_todo(&todo);
        }
        Commands::Undone { id } => {
            let todo = client
                .update(&id, &TodoPatch::default().completed(false))
                .await?;
            render::print_todo(&todo);
        }
        Commands::Edit { id, title, user_id } => {
            let mut patch = TodoPatch::default();
            if let Some(title) = title {
                patch = patch.title(title);
            }
            if let Some(user_id) = user_id {
                patch = patch.user_id(user_id);
            }
            if patch.is_empty() {
                bail!("Nothing to change: pass --title and/or --user-id");
            }
            let todo = client.update(&id, &patch).await?;
            render::print_success(&format!("Updated #{}", todo.id));
            render::print_todo(&todo);
        }
        Commands::Rm { id } => {
            client.delete(&id).await?;
            render::print_info(&format!("Deleted #{}", id));
        }
    }
    Ok(())
}
