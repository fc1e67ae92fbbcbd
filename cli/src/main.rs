//! `menu-cli`: command-line client for the menu management backend.
//!
//! Every subcommand maps to one REST operation in the `api` crate and prints
//! the JSON response on stdout. Notices (session expiry, server errors) go to
//! stderr. The session token lives in a JSON file between invocations.

mod notify;
mod session_file;
mod transport;

use std::path::PathBuf;
use std::sync::Arc;

use api::types::{MaterialInput, MenuInput, MenuMaterialInput, NewUser, RecipeStep, UserUpdate};
use api::{ApiClient, ApiConfig, ApiError, ConfigError, Hooks, ListQuery, LoginRequest, Role};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::notify::{LoginHint, StderrNotifier};
use crate::session_file::{DEFAULT_SESSION_FILE, FileSessionStore};
use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("login failed: {0}")]
    Login(String),
    #[error("not signed in; run `menu-cli login` first")]
    NotSignedIn,
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "menu-cli", about = "Menu management API CLI")]
struct Cli {
    #[arg(long, env = "MENU_API_URL")]
    base_url: Option<String>,

    #[arg(long, env = "MENU_API_TIMEOUT_SECS")]
    timeout_secs: Option<String>,

    /// Serve built-in demo data instead of calling the backend.
    #[arg(long, env = "MENU_USE_MOCK_DATA")]
    mock: Option<String>,

    #[arg(long, env = "MENU_SESSION_FILE", default_value = DEFAULT_SESSION_FILE)]
    session_file: PathBuf,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the session.
    Login { username: String, password: String },
    /// Drop the stored session.
    Logout,
    /// Show the signed-in user (refreshed from the server).
    Whoami,
    Users(UsersCommand),
    /// Change the signed-in user's password.
    Password {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
    },
    Materials(MaterialsCommand),
    Menus(MenusCommand),
}

#[derive(Args, Debug)]
struct UsersCommand {
    #[command(subcommand)]
    command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
enum UsersSubcommand {
    List,
    Create {
        username: String,
        password: String,
        #[arg(long, default_value = "store_user")]
        role: String,
    },
    Update {
        user_id: i64,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete {
        user_id: i64,
    },
}

#[derive(Args, Debug)]
struct MaterialsCommand {
    #[command(subcommand)]
    command: MaterialsSubcommand,
}

#[derive(Subcommand, Debug)]
enum MaterialsSubcommand {
    List(QueryArgs),
    Get {
        material_id: i64,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        material_id: i64,
        #[arg(long)]
        data: String,
    },
    Delete {
        material_id: i64,
    },
}

#[derive(Args, Debug)]
struct MenusCommand {
    #[command(subcommand)]
    command: MenusSubcommand,
}

#[derive(Subcommand, Debug)]
enum MenusSubcommand {
    List(QueryArgs),
    Get {
        menu_id: i64,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        menu_id: i64,
        #[arg(long)]
        data: String,
    },
    Delete {
        menu_id: i64,
    },
    /// Attach a material to a menu.
    AddMaterial {
        menu_id: i64,
        material_id: i64,
        quantity: f64,
    },
    RemoveMaterial {
        menu_id: i64,
        material_id: i64,
    },
    /// Append a recipe step to a menu.
    AddStep {
        menu_id: i64,
        step_number: u32,
        description: String,
    },
}

#[derive(Args, Debug)]
struct QueryArgs {
    #[arg(long)]
    limit: Option<u32>,
    /// Extra `key=value` query pairs, forwarded verbatim.
    #[arg(long = "param", value_parser = parse_pair)]
    params: Vec<(String, String)>,
}

impl QueryArgs {
    fn to_query(&self) -> ListQuery {
        let mut query = ListQuery::new();
        if let Some(limit) = self.limit {
            query = query.with("limit", limit);
        }
        for (key, value) in &self.params {
            query = query.with(key.clone(), value);
        }
        query
    }
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN })
        .init();

    let config = ApiConfig::from_values(cli.base_url.as_deref(), cli.timeout_secs.as_deref(), cli.mock.as_deref())?;
    let client = build_client(&config, FileSessionStore::new(&cli.session_file))?;
    run(&client, cli.command).await
}

fn build_client(config: &ApiConfig, session: FileSessionStore) -> Result<ApiClient, CliError> {
    let hooks = Hooks {
        session: Arc::new(session),
        notifier: Arc::new(StderrNotifier),
        navigator: Arc::new(LoginHint),
    };
    if config.use_mock_data {
        tracing::info!("serving built-in demo data");
        return Ok(ApiClient::new(config, api::demo::DemoTransport, hooks));
    }
    Ok(ApiClient::new(config, ReqwestTransport::new()?, hooks))
}

async fn run(client: &ApiClient, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { username, password } => {
            let user = api::session::sign_in(client, &LoginRequest { username, password })
                .await
                .map_err(CliError::Login)?;
            print_json(&user)
        }
        Command::Logout => {
            api::session::sign_out(client);
            Ok(())
        }
        Command::Whoami => {
            if api::session::restore(client).is_none() {
                return Err(CliError::NotSignedIn);
            }
            print_json(&api::session::refresh(client).await?)
        }
        Command::Users(users) => run_users(client, users.command).await,
        Command::Password { current, new } => {
            print_json(&api::auth::change_password(client, &current, &new).await?)
        }
        Command::Materials(materials) => run_materials(client, materials.command).await,
        Command::Menus(menus) => run_menus(client, menus.command).await,
    }
}

async fn run_users(client: &ApiClient, command: UsersSubcommand) -> Result<(), CliError> {
    match command {
        UsersSubcommand::List => print_json(&api::auth::list_users(client).await?),
        UsersSubcommand::Create { username, password, role } => {
            let user = NewUser { username, password, role: Role::from(role) };
            print_json(&api::auth::create_user(client, &user).await?)
        }
        UsersSubcommand::Update { user_id, username, role, active } => {
            let update = UserUpdate { username, role: role.map(Role::from), is_active: active, ..UserUpdate::default() };
            print_json(&api::auth::update_user(client, user_id, &update).await?)
        }
        UsersSubcommand::Delete { user_id } => Ok(api::auth::delete_user(client, user_id).await?),
    }
}

async fn run_materials(client: &ApiClient, command: MaterialsSubcommand) -> Result<(), CliError> {
    match command {
        MaterialsSubcommand::List(query) => {
            print_json(&api::materials::list_materials(client, &query.to_query()).await?)
        }
        MaterialsSubcommand::Get { material_id } => print_json(&api::materials::get_material(client, material_id).await?),
        MaterialsSubcommand::Create { data } => {
            let input: MaterialInput = parse_payload(&data)?;
            print_json(&api::materials::create_material(client, &input).await?)
        }
        MaterialsSubcommand::Update { material_id, data } => {
            let input: MaterialInput = parse_payload(&data)?;
            print_json(&api::materials::update_material(client, material_id, &input).await?)
        }
        MaterialsSubcommand::Delete { material_id } => Ok(api::materials::delete_material(client, material_id).await?),
    }
}

async fn run_menus(client: &ApiClient, command: MenusSubcommand) -> Result<(), CliError> {
    match command {
        MenusSubcommand::List(query) => print_json(&api::menus::list_menus(client, &query.to_query()).await?),
        MenusSubcommand::Get { menu_id } => print_json(&api::menus::get_menu(client, menu_id).await?),
        MenusSubcommand::Create { data } => {
            let input: MenuInput = parse_payload(&data)?;
            print_json(&api::menus::create_menu(client, &input).await?)
        }
        MenusSubcommand::Update { menu_id, data } => {
            let input: MenuInput = parse_payload(&data)?;
            print_json(&api::menus::update_menu(client, menu_id, &input).await?)
        }
        MenusSubcommand::Delete { menu_id } => Ok(api::menus::delete_menu(client, menu_id).await?),
        MenusSubcommand::AddMaterial { menu_id, material_id, quantity } => {
            let input = MenuMaterialInput { material_id, quantity };
            Ok(api::menus::add_menu_material(client, menu_id, &input).await?)
        }
        MenusSubcommand::RemoveMaterial { menu_id, material_id } => {
            Ok(api::menus::remove_menu_material(client, menu_id, material_id).await?)
        }
        MenusSubcommand::AddStep { menu_id, step_number, description } => {
            let step = RecipeStep { step_number, description };
            Ok(api::menus::add_recipe_step(client, menu_id, &step).await?)
        }
    }
}

fn parse_payload<T: DeserializeOwned>(raw: &str) -> Result<T, CliError> {
    Ok(serde_json::from_str(raw)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
