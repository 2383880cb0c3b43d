use std::io::{BufRead as _, Write as _};

use anyhow::Context as _;
use appraisal_client_core::{
    routing::{NavigationOutcome, RouteTable, Router},
    Client, FileStorage, MemoryStorage, SessionStore, StorageScope,
};
use appraisal_shared::{
    page::Page,
    req_args::{
        api::{MyEvaluationRequestsFilter, PageArgs},
        LoginReqArgs,
    },
    session::Session,
};
use serde_json::Value;
use tracing::{info, instrument};

use crate::{cli::Command, Configuration};

/// The durable scope survives between runs, the ephemeral one only lasts for
/// this process
fn session_store(configuration: &Configuration) -> SessionStore {
    SessionStore::new(
        FileStorage::new(&configuration.storage.directory),
        MemoryStorage::default(),
    )
}

#[instrument(skip(configuration))]
pub async fn run(command: Command, configuration: &Configuration) -> anyhow::Result<()> {
    let session_store = session_store(configuration);
    let router = Router::new(RouteTable::default(), session_store.clone(), "/");
    let client = Client::new(
        configuration.api.base_url.clone(),
        session_store,
        router.clone(),
    );
    info!("running command");

    match command {
        Command::Login { login, remember } => {
            let password = read_password().await?;
            let scope = if remember {
                StorageScope::Durable
            } else {
                StorageScope::Ephemeral
            };
            let session = client
                .login(LoginReqArgs::new(login, password.into()), scope, || {})
                .await
                .context("login response never arrived")??;
            println!("{}", describe_session(&session));
            if !remember {
                println!("Session is not remembered, use --remember to keep it");
            }
        }
        Command::Logout => {
            client.logout();
            println!("Signed out");
        }
        Command::Whoami => println!("{}", describe_session(&client.session())),
        Command::Navigate { path } => {
            let outcome = router.push(&path)?;
            println!("{}", describe_outcome(&outcome));
        }
        Command::MyRequests { page, size } => {
            let filter = MyEvaluationRequestsFilter {
                paging: PageArgs { page, size },
                ..Default::default()
            };
            let result = client
                .my_evaluation_requests(&filter, || {})
                .await
                .context("response never arrived")?;
            match result {
                Ok(requests) => print!("{}", describe_page(&requests, page)),
                Err(e) => {
                    // Session invalidation moves the router, show where the user ended up
                    println!("{}", router.location());
                    return Err(e);
                }
            }
        }
    }
    Ok(())
}

async fn read_password() -> anyhow::Result<String> {
    tokio::task::spawn_blocking(|| -> anyhow::Result<String> {
        eprint!("Password: ");
        std::io::stderr().flush()?;
        let mut password = String::new();
        std::io::stdin().lock().read_line(&mut password)?;
        Ok(password.trim_end_matches(['\r', '\n']).to_string())
    })
    .await
    .context("password prompt panicked")?
}

fn describe_session(session: &Session) -> String {
    let Some(role) = session.role.filter(|_| session.is_authenticated()) else {
        return "Not signed in".to_string();
    };
    let name = session.full_name.as_deref().unwrap_or("(no name)");
    format!(
        "{name} [{role}] edit requests: {}, delete requests: {}",
        yes_no(session.can_edit_evaluation_requests),
        yes_no(session.can_delete_evaluation_requests),
    )
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn describe_outcome(outcome: &NavigationOutcome) -> String {
    match outcome {
        NavigationOutcome::Arrived {
            location,
            route,
            redirected_from: None,
        } => format!("{location} ({route})"),
        NavigationOutcome::Arrived {
            location,
            route,
            redirected_from: Some(requested),
        } => format!("{location} ({route}), redirected from {requested}"),
        NavigationOutcome::AlreadyThere { location } => format!("{location} (unchanged)"),
        NavigationOutcome::NotFound { location } => format!("{location} (not found)"),
    }
}

fn describe_page(page: &Page<Value>, page_number: u32) -> String {
    let mut result = String::new();
    for item in &page.content {
        result.push_str(&item.to_string());
        result.push('\n');
    }
    result.push_str(&format!(
        "page {} of {} ({} total)\n",
        page_number + 1,
        page.total_pages,
        page.total_elements
    ));
    result
}
