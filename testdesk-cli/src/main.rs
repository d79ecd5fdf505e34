use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use std::env;
use std::path::Path;

use testdesk_core::{demo_store, export_json, export_yaml, EntityStore, Session};

mod cli;
mod shell;

use cli::{Cli, Command};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut session = Session::new(demo_store());
    if let Some(selector) = cli.user.clone().or_else(|| env::var("TESTDESK_USER").ok()) {
        select_user(&mut session, &selector);
    }

    match &cli.command {
        Some(Command::Export { format, output }) => export_dataset(session.store(), format, output),
        Some(Command::Shell) | None => shell::run(session),
    }
}

/// Picks the starting user by id or exact name. An unknown selector keeps
/// the seeded default rather than failing the whole run.
fn select_user(session: &mut Session, selector: &str) {
    let matched = session
        .store()
        .users()
        .iter()
        .find(|u| u.id == selector || u.name == selector)
        .map(|u| u.id.clone());
    match matched {
        Some(id) => {
            session.set_current_user(&id);
            session.dismiss_modal();
            log::info!("acting as {}", id);
        }
        None => log::warn!("no user matches {:?}, staying with the default", selector),
    }
}

fn export_dataset(store: &EntityStore, format: &str, output: &Path) -> Result<()> {
    match format {
        "json" => export_json(store, output)?,
        "yaml" | "yml" => export_yaml(store, output)?,
        other => bail!("Invalid format: {}. Valid formats: json, yaml", other),
    }

    println!("{} {}", "Exported dataset to".green(), output.display());
    println!("  {:<14} {}", "projects", store.projects().len());
    println!("  {:<14} {}", "requirements", store.requirements().len());
    println!("  {:<14} {}", "test cases", store.test_cases().len());
    println!("  {:<14} {}", "test suites", store.test_suites().len());
    println!("  {:<14} {}", "test plans", store.test_plans().len());
    println!("  {:<14} {}", "reports", store.reports().len());
    println!("  {:<14} {}", "users", store.users().len());
    Ok(())
}
