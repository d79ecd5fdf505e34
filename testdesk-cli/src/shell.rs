//! Interactive dashboard shell.
//!
//! One iteration of the main loop renders pending feedback, draws the
//! current screen's data and offers its actions as a menu. All state changes
//! go through the session; the shell never touches collections directly.

use anyhow::Result;
use chrono::NaiveDate;
use colored::{ColoredString, Colorize};
use inquire::{Confirm, Editor, Select, Text};
use std::thread;

use testdesk_core::{
    CaseStatus, ModalKind, NewProject, NewRequirement, NewTestCase, NewTestPlan, NewTestSuite,
    NewUser, Project, ProjectStatus, ProjectTab, ReportStatus, Requirement, Role, Screen, Session,
    SystemUser, TestCase, TestPlan, TestReport, TestSuite,
};

const NAVIGATE: &str = "Go to another screen";
const GO_BACK: &str = "Go back";
const HELP: &str = "Help";
const RUN_TESTS: &str = "Run tests";
const LOG_OUT: &str = "Log out";
const QUIT: &str = "Quit";

pub fn run(mut session: Session) -> Result<()> {
    println!("{}", "testdesk".cyan().bold());
    println!("Test management dashboard. Data resets when the process exits.");

    loop {
        render_feedback(&mut session)?;
        let screen = session.screen();
        log::debug!("rendering {:?} at depth {}", screen, session.history_depth());

        let quit = match screen {
            Screen::Dashboard => dashboard_screen(&mut session)?,
            Screen::Projects => projects_screen(&mut session)?,
            Screen::ArchivedProjects => archived_screen(&mut session)?,
            Screen::Requirements => requirements_screen(&mut session)?,
            Screen::Reports => reports_screen(&mut session)?,
            Screen::Testing => testing_screen(&mut session)?,
            Screen::Profile => profile_screen(&mut session)?,
            Screen::Settings => settings_screen(&mut session)?,
        };
        if quit {
            break;
        }
    }

    println!("Bye.");
    Ok(())
}

// ---- feedback ----

fn render_feedback(session: &mut Session) -> Result<()> {
    if let Some(text) = session.notification() {
        println!("{} {}", "*".cyan().bold(), text.cyan());
    }

    let modal = session.modal().cloned();
    if let Some(modal) = modal {
        match modal.kind {
            ModalKind::Success => println!("{} {}", "OK".green().bold(), modal.message.green()),
            ModalKind::Error => println!("{} {}", "ERROR".red().bold(), modal.message.red()),
        }
        let dismiss = Confirm::new("Dismiss this message?")
            .with_default(true)
            .prompt_skippable()?
            .unwrap_or(true);
        if dismiss {
            session.dismiss_modal();
        }
    }
    Ok(())
}

// ---- shared actions ----

fn shared_actions() -> Vec<String> {
    vec![
        NAVIGATE.to_string(),
        GO_BACK.to_string(),
        HELP.to_string(),
        RUN_TESTS.to_string(),
        LOG_OUT.to_string(),
        QUIT.to_string(),
    ]
}

/// Handles the actions every screen offers. Returns `Some(quit)` when the
/// choice was one of them, `None` when the caller should handle it.
fn handle_shared(session: &mut Session, choice: &str) -> Result<Option<bool>> {
    match choice {
        NAVIGATE => {
            navigate_menu(session)?;
            Ok(Some(false))
        }
        GO_BACK => {
            session.go_back();
            Ok(Some(false))
        }
        HELP => {
            session.open_help();
            Ok(Some(false))
        }
        RUN_TESTS => {
            session.notify("Running tests...");
            session.run_tests();
            Ok(Some(false))
        }
        LOG_OUT => {
            let delay = session.logout();
            if let Some(modal) = session.modal() {
                println!("{} {}", "OK".green().bold(), modal.message.green());
            }
            thread::sleep(delay);
            Ok(Some(true))
        }
        QUIT => Ok(Some(true)),
        _ => Ok(None),
    }
}

fn navigate_menu(session: &mut Session) -> Result<()> {
    let (current, settings_visible) = {
        let view = session.view();
        (view.screen, view.settings_visible)
    };

    let mut screens: Vec<Screen> = Screen::all().into_iter().filter(|s| *s != current).collect();
    if !settings_visible {
        screens.retain(|s| *s != Screen::Settings);
    }

    let labels: Vec<String> = screens.iter().map(|s| s.label().to_string()).collect();
    let selection = Select::new("Where to?", labels).prompt_skippable()?;
    if let Some(selection) = selection {
        if let Some(screen) = screens.iter().find(|s| s.label() == selection) {
            session.navigate_to(*screen);
        }
    }
    Ok(())
}

// ---- screens ----

fn dashboard_screen(session: &mut Session) -> Result<bool> {
    {
        let store = session.store();
        println!("\n{}", "Dashboard".bold().underline());
        println!("  {:<14} {}", "Projects", store.visible_projects().len());
        println!("  {:<14} {}", "Requirements", store.requirements().len());
        println!("  {:<14} {}", "Test cases", store.test_cases().len());
        println!("  {:<14} {}", "Test suites", store.test_suites().len());
        println!("  {:<14} {}", "Test plans", store.test_plans().len());
        println!("  {:<14} {}", "Reports", store.reports().len());
        if let Some(user) = session.current_user() {
            println!("  {:<14} {} ({})", "Signed in as", user.name, user.role);
        }
    }

    let choice = Select::new("Action:", shared_actions()).prompt()?;
    Ok(handle_shared(session, &choice)?.unwrap_or(false))
}

fn projects_screen(session: &mut Session) -> Result<bool> {
    if session.focused_project().is_some() {
        return project_detail_screen(session);
    }

    let options: Vec<String> = {
        let projects = session.store().visible_projects();
        println!("\n{}", "Projects".bold().underline());
        print_projects(&projects);
        projects
            .iter()
            .map(|p| format!("{}  {}", p.id, truncate(&p.name, 40)))
            .collect()
    };

    let mut actions = vec!["Open a project".to_string(), "Create a project".to_string()];
    actions.extend(shared_actions());
    let choice = Select::new("Action:", actions).prompt()?;

    match choice.as_str() {
        "Open a project" => {
            if let Some(id) = pick_id("Open which project?", options)? {
                session.open_project(&id);
            }
        }
        "Create a project" => prompt_create_project(session)?,
        other => return Ok(handle_shared(session, other)?.unwrap_or(false)),
    }
    Ok(false)
}

fn project_detail_screen(session: &mut Session) -> Result<bool> {
    let (project_id, tab) = {
        let project = match session.focused_project() {
            Some(project) => project,
            None => return Ok(false),
        };
        println!("\n{}", project.name.bold().underline());
        println!("  {:<14} {}", "Id", project.id);
        println!("  {:<14} {}", "Status", color_project_status(&project.status));
        println!("  {:<14} {}", "Responsible", project.responsible);
        println!(
            "  {:<14} {}",
            "Due",
            project
                .completion_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string())
        );
        (project.id.clone(), session.project_tab())
    };

    println!("\n{}", tab.label().bold());
    match tab {
        ProjectTab::Cases => print_cases(&session.focused_cases()),
        ProjectTab::Suites => print_suites(&session.focused_suites()),
        ProjectTab::Plans => print_plans(&session.focused_plans()),
    }

    let mut actions: Vec<String> = Vec::new();
    match tab {
        ProjectTab::Cases => {
            actions.push("Create a test case".to_string());
            actions.push("Inspect a test case".to_string());
            actions.push("Attach requirements to a case".to_string());
            actions.push("Delete a test case".to_string());
        }
        ProjectTab::Suites => {
            actions.push("Create a test suite".to_string());
            actions.push("Edit a test suite".to_string());
            actions.push("Delete a test suite".to_string());
        }
        ProjectTab::Plans => {
            actions.push("Create a test plan".to_string());
            actions.push("Delete a test plan".to_string());
        }
    }
    for other in ProjectTab::all() {
        if other != tab {
            actions.push(format!("Show {}", other.label().to_lowercase()));
        }
    }
    actions.push("Edit the project".to_string());
    if !project_is_archived(session, &project_id) {
        actions.push("Archive the project".to_string());
    }
    actions.push("Delete the project".to_string());
    actions.push("Back to the project list".to_string());
    actions.extend(shared_actions());

    let choice = Select::new("Action:", actions).prompt()?;
    match choice.as_str() {
        "Show test cases" => session.set_project_tab(ProjectTab::Cases),
        "Show test suites" => session.set_project_tab(ProjectTab::Suites),
        "Show test plans" => session.set_project_tab(ProjectTab::Plans),
        "Create a test case" => prompt_create_case(session, &project_id)?,
        "Inspect a test case" => inspect_case(session)?,
        "Attach requirements to a case" => prompt_attach_requirements(session)?,
        "Delete a test case" => {
            if let Some(id) = pick_case(session, "Delete which test case?")? {
                if confirm_delete("Delete this test case?")? {
                    session.delete_test_case(&id);
                }
            }
        }
        "Create a test suite" => prompt_create_suite(session, &project_id)?,
        "Edit a test suite" => prompt_edit_suite(session)?,
        "Delete a test suite" => {
            if let Some(id) = pick_suite(session, "Delete which test suite?")? {
                if confirm_delete("Delete this test suite?")? {
                    session.delete_test_suite(&id);
                }
            }
        }
        "Create a test plan" => prompt_create_plan(session, &project_id)?,
        "Delete a test plan" => {
            if let Some(id) = pick_plan(session, "Delete which test plan?")? {
                if confirm_delete("Delete this test plan?")? {
                    session.delete_test_plan(&id);
                }
            }
        }
        "Edit the project" => prompt_edit_project(session, &project_id)?,
        "Archive the project" => {
            session.archive_project(&project_id);
            session.close_project();
        }
        "Delete the project" => {
            if confirm_delete("Delete this project? Its test cases keep their ids.")? {
                session.delete_project(&project_id);
            }
        }
        "Back to the project list" => session.close_project(),
        other => return Ok(handle_shared(session, other)?.unwrap_or(false)),
    }
    Ok(false)
}

fn archived_screen(session: &mut Session) -> Result<bool> {
    let options: Vec<String> = {
        let archived = session.store().archived_projects();
        println!("\n{}", "Archived projects".bold().underline());
        print_projects(&archived);
        archived
            .iter()
            .map(|p| format!("{}  {}", p.id, truncate(&p.name, 40)))
            .collect()
    };

    let mut actions = vec!["Restore a project".to_string(), "Delete a project".to_string()];
    actions.extend(shared_actions());
    let choice = Select::new("Action:", actions).prompt()?;

    match choice.as_str() {
        "Restore a project" => {
            if let Some(id) = pick_id("Restore which project?", options)? {
                session.unarchive_project(&id);
            }
        }
        "Delete a project" => {
            if let Some(id) = pick_id("Delete which project?", options)? {
                if confirm_delete("Delete this archived project?")? {
                    session.delete_project(&id);
                }
            }
        }
        other => return Ok(handle_shared(session, other)?.unwrap_or(false)),
    }
    Ok(false)
}

fn requirements_screen(session: &mut Session) -> Result<bool> {
    {
        let requirements = session.store().requirements();
        println!("\n{}", "Requirements".bold().underline());
        print_requirements(requirements);
    }

    let mut actions = vec![
        "Create a requirement".to_string(),
        "Edit a requirement".to_string(),
        "Delete a requirement".to_string(),
    ];
    actions.extend(shared_actions());
    let choice = Select::new("Action:", actions).prompt()?;

    match choice.as_str() {
        "Create a requirement" => prompt_create_requirement(session)?,
        "Edit a requirement" => prompt_edit_requirement(session)?,
        "Delete a requirement" => {
            if let Some(id) = pick_requirement(session, "Delete which requirement?")? {
                if confirm_delete("Delete this requirement? References to it are kept.")? {
                    session.delete_requirement(&id);
                }
            }
        }
        other => return Ok(handle_shared(session, other)?.unwrap_or(false)),
    }
    Ok(false)
}

fn reports_screen(session: &mut Session) -> Result<bool> {
    {
        let reports: Vec<&TestReport> = session.store().reports().iter().collect();
        println!("\n{}", "Reports".bold().underline());
        print_reports(&reports);
    }

    let mut actions = vec!["Search reports".to_string()];
    actions.extend(shared_actions());
    let choice = Select::new("Action:", actions).prompt()?;

    match choice.as_str() {
        "Search reports" => {
            let query = Text::new("Search by name or project:").prompt()?;
            let mut filter_options = vec!["Any".to_string()];
            filter_options.extend(ReportStatus::all().iter().map(|s| s.to_string()));
            let picked = Select::new("Outcome:", filter_options).prompt()?;
            let status = ReportStatus::all()
                .into_iter()
                .find(|s| s.to_string() == picked);
            let matches = session.store().search_reports(&query, status);
            println!();
            print_reports(&matches);
        }
        other => return Ok(handle_shared(session, other)?.unwrap_or(false)),
    }
    Ok(false)
}

fn testing_screen(session: &mut Session) -> Result<bool> {
    {
        println!("\n{}", "Testing".bold().underline());
        let suites: Vec<&TestSuite> = session.store().test_suites().iter().collect();
        print_suites(&suites);

        match session.selected_suite() {
            Some(suite) => {
                println!("\nSelected suite: {}  {}", suite.id.bold(), suite.name);
                let members = session.store().cases_in_suite(&suite.id);
                for case in members {
                    println!("  {}  {:<32} {}", case.id, truncate(&case.name, 32), color_case_status(&case.status));
                }
            }
            None => println!("\n{}", "No suite selected.".yellow()),
        }
    }

    let mut actions = vec![
        "Select a test suite".to_string(),
        "Clear the selection".to_string(),
    ];
    actions.extend(shared_actions());
    let choice = Select::new("Action:", actions).prompt()?;

    match choice.as_str() {
        "Select a test suite" => {
            let options: Vec<String> = session
                .store()
                .test_suites()
                .iter()
                .map(|s| format!("{}  {}", s.id, s.name))
                .collect();
            if let Some(id) = pick_id("Run which suite?", options)? {
                session.select_suite(Some(&id));
            }
        }
        "Clear the selection" => session.select_suite(None),
        other => return Ok(handle_shared(session, other)?.unwrap_or(false)),
    }
    Ok(false)
}

fn profile_screen(session: &mut Session) -> Result<bool> {
    {
        println!("\n{}", "Profile".bold().underline());
        match session.current_user() {
            Some(user) => {
                println!("  {:<10} {}", "Id", user.id);
                println!("  {:<10} {}", "Name", user.name);
                println!("  {:<10} {}", "Email", user.email);
                println!("  {:<10} {}", "Role", user.role);
                println!("  {:<10} {}", "Since", user.created_at.format("%Y-%m-%d"));
            }
            None => println!("{}", "No user selected.".yellow()),
        }
    }

    let mut actions = vec!["Switch user".to_string()];
    actions.extend(shared_actions());
    let choice = Select::new("Action:", actions).prompt()?;

    match choice.as_str() {
        "Switch user" => {
            let options: Vec<String> = session
                .store()
                .users()
                .iter()
                .map(|u| format!("{}  {} ({})", u.id, u.name, u.role))
                .collect();
            if let Some(id) = pick_id("Act as which user?", options)? {
                session.set_current_user(&id);
            }
        }
        other => return Ok(handle_shared(session, other)?.unwrap_or(false)),
    }
    Ok(false)
}

fn settings_screen(session: &mut Session) -> Result<bool> {
    if !session.view().settings_visible {
        println!("\n{}", "Access restricted to administrators.".red());
        session.go_back();
        return Ok(false);
    }

    {
        let users = session.store().users();
        println!("\n{}", "Settings: users".bold().underline());
        print_users(users);
    }

    let mut actions = vec![
        "Add a user".to_string(),
        "Change a user's role".to_string(),
        "Delete a user".to_string(),
    ];
    actions.extend(shared_actions());
    let choice = Select::new("Action:", actions).prompt()?;

    match choice.as_str() {
        "Add a user" => prompt_add_user(session)?,
        "Change a user's role" => {
            if let Some(id) = pick_user(session, "Change whose role?")? {
                let role = Select::new("New role:", Role::all()).prompt()?;
                session.change_user_role(&id, role);
            }
        }
        "Delete a user" => {
            if let Some(id) = pick_user(session, "Delete which user?")? {
                if confirm_delete("Delete this user?")? {
                    session.remove_user(&id);
                }
            }
        }
        other => return Ok(handle_shared(session, other)?.unwrap_or(false)),
    }
    Ok(false)
}

// ---- create/edit prompts ----

fn prompt_create_project(session: &mut Session) -> Result<()> {
    let name = Text::new("Project name:").prompt()?;
    let responsible = Text::new("Responsible:").prompt()?;
    let due = Text::new("Completion date (YYYY-MM-DD, optional):").prompt()?;
    let completion_date = parse_date(&due);
    if !due.trim().is_empty() && completion_date.is_none() {
        println!("{}", "Unrecognized date, leaving the completion date empty.".yellow());
    }
    session.create_project(NewProject {
        name,
        responsible,
        completion_date,
    });
    Ok(())
}

fn prompt_edit_project(session: &mut Session, project_id: &str) -> Result<()> {
    let (current_name, current_due) = match session.store().project(project_id) {
        Some(project) => (project.name.clone(), project.completion_date),
        None => return Ok(()),
    };

    let name_prompt = format!("Project name [{}]:", current_name);
    let name_input = Text::new(&name_prompt).prompt()?;
    let name = if name_input.trim().is_empty() {
        current_name
    } else {
        name_input
    };

    let due_label = current_due
        .map(|d| d.to_string())
        .unwrap_or_else(|| "none".to_string());
    let due_prompt = format!("Completion date [{}] (YYYY-MM-DD, empty to clear):", due_label);
    let due_input = Text::new(&due_prompt).prompt()?;
    let completion_date = parse_date(&due_input);
    if !due_input.trim().is_empty() && completion_date.is_none() {
        println!("{}", "Unrecognized date, clearing the completion date.".yellow());
    }

    session.update_project(project_id, name, completion_date);
    Ok(())
}

fn prompt_create_requirement(session: &mut Session) -> Result<()> {
    let name = Text::new("Requirement name:").prompt()?;
    let description = Editor::new("Description:").prompt()?;
    session.create_requirement(NewRequirement { name, description });
    Ok(())
}

fn prompt_edit_requirement(session: &mut Session) -> Result<()> {
    let id = match pick_requirement(session, "Edit which requirement?")? {
        Some(id) => id,
        None => return Ok(()),
    };
    let (current_name, current_description) = match session.store().requirement(&id) {
        Some(req) => (req.name.clone(), req.description.clone()),
        None => return Ok(()),
    };

    let name_prompt = format!("Requirement name [{}]:", current_name);
    let name_input = Text::new(&name_prompt).prompt()?;
    let name = if name_input.trim().is_empty() {
        current_name
    } else {
        name_input
    };
    let description = Editor::new("Description:")
        .with_predefined_text(&current_description)
        .prompt()?;

    session.update_requirement(&id, name, description);
    Ok(())
}

fn prompt_create_case(session: &mut Session, project_id: &str) -> Result<()> {
    let name = Text::new("Test case name:").prompt()?;
    let description = Editor::new("Description:").prompt()?;
    let steps = Editor::new("Steps (one per line):").prompt()?;
    let expected_result = Text::new("Expected result:").prompt()?;

    list_requirements_inline(session);
    let ids_input = Text::new("Requirement ids (comma separated, optional):").prompt()?;

    session.create_test_case(
        project_id,
        NewTestCase {
            name,
            description,
            steps,
            expected_result,
            requirement_ids: split_ids(&ids_input),
        },
    );
    Ok(())
}

fn prompt_attach_requirements(session: &mut Session) -> Result<()> {
    let case_id = match pick_case(session, "Attach to which test case?")? {
        Some(id) => id,
        None => return Ok(()),
    };
    list_requirements_inline(session);
    let ids_input = Text::new("Requirement ids (comma separated):").prompt()?;
    session.attach_requirements(&case_id, split_ids(&ids_input));
    Ok(())
}

fn prompt_create_suite(session: &mut Session, project_id: &str) -> Result<()> {
    let name = Text::new("Suite name:").prompt()?;
    let description = Text::new("Description:").prompt()?;
    list_project_cases_inline(session);
    let ids_input = Text::new("Test case ids (comma separated, optional):").prompt()?;

    session.create_test_suite(
        project_id,
        NewTestSuite {
            name,
            description,
            test_case_ids: split_ids(&ids_input),
        },
    );
    Ok(())
}

fn prompt_edit_suite(session: &mut Session) -> Result<()> {
    let id = match pick_suite(session, "Edit which test suite?")? {
        Some(id) => id,
        None => return Ok(()),
    };
    let (current_name, current_description, current_members) =
        match session.store().test_suite(&id) {
            Some(suite) => (
                suite.name.clone(),
                suite.description.clone(),
                suite.test_case_ids.join(", "),
            ),
            None => return Ok(()),
        };

    let name_prompt = format!("Suite name [{}]:", current_name);
    let name_input = Text::new(&name_prompt).prompt()?;
    let name = if name_input.trim().is_empty() {
        current_name
    } else {
        name_input
    };

    let description_prompt = format!("Description [{}]:", truncate(&current_description, 30));
    let description_input = Text::new(&description_prompt).prompt()?;
    let description = if description_input.trim().is_empty() {
        current_description
    } else {
        description_input
    };

    let ids_input = Text::new("Test case ids (comma separated):")
        .with_initial_value(&current_members)
        .prompt()?;

    session.update_test_suite(&id, name, description, split_ids(&ids_input));
    Ok(())
}

fn prompt_create_plan(session: &mut Session, project_id: &str) -> Result<()> {
    let name = Text::new("Plan name:").prompt()?;
    let goal = Text::new("Goal:").prompt()?;
    let due_input = Text::new("Deadline (YYYY-MM-DD, optional):").prompt()?;
    let deadline = parse_date(&due_input);
    list_requirements_inline(session);
    let ids_input = Text::new("Requirement ids (comma separated, optional):").prompt()?;
    let testers_input = Text::new("Testers (comma separated):").prompt()?;
    let metrics = Text::new("Success metrics:").prompt()?;

    session.create_test_plan(
        project_id,
        NewTestPlan {
            name,
            goal,
            deadline,
            requirement_ids: split_ids(&ids_input),
            testers: split_ids(&testers_input),
            metrics,
        },
    );
    Ok(())
}

fn prompt_add_user(session: &mut Session) -> Result<()> {
    let name = Text::new("Name:").prompt()?;
    let email = Text::new("Email:").prompt()?;
    let role = Select::new("Role:", Role::all()).prompt()?;
    session.add_user(NewUser { name, email, role });
    Ok(())
}

fn inspect_case(session: &Session) -> Result<()> {
    let id = match pick_case(session, "Inspect which test case?")? {
        Some(id) => id,
        None => return Ok(()),
    };
    let store = session.store();
    let case = match store.test_case(&id) {
        Some(case) => case,
        None => return Ok(()),
    };

    println!("\n{}  {}", case.id.bold(), case.name.bold());
    println!("  {:<14} {}", "Status", color_case_status(&case.status));
    println!("  {:<14} {}", "Project", case.project);
    if !case.description.is_empty() {
        println!("  {:<14} {}", "Description", case.description);
    }
    if !case.steps.is_empty() {
        println!("  Steps:");
        for line in case.steps.lines() {
            println!("    {}", line);
        }
    }
    if !case.expected_result.is_empty() {
        println!("  {:<14} {}", "Expected", case.expected_result);
    }
    let covered = store.requirements_by_ids(&case.requirement_ids);
    if !covered.is_empty() {
        println!("  Covers:");
        for req in covered {
            println!("    {}  {}", req.id, req.name);
        }
    }
    Ok(())
}

// ---- pickers ----

/// Presents labelled options whose first token is an id and returns the
/// chosen id. Esc cancels; an empty list is announced instead of prompted.
fn pick_id(prompt: &str, options: Vec<String>) -> Result<Option<String>> {
    if options.is_empty() {
        println!("{}", "Nothing to choose from.".yellow());
        return Ok(None);
    }
    let selection = Select::new(prompt, options).prompt_skippable()?;
    Ok(selection.and_then(|s| s.split_whitespace().next().map(String::from)))
}

fn pick_case(session: &Session, prompt: &str) -> Result<Option<String>> {
    let options: Vec<String> = session
        .focused_cases()
        .iter()
        .map(|c| format!("{}  {}", c.id, c.name))
        .collect();
    pick_id(prompt, options)
}

fn pick_suite(session: &Session, prompt: &str) -> Result<Option<String>> {
    let options: Vec<String> = session
        .focused_suites()
        .iter()
        .map(|s| format!("{}  {}", s.id, s.name))
        .collect();
    pick_id(prompt, options)
}

fn pick_plan(session: &Session, prompt: &str) -> Result<Option<String>> {
    let options: Vec<String> = session
        .focused_plans()
        .iter()
        .map(|p| format!("{}  {}", p.id, p.name))
        .collect();
    pick_id(prompt, options)
}

fn pick_requirement(session: &Session, prompt: &str) -> Result<Option<String>> {
    let options: Vec<String> = session
        .store()
        .requirements()
        .iter()
        .map(|r| format!("{}  {}", r.id, r.name))
        .collect();
    pick_id(prompt, options)
}

fn pick_user(session: &Session, prompt: &str) -> Result<Option<String>> {
    let options: Vec<String> = session
        .store()
        .users()
        .iter()
        .map(|u| format!("{}  {} ({})", u.id, u.name, u.role))
        .collect();
    pick_id(prompt, options)
}

fn list_requirements_inline(session: &Session) {
    let requirements = session.store().requirements();
    if requirements.is_empty() {
        return;
    }
    println!("Available requirements:");
    for req in requirements {
        println!("  {}  {}", req.id, req.name);
    }
}

fn list_project_cases_inline(session: &Session) {
    let cases = session.focused_cases();
    if cases.is_empty() {
        return;
    }
    println!("Test cases in this project:");
    for case in cases {
        println!("  {}  {}", case.id, case.name);
    }
}

// ---- tables ----

fn print_projects(projects: &[&Project]) {
    if projects.is_empty() {
        println!("{}", "No projects here yet.".yellow());
        return;
    }
    println!(
        "{:<8} | {:<36} | {:<10} | {:<16} | {:>5} | {:>5} | {:<10}",
        "ID", "Name", "Status", "Responsible", "Plans", "Cases", "Due"
    );
    println!("{}", "-".repeat(104));
    for p in projects {
        println!(
            "{:<8} | {:<36} | {:<10} | {:<16} | {:>5} | {:>5} | {:<10}",
            p.id,
            truncate(&p.name, 36),
            color_project_status(&p.status),
            truncate(&p.responsible, 16),
            p.test_plan_count,
            p.test_case_count,
            p.completion_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
        );
    }
}

fn print_requirements(requirements: &[Requirement]) {
    if requirements.is_empty() {
        println!("{}", "No requirements yet.".yellow());
        return;
    }
    println!("{:<8} | {:<30} | {}", "ID", "Name", "Description");
    println!("{}", "-".repeat(92));
    for r in requirements {
        println!(
            "{:<8} | {:<30} | {}",
            r.id,
            truncate(&r.name, 30),
            truncate(&r.description, 48)
        );
    }
}

fn print_cases(cases: &[&TestCase]) {
    if cases.is_empty() {
        println!("{}", "No test cases yet.".yellow());
        return;
    }
    println!(
        "{:<8} | {:<32} | {:<8} | {}",
        "ID", "Name", "Status", "Covers"
    );
    println!("{}", "-".repeat(72));
    for c in cases {
        println!(
            "{:<8} | {:<32} | {:<8} | {}",
            c.id,
            truncate(&c.name, 32),
            color_case_status(&c.status),
            c.requirement_ids.join(", ")
        );
    }
}

fn print_suites(suites: &[&TestSuite]) {
    if suites.is_empty() {
        println!("{}", "No test suites yet.".yellow());
        return;
    }
    println!(
        "{:<8} | {:<28} | {:<16} | {:>5} | {}",
        "ID", "Name", "Project", "Cases", "Description"
    );
    println!("{}", "-".repeat(96));
    for s in suites {
        println!(
            "{:<8} | {:<28} | {:<16} | {:>5} | {}",
            s.id,
            truncate(&s.name, 28),
            truncate(&s.project, 16),
            s.test_case_ids.len(),
            truncate(&s.description, 32)
        );
    }
}

fn print_plans(plans: &[&TestPlan]) {
    if plans.is_empty() {
        println!("{}", "No test plans yet.".yellow());
        return;
    }
    println!(
        "{:<8} | {:<28} | {:<32} | {:<10} | {}",
        "ID", "Name", "Goal", "Deadline", "Testers"
    );
    println!("{}", "-".repeat(100));
    for p in plans {
        println!(
            "{:<8} | {:<28} | {:<32} | {:<10} | {}",
            p.id,
            truncate(&p.name, 28),
            truncate(&p.goal, 32),
            p.deadline
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            p.testers.join(", ")
        );
    }
}

fn print_reports(reports: &[&TestReport]) {
    if reports.is_empty() {
        println!("{}", "No reports match.".yellow());
        return;
    }
    println!(
        "{:<8} | {:<24} | {:<16} | {:<16} | {:<8} | {:>7} | {}",
        "ID", "Name", "Project", "Ran", "Status", "Passed", "Duration"
    );
    println!("{}", "-".repeat(100));
    for r in reports {
        println!(
            "{:<8} | {:<24} | {:<16} | {:<16} | {:<8} | {:>3}/{:<3} | {}",
            r.id,
            truncate(&r.name, 24),
            truncate(&r.project, 16),
            r.ran_at.format("%Y-%m-%d %H:%M"),
            color_report_status(&r.status),
            r.passed,
            r.total,
            r.duration
        );
    }
}

fn print_users(users: &[SystemUser]) {
    if users.is_empty() {
        println!("{}", "No users registered.".yellow());
        return;
    }
    println!(
        "{:<8} | {:<20} | {:<28} | {}",
        "ID", "Name", "Email", "Role"
    );
    println!("{}", "-".repeat(76));
    for u in users {
        println!(
            "{:<8} | {:<20} | {:<28} | {}",
            u.id,
            truncate(&u.name, 20),
            truncate(&u.email, 28),
            u.role
        );
    }
}

// ---- small helpers ----

fn project_is_archived(session: &Session, project_id: &str) -> bool {
    session
        .store()
        .project(project_id)
        .map(|p| p.status == ProjectStatus::Archived)
        .unwrap_or(false)
}

fn color_project_status(status: &ProjectStatus) -> ColoredString {
    match status {
        ProjectStatus::Active => "Active".green(),
        ProjectStatus::Pending => "Pending".yellow(),
        ProjectStatus::Completed => "Completed".blue(),
        ProjectStatus::Archived => "Archived".dimmed(),
    }
}

fn color_case_status(status: &CaseStatus) -> ColoredString {
    match status {
        CaseStatus::Passed => "Passed".green(),
        CaseStatus::Failed => "Failed".red(),
        CaseStatus::Pending => "Pending".yellow(),
    }
}

fn color_report_status(status: &ReportStatus) -> ColoredString {
    match status {
        ReportStatus::Success => "Success".green(),
        ReportStatus::Failed => "Failed".red(),
        ReportStatus::Partial => "Partial".yellow(),
    }
}

fn confirm_delete(prompt: &str) -> Result<bool> {
    Ok(Confirm::new(prompt)
        .with_default(false)
        .prompt_skippable()?
        .unwrap_or(false))
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

fn split_ids(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
