//! The demo dataset the dashboard starts with.
//!
//! Shapes mirror the production sample data: five projects in mixed states,
//! a small requirement/case/suite/plan web inside the first project, a run
//! history with one report per outcome, and one user per role with the
//! administrator first (new sessions act as the first user).

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    CaseStatus, Project, ProjectStatus, ReportStatus, Requirement, Role, SystemUser, TestCase,
    TestPlan, TestReport, TestSuite,
};
use crate::store::EntityStore;

fn day(year: i32, month: u32, dayofmonth: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dayofmonth).unwrap_or(NaiveDate::MIN)
}

fn stamp(year: i32, month: u32, dayofmonth: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    day(year, month, dayofmonth)
        .and_hms_opt(hour, minute, 0)
        .map(|t| t.and_utc())
        .unwrap_or_else(Utc::now)
}

/// Builds a store loaded with the demo records.
pub fn demo_store() -> EntityStore {
    let registered = stamp(2024, 1, 10, 9, 0);

    let project = |id: &str,
                   name: &str,
                   status: ProjectStatus,
                   responsible: &str,
                   plans: u32,
                   cases: u32,
                   due: NaiveDate| Project {
        id: id.to_string(),
        name: name.to_string(),
        status,
        responsible: responsible.to_string(),
        test_plan_count: plans,
        test_case_count: cases,
        completion_date: Some(due),
        created_at: registered,
    };

    let projects = vec![
        project(
            "PRJ-001",
            "Web application \"Client Portal\"",
            ProjectStatus::Active,
            "Irene Vaughn",
            3,
            24,
            day(2024, 12, 15),
        ),
        project(
            "PRJ-002",
            "Mobile app \"Food Delivery\"",
            ProjectStatus::Active,
            "Anna Peters",
            2,
            18,
            day(2024, 11, 30),
        ),
        project(
            "PRJ-003",
            "Payment gateway API",
            ProjectStatus::Pending,
            "Vince Porter",
            1,
            12,
            day(2025, 1, 20),
        ),
        project(
            "PRJ-004",
            "Warehouse management system",
            ProjectStatus::Completed,
            "Kate Collins",
            4,
            31,
            day(2024, 10, 15),
        ),
        project(
            "PRJ-005",
            "Sales CRM system",
            ProjectStatus::Active,
            "Dan Freeman",
            2,
            15,
            day(2024, 12, 30),
        ),
    ];

    let requirement = |id: &str, name: &str, description: &str| Requirement {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        created_at: registered,
    };

    let requirements = vec![
        requirement(
            "REQ-001",
            "User authorization",
            "The system must provide secure sign-in for registered users",
        ),
        requirement(
            "REQ-002",
            "Payment processing",
            "Card payments must be processed through the acquiring provider",
        ),
        requirement(
            "REQ-003",
            "User notifications",
            "The system must send email notifications about order status",
        ),
    ];

    let case = |id: &str,
                name: &str,
                status: CaseStatus,
                description: &str,
                steps: &str,
                expected: &str,
                requirement_ids: Vec<&str>| TestCase {
        id: id.to_string(),
        name: name.to_string(),
        status,
        project_id: "PRJ-001".to_string(),
        project: "Client Portal".to_string(),
        description: description.to_string(),
        steps: steps.to_string(),
        expected_result: expected.to_string(),
        requirement_ids: requirement_ids.into_iter().map(String::from).collect(),
        created_at: registered,
    };

    let test_cases = vec![
        case(
            "TC-001",
            "Sign-in check",
            CaseStatus::Passed,
            "Verifies that a registered user can sign in",
            "1. Open the sign-in form\n2. Enter valid credentials\n3. Submit",
            "The user lands on the dashboard",
            vec!["REQ-001"],
        ),
        case(
            "TC-002",
            "Payment processing test",
            CaseStatus::Failed,
            "Verifies that a card payment completes",
            "1. Add an item to the cart\n2. Check out with a test card\n3. Confirm",
            "The order is marked as paid",
            vec!["REQ-002"],
        ),
        case(
            "TC-003",
            "Notification check",
            CaseStatus::Pending,
            "Verifies that order status emails go out",
            "1. Place an order\n2. Change its status\n3. Check the inbox",
            "A status email arrives within a minute",
            vec!["REQ-003"],
        ),
    ];

    let suite = |id: &str, name: &str, description: &str, members: Vec<&str>| TestSuite {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        test_case_ids: members.into_iter().map(String::from).collect(),
        project_id: "PRJ-001".to_string(),
        project: "Client Portal".to_string(),
        created_at: registered,
    };

    let test_suites = vec![
        suite(
            "TS-001",
            "Smoke tests",
            "Quick checks of the critical paths",
            vec!["TC-001"],
        ),
        suite(
            "TS-002",
            "Regression suite",
            "Full pass over existing functionality",
            vec!["TC-001", "TC-002", "TC-003"],
        ),
    ];

    let test_plans = vec![TestPlan {
        id: "TP-001".to_string(),
        name: "Release test plan v1.0".to_string(),
        project_id: "PRJ-001".to_string(),
        project: "Client Portal".to_string(),
        requirement_ids: vec!["REQ-001".to_string(), "REQ-003".to_string()],
        goal: "Verify release readiness of the portal".to_string(),
        deadline: Some(day(2024, 12, 1)),
        testers: vec!["Irene Vaughn".to_string(), "Anna Peters".to_string()],
        metrics: "80% requirement coverage".to_string(),
        created_at: registered,
    }];

    let report = |id: &str,
                  name: &str,
                  project: &str,
                  ran_at: DateTime<Utc>,
                  status: ReportStatus,
                  passed: u32,
                  total: u32,
                  duration: &str| TestReport {
        id: id.to_string(),
        name: name.to_string(),
        project: project.to_string(),
        ran_at,
        status,
        passed,
        total,
        duration: duration.to_string(),
    };

    let reports = vec![
        report(
            "TR-001",
            "Smoke run report",
            "Client Portal",
            stamp(2024, 1, 20, 14, 30),
            ReportStatus::Success,
            15,
            15,
            "12m 40s",
        ),
        report(
            "TR-002",
            "Regression run report",
            "Client Portal",
            stamp(2024, 1, 18, 9, 15),
            ReportStatus::Failed,
            12,
            18,
            "43m 12s",
        ),
        report(
            "TR-003",
            "Payment flow report",
            "Food Delivery",
            stamp(2024, 1, 15, 16, 45),
            ReportStatus::Partial,
            20,
            24,
            "27m 05s",
        ),
    ];

    let user = |id: &str, name: &str, email: &str, role: Role| SystemUser {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        created_at: registered,
    };

    let users = vec![
        user("USR-001", "Alex Turner", "alex.turner@testdesk.io", Role::Admin),
        user(
            "USR-002",
            "Maria Bennett",
            "maria.bennett@testdesk.io",
            Role::Manager,
        ),
        user(
            "USR-003",
            "Sofia Reyes",
            "sofia.reyes@testdesk.io",
            Role::TestAnalyst,
        ),
        user("USR-004", "Tom Becker", "tom.becker@testdesk.io", Role::Tester),
        user("USR-005", "Rita Moss", "rita.moss@testdesk.io", Role::Reader),
    ];

    EntityStore {
        projects,
        requirements,
        test_cases,
        test_suites,
        test_plans,
        reports,
        users,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_store_shape() {
        let store = demo_store();
        assert_eq!(store.projects().len(), 5);
        assert_eq!(store.requirements().len(), 3);
        assert_eq!(store.test_cases().len(), 3);
        assert_eq!(store.test_suites().len(), 2);
        assert_eq!(store.test_plans().len(), 1);
        assert_eq!(store.reports().len(), 3);
        assert_eq!(store.users().len(), 5);
    }

    #[test]
    fn test_first_user_is_the_administrator() {
        let store = demo_store();
        let first = store.users().first().expect("seed has users");
        assert_eq!(first.id, "USR-001");
        assert_eq!(first.role, Role::Admin);
    }

    #[test]
    fn test_one_archivable_project_per_status_mix() {
        let store = demo_store();
        assert_eq!(store.visible_projects().len(), 5);
        assert!(store.archived_projects().is_empty());

        let statuses: Vec<ProjectStatus> = store.projects().iter().map(|p| p.status).collect();
        assert!(statuses.contains(&ProjectStatus::Pending));
        assert!(statuses.contains(&ProjectStatus::Completed));
    }

    #[test]
    fn test_portal_project_links_resolve() {
        let store = demo_store();
        assert_eq!(store.cases_for_project("PRJ-001").len(), 3);
        assert_eq!(store.suites_for_project("PRJ-001").len(), 2);
        assert_eq!(store.plans_for_project("PRJ-001").len(), 1);
        assert_eq!(store.cases_in_suite("TS-002").len(), 3);

        let case = store.test_case("TC-001").expect("seeded case");
        assert_eq!(case.project, "Client Portal");
        assert_eq!(store.requirements_by_ids(&case.requirement_ids).len(), 1);
    }

    #[test]
    fn test_quoted_project_names_yield_short_labels() {
        let store = demo_store();
        let portal = store.project("PRJ-001").expect("seeded project");
        assert_eq!(portal.short_name(), "Client Portal");
        let gateway = store.project("PRJ-003").expect("seeded project");
        assert_eq!(gateway.short_name(), "Payment");
    }

    #[test]
    fn test_reports_cover_every_outcome() {
        let store = demo_store();
        for status in ReportStatus::all() {
            assert!(
                store.reports().iter().any(|r| r.status == status),
                "no report with status {}",
                status
            );
        }
    }
}
