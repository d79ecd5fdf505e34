use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the lifecycle status of a project
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    Pending,
    Completed,
    Archived,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectStatus::Active => write!(f, "Active"),
            ProjectStatus::Pending => write!(f, "Pending"),
            ProjectStatus::Completed => write!(f, "Completed"),
            ProjectStatus::Archived => write!(f, "Archived"),
        }
    }
}

/// Represents the execution status of a test case
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CaseStatus {
    Passed,
    Failed,
    Pending,
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStatus::Passed => write!(f, "Passed"),
            CaseStatus::Failed => write!(f, "Failed"),
            CaseStatus::Pending => write!(f, "Pending"),
        }
    }
}

/// Represents the overall outcome of a recorded test run
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReportStatus {
    Success,
    Failed,
    Partial,
}

impl ReportStatus {
    /// All outcomes, in the order filter menus present them
    pub fn all() -> Vec<ReportStatus> {
        vec![
            ReportStatus::Success,
            ReportStatus::Failed,
            ReportStatus::Partial,
        ]
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportStatus::Success => write!(f, "Success"),
            ReportStatus::Failed => write!(f, "Failed"),
            ReportStatus::Partial => write!(f, "Partial"),
        }
    }
}

/// Represents the role of a system user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    Admin,
    Manager,
    TestAnalyst,
    Tester,
    Reader,
}

impl Role {
    /// All roles, in the order selection menus present them
    pub fn all() -> Vec<Role> {
        vec![
            Role::Admin,
            Role::Manager,
            Role::TestAnalyst,
            Role::Tester,
            Role::Reader,
        ]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "Administrator"),
            Role::Manager => write!(f, "Manager"),
            Role::TestAnalyst => write!(f, "Test analyst"),
            Role::Tester => write!(f, "Tester"),
            Role::Reader => write!(f, "Reader"),
        }
    }
}

/// Represents a tracked project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for the project
    pub id: String,

    /// Full display name of the project
    pub name: String,

    /// Current lifecycle status
    pub status: ProjectStatus,

    /// Person responsible for the project
    pub responsible: String,

    /// Number of test plans shown on the project card (display hint, not derived)
    pub test_plan_count: u32,

    /// Number of test cases shown on the project card (display hint, not derived)
    pub test_case_count: u32,

    /// Planned completion date, if one has been set
    pub completion_date: Option<NaiveDate>,

    /// When the project was created
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Short label for tables and card subtitles: the fragment between the
    /// first pair of double quotes when the name contains one, otherwise the
    /// first whitespace-separated word. For quote-less multi-word names this
    /// is only an approximation of the intended label; associations go
    /// through `project_id`, so the label is never used for matching.
    pub fn short_name(&self) -> &str {
        let mut parts = self.name.split('"');
        parts.next();
        match parts.next() {
            Some(quoted) if !quoted.is_empty() => quoted,
            _ => self.name.split_whitespace().next().unwrap_or(&self.name),
        }
    }
}

/// Represents a tracked requirement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requirement {
    /// Unique identifier for the requirement
    pub id: String,

    /// Short title describing the requirement
    pub name: String,

    /// Detailed description of the requirement
    pub description: String,

    /// When the requirement was created
    pub created_at: DateTime<Utc>,
}

/// Represents a single test case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    /// Unique identifier for the test case
    pub id: String,

    /// Short title describing the test case
    pub name: String,

    /// Latest execution status
    pub status: CaseStatus,

    /// Id of the owning project
    pub project_id: String,

    /// Short project label shown in tables (see `Project::short_name`)
    pub project: String,

    /// What the test case verifies
    pub description: String,

    /// Steps to execute, one per line
    pub steps: String,

    /// Expected result after the steps complete
    pub expected_result: String,

    /// Ids of covered requirements; deduplicated, order not meaningful
    pub requirement_ids: Vec<String>,

    /// When the test case was created
    pub created_at: DateTime<Utc>,
}

/// Represents a named group of test cases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSuite {
    /// Unique identifier for the suite
    pub id: String,

    /// Short title describing the suite
    pub name: String,

    /// What the suite covers
    pub description: String,

    /// Ids of member test cases, in display order; deduplicated
    pub test_case_ids: Vec<String>,

    /// Id of the owning project
    pub project_id: String,

    /// Short project label shown in tables
    pub project: String,

    /// When the suite was created
    pub created_at: DateTime<Utc>,
}

/// Represents a test plan for a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestPlan {
    /// Unique identifier for the plan
    pub id: String,

    /// Short title describing the plan
    pub name: String,

    /// Id of the owning project
    pub project_id: String,

    /// Short project label shown in tables
    pub project: String,

    /// Ids of requirements in scope; deduplicated, order not meaningful
    pub requirement_ids: Vec<String>,

    /// What the plan sets out to verify
    pub goal: String,

    /// Deadline for completing the plan, if one has been set
    pub deadline: Option<NaiveDate>,

    /// Names of assigned testers, in display order
    pub testers: Vec<String>,

    /// Free-form success metrics
    pub metrics: String,

    /// When the plan was created
    pub created_at: DateTime<Utc>,
}

/// Represents a recorded test run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestReport {
    pub id: String,
    pub name: String,
    /// Short project label the run belonged to
    pub project: String,
    /// When the run finished
    pub ran_at: DateTime<Utc>,
    pub status: ReportStatus,
    /// Number of test cases that passed
    pub passed: u32,
    /// Number of test cases executed
    pub total: u32,
    /// Human-readable run duration, e.g. "43m 12s"
    pub duration: String,
}

/// Represents a registered user of the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemUser {
    /// Unique identifier for the user
    pub id: String,

    /// Full name of the user
    pub name: String,

    /// Contact email address
    pub email: String,

    /// Role determining permitted mutations
    pub role: Role,

    /// When the account was registered
    pub created_at: DateTime<Utc>,
}

/// Input for creating a project
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub responsible: String,
    pub completion_date: Option<NaiveDate>,
}

/// Input for creating a requirement
#[derive(Debug, Clone)]
pub struct NewRequirement {
    pub name: String,
    pub description: String,
}

/// Input for creating a test case inside a project
#[derive(Debug, Clone)]
pub struct NewTestCase {
    pub name: String,
    pub description: String,
    pub steps: String,
    pub expected_result: String,
    pub requirement_ids: Vec<String>,
}

/// Input for creating a test suite inside a project
#[derive(Debug, Clone)]
pub struct NewTestSuite {
    pub name: String,
    pub description: String,
    pub test_case_ids: Vec<String>,
}

/// Input for creating a test plan inside a project
#[derive(Debug, Clone)]
pub struct NewTestPlan {
    pub name: String,
    pub goal: String,
    pub deadline: Option<NaiveDate>,
    pub requirement_ids: Vec<String>,
    pub testers: Vec<String>,
    pub metrics: String,
}

/// Input for registering a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_named(name: &str) -> Project {
        Project {
            id: "PRJ-001".to_string(),
            name: name.to_string(),
            status: ProjectStatus::Active,
            responsible: "Irene Vaughn".to_string(),
            test_plan_count: 0,
            test_case_count: 0,
            completion_date: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_short_name_prefers_quoted_fragment() {
        let project = project_named("Web application \"Client Portal\"");
        assert_eq!(project.short_name(), "Client Portal");
    }

    #[test]
    fn test_short_name_falls_back_to_first_word() {
        let project = project_named("Payment gateway API");
        assert_eq!(project.short_name(), "Payment");
    }

    #[test]
    fn test_short_name_single_word() {
        let project = project_named("Storefront");
        assert_eq!(project.short_name(), "Storefront");
    }

    #[test]
    fn test_short_name_empty_name() {
        let project = project_named("");
        assert_eq!(project.short_name(), "");
    }

    #[test]
    fn test_short_name_ignores_empty_quotes() {
        let project = project_named("Release \"\" candidate");
        assert_eq!(project.short_name(), "Release");
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::TestAnalyst.to_string(), "Test analyst");
        assert_eq!(Role::Admin.to_string(), "Administrator");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ProjectStatus::Archived.to_string(), "Archived");
        assert_eq!(CaseStatus::Passed.to_string(), "Passed");
        assert_eq!(ReportStatus::Partial.to_string(), "Partial");
    }
}
