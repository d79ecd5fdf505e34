//! In-memory store for the dashboard's entity collections.
//!
//! All state lives in this object; there are no module-level collections.
//! Ids are `<PREFIX>-<3-digit index>` strings assigned at creation. Cross
//! references between entities are plain id strings with no integrity
//! enforced on the far end: deletes never cascade, and every lookup by id is
//! fallible so a dangling reference is skipped rather than an error.

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::error::ActionError;
use crate::models::{
    CaseStatus, NewProject, NewRequirement, NewTestCase, NewTestPlan, NewTestSuite, NewUser,
    Project, ProjectStatus, ReportStatus, Requirement, Role, SystemUser, TestCase, TestPlan,
    TestReport, TestSuite,
};

/// Owns the entity collections and all mutations over them
#[derive(Debug, Default, Serialize)]
pub struct EntityStore {
    pub(crate) projects: Vec<Project>,
    pub(crate) requirements: Vec<Requirement>,
    pub(crate) test_cases: Vec<TestCase>,
    pub(crate) test_suites: Vec<TestSuite>,
    pub(crate) test_plans: Vec<TestPlan>,
    pub(crate) reports: Vec<TestReport>,
    pub(crate) users: Vec<SystemUser>,
}

/// Picks the next free id for a collection. The candidate index is the
/// collection length plus one; if a surviving record already carries that id
/// (possible after deletes) the index advances until it is free.
fn next_id<T>(prefix: &str, items: &[T], id_of: impl Fn(&T) -> &str) -> String {
    let mut index = items.len() + 1;
    loop {
        let candidate = format!("{}-{:03}", prefix, index);
        if !items.iter().any(|item| id_of(item) == candidate) {
            return candidate;
        }
        index += 1;
    }
}

/// Rejects empty or whitespace-only required fields.
fn required(field: &str, value: &str) -> Result<(), ActionError> {
    if value.trim().is_empty() {
        return Err(ActionError::required(field));
    }
    Ok(())
}

/// Drops duplicate ids, keeping the first occurrence of each.
fn dedup_ids(ids: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

impl EntityStore {
    /// Creates a store with every collection empty.
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            requirements: Vec::new(),
            test_cases: Vec::new(),
            test_plans: Vec::new(),
            test_suites: Vec::new(),
            reports: Vec::new(),
            users: Vec::new(),
        }
    }

    // ---- projects ----

    /// All projects, archived ones included.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Projects shown in the default list: everything not archived.
    pub fn visible_projects(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.status != ProjectStatus::Archived)
            .collect()
    }

    /// Projects that have been archived.
    pub fn archived_projects(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Archived)
            .collect()
    }

    /// Gets a project by id.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Creates a project. New projects start active with zeroed card counts.
    pub fn create_project(&mut self, new: NewProject) -> Result<Project, ActionError> {
        required("Project name", &new.name)?;
        let project = Project {
            id: next_id("PRJ", &self.projects, |p| &p.id),
            name: new.name,
            status: ProjectStatus::Active,
            responsible: new.responsible,
            test_plan_count: 0,
            test_case_count: 0,
            completion_date: new.completion_date,
            created_at: Utc::now(),
        };
        self.projects.push(project.clone());
        Ok(project)
    }

    /// Renames a project and replaces its completion date.
    pub fn update_project(
        &mut self,
        id: &str,
        name: String,
        completion_date: Option<NaiveDate>,
    ) -> Result<Project, ActionError> {
        required("Project name", &name)?;
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ActionError::not_found("project", id))?;
        project.name = name;
        project.completion_date = completion_date;
        Ok(project.clone())
    }

    /// Moves a project to the archive.
    pub fn archive_project(&mut self, id: &str) -> Result<Project, ActionError> {
        self.set_project_status(id, ProjectStatus::Archived)
    }

    /// Returns an archived project to the active list.
    pub fn unarchive_project(&mut self, id: &str) -> Result<Project, ActionError> {
        self.set_project_status(id, ProjectStatus::Active)
    }

    fn set_project_status(
        &mut self,
        id: &str,
        status: ProjectStatus,
    ) -> Result<Project, ActionError> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ActionError::not_found("project", id))?;
        project.status = status;
        Ok(project.clone())
    }

    /// Removes a project. Entities that referenced it keep their ids; a
    /// missing id is a no-op.
    pub fn delete_project(&mut self, id: &str) {
        self.projects.retain(|p| p.id != id);
    }

    // ---- requirements ----

    /// All requirements.
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Gets a requirement by id.
    pub fn requirement(&self, id: &str) -> Option<&Requirement> {
        self.requirements.iter().find(|r| r.id == id)
    }

    /// Resolves a list of requirement ids, silently skipping missing ones.
    pub fn requirements_by_ids(&self, ids: &[String]) -> Vec<&Requirement> {
        ids.iter().filter_map(|id| self.requirement(id)).collect()
    }

    /// Creates a requirement.
    pub fn create_requirement(&mut self, new: NewRequirement) -> Result<Requirement, ActionError> {
        required("Requirement name", &new.name)?;
        let requirement = Requirement {
            id: next_id("REQ", &self.requirements, |r| &r.id),
            name: new.name,
            description: new.description,
            created_at: Utc::now(),
        };
        self.requirements.push(requirement.clone());
        Ok(requirement)
    }

    /// Replaces a requirement's name and description.
    pub fn update_requirement(
        &mut self,
        id: &str,
        name: String,
        description: String,
    ) -> Result<Requirement, ActionError> {
        required("Requirement name", &name)?;
        let requirement = self
            .requirements
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ActionError::not_found("requirement", id))?;
        requirement.name = name;
        requirement.description = description;
        Ok(requirement.clone())
    }

    /// Removes a requirement. Test cases and plans keep any reference to it.
    pub fn delete_requirement(&mut self, id: &str) {
        self.requirements.retain(|r| r.id != id);
    }

    // ---- test cases ----

    /// All test cases across every project.
    pub fn test_cases(&self) -> &[TestCase] {
        &self.test_cases
    }

    /// Gets a test case by id.
    pub fn test_case(&self, id: &str) -> Option<&TestCase> {
        self.test_cases.iter().find(|c| c.id == id)
    }

    /// Test cases belonging to a project, matched by project id.
    pub fn cases_for_project(&self, project_id: &str) -> Vec<&TestCase> {
        self.test_cases
            .iter()
            .filter(|c| c.project_id == project_id)
            .collect()
    }

    /// Creates a test case inside a project. The case starts pending and
    /// carries the project's short label for display.
    pub fn create_test_case(
        &mut self,
        project_id: &str,
        new: NewTestCase,
    ) -> Result<TestCase, ActionError> {
        required("Test case name", &new.name)?;
        let label = match self.project(project_id) {
            Some(project) => project.short_name().to_string(),
            None => return Err(ActionError::not_found("project", project_id)),
        };
        let case = TestCase {
            id: next_id("TC", &self.test_cases, |c| &c.id),
            name: new.name,
            status: CaseStatus::Pending,
            project_id: project_id.to_string(),
            project: label,
            description: new.description,
            steps: new.steps,
            expected_result: new.expected_result,
            requirement_ids: dedup_ids(new.requirement_ids),
            created_at: Utc::now(),
        };
        self.test_cases.push(case.clone());
        Ok(case)
    }

    /// Replaces the set of requirements a test case covers.
    pub fn set_case_requirements(
        &mut self,
        id: &str,
        requirement_ids: Vec<String>,
    ) -> Result<TestCase, ActionError> {
        let case = self
            .test_cases
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ActionError::not_found("test case", id))?;
        case.requirement_ids = dedup_ids(requirement_ids);
        Ok(case.clone())
    }

    /// Removes a test case. Suites keep its id in their member lists.
    pub fn delete_test_case(&mut self, id: &str) {
        self.test_cases.retain(|c| c.id != id);
    }

    // ---- test suites ----

    /// All test suites across every project.
    pub fn test_suites(&self) -> &[TestSuite] {
        &self.test_suites
    }

    /// Gets a test suite by id.
    pub fn test_suite(&self, id: &str) -> Option<&TestSuite> {
        self.test_suites.iter().find(|s| s.id == id)
    }

    /// Test suites belonging to a project, matched by project id.
    pub fn suites_for_project(&self, project_id: &str) -> Vec<&TestSuite> {
        self.test_suites
            .iter()
            .filter(|s| s.project_id == project_id)
            .collect()
    }

    /// The member cases of a suite that still exist, in the suite's order.
    /// Dangling member ids are skipped; an unknown suite id yields nothing.
    pub fn cases_in_suite(&self, suite_id: &str) -> Vec<&TestCase> {
        match self.test_suite(suite_id) {
            Some(suite) => suite
                .test_case_ids
                .iter()
                .filter_map(|id| self.test_case(id))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Creates a test suite inside a project.
    pub fn create_test_suite(
        &mut self,
        project_id: &str,
        new: NewTestSuite,
    ) -> Result<TestSuite, ActionError> {
        required("Suite name", &new.name)?;
        let label = match self.project(project_id) {
            Some(project) => project.short_name().to_string(),
            None => return Err(ActionError::not_found("project", project_id)),
        };
        let suite = TestSuite {
            id: next_id("TS", &self.test_suites, |s| &s.id),
            name: new.name,
            description: new.description,
            test_case_ids: dedup_ids(new.test_case_ids),
            project_id: project_id.to_string(),
            project: label,
            created_at: Utc::now(),
        };
        self.test_suites.push(suite.clone());
        Ok(suite)
    }

    /// Replaces a suite's name, description and member list.
    pub fn update_test_suite(
        &mut self,
        id: &str,
        name: String,
        description: String,
        test_case_ids: Vec<String>,
    ) -> Result<TestSuite, ActionError> {
        required("Suite name", &name)?;
        let suite = self
            .test_suites
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ActionError::not_found("test suite", id))?;
        suite.name = name;
        suite.description = description;
        suite.test_case_ids = dedup_ids(test_case_ids);
        Ok(suite.clone())
    }

    /// Removes a test suite.
    pub fn delete_test_suite(&mut self, id: &str) {
        self.test_suites.retain(|s| s.id != id);
    }

    // ---- test plans ----

    /// All test plans across every project.
    pub fn test_plans(&self) -> &[TestPlan] {
        &self.test_plans
    }

    /// Gets a test plan by id.
    pub fn test_plan(&self, id: &str) -> Option<&TestPlan> {
        self.test_plans.iter().find(|p| p.id == id)
    }

    /// Test plans belonging to a project, matched by project id.
    pub fn plans_for_project(&self, project_id: &str) -> Vec<&TestPlan> {
        self.test_plans
            .iter()
            .filter(|p| p.project_id == project_id)
            .collect()
    }

    /// Creates a test plan inside a project. Blank tester names are dropped;
    /// the rest keep their order.
    pub fn create_test_plan(
        &mut self,
        project_id: &str,
        new: NewTestPlan,
    ) -> Result<TestPlan, ActionError> {
        required("Plan name", &new.name)?;
        required("Plan goal", &new.goal)?;
        let label = match self.project(project_id) {
            Some(project) => project.short_name().to_string(),
            None => return Err(ActionError::not_found("project", project_id)),
        };
        let plan = TestPlan {
            id: next_id("TP", &self.test_plans, |p| &p.id),
            name: new.name,
            project_id: project_id.to_string(),
            project: label,
            requirement_ids: dedup_ids(new.requirement_ids),
            goal: new.goal,
            deadline: new.deadline,
            testers: new
                .testers
                .into_iter()
                .filter(|t| !t.trim().is_empty())
                .collect(),
            metrics: new.metrics,
            created_at: Utc::now(),
        };
        self.test_plans.push(plan.clone());
        Ok(plan)
    }

    /// Removes a test plan.
    pub fn delete_test_plan(&mut self, id: &str) {
        self.test_plans.retain(|p| p.id != id);
    }

    // ---- reports ----

    /// All recorded test runs.
    pub fn reports(&self) -> &[TestReport] {
        &self.reports
    }

    /// Reports whose name or project contains `query` (case-insensitive),
    /// optionally narrowed to one outcome. An empty query matches everything.
    pub fn search_reports(&self, query: &str, status: Option<ReportStatus>) -> Vec<&TestReport> {
        let query = query.to_lowercase();
        self.reports
            .iter()
            .filter(|r| {
                let text_match = query.is_empty()
                    || r.name.to_lowercase().contains(&query)
                    || r.project.to_lowercase().contains(&query);
                let status_match = status.map_or(true, |s| r.status == s);
                text_match && status_match
            })
            .collect()
    }

    // ---- users ----

    /// All registered users.
    pub fn users(&self) -> &[SystemUser] {
        &self.users
    }

    /// Gets a user by id.
    pub fn user(&self, id: &str) -> Option<&SystemUser> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Registers a user.
    pub fn create_user(&mut self, new: NewUser) -> Result<SystemUser, ActionError> {
        required("User name", &new.name)?;
        required("Email", &new.email)?;
        let user = SystemUser {
            id: next_id("USR", &self.users, |u| &u.id),
            name: new.name,
            email: new.email,
            role: new.role,
            created_at: Utc::now(),
        };
        self.users.push(user.clone());
        Ok(user)
    }

    /// Changes a user's role.
    pub fn update_user_role(&mut self, id: &str, role: Role) -> Result<SystemUser, ActionError> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| ActionError::not_found("user", id))?;
        user.role = role;
        Ok(user.clone())
    }

    /// Removes a user from the registry.
    pub fn delete_user(&mut self, id: &str) {
        self.users.retain(|u| u.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_project() -> (EntityStore, String) {
        let mut store = EntityStore::new();
        let project = store
            .create_project(NewProject {
                name: "Web application \"Client Portal\"".to_string(),
                responsible: "Irene Vaughn".to_string(),
                completion_date: None,
            })
            .expect("project should be created");
        let id = project.id;
        (store, id)
    }

    fn some_case(name: &str) -> NewTestCase {
        NewTestCase {
            name: name.to_string(),
            description: String::new(),
            steps: String::new(),
            expected_result: String::new(),
            requirement_ids: Vec::new(),
        }
    }

    #[test]
    fn test_ids_are_sequential_and_zero_padded() {
        let (mut store, project_id) = store_with_project();
        for n in 1..=3 {
            let case = store
                .create_test_case(&project_id, some_case(&format!("case {}", n)))
                .expect("case should be created");
            assert_eq!(case.id, format!("TC-{:03}", n));
        }
        let fourth = store
            .create_test_case(&project_id, some_case("case 4"))
            .expect("case should be created");
        assert_eq!(fourth.id, "TC-004");

        let mut ids: Vec<&str> = store.test_cases().iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_ids_stay_unique_after_deletes() {
        let (mut store, project_id) = store_with_project();
        for n in 1..=3 {
            store
                .create_test_case(&project_id, some_case(&format!("case {}", n)))
                .expect("case should be created");
        }
        store.delete_test_case("TC-002");

        // Length is back to 2, but TC-003 survives, so the candidate id is
        // taken and generation must move past it.
        let case = store
            .create_test_case(&project_id, some_case("replacement"))
            .expect("case should be created");
        assert_eq!(case.id, "TC-004");
    }

    #[test]
    fn test_create_requires_a_name() {
        let (mut store, project_id) = store_with_project();
        let before = store.test_cases().len();

        let result = store.create_test_case(&project_id, some_case("   "));
        assert!(matches!(result, Err(ActionError::Validation(_))));
        assert_eq!(store.test_cases().len(), before);
    }

    #[test]
    fn test_plan_requires_name_and_goal() {
        let (mut store, project_id) = store_with_project();
        let missing_goal = NewTestPlan {
            name: "Release plan".to_string(),
            goal: String::new(),
            deadline: None,
            requirement_ids: Vec::new(),
            testers: Vec::new(),
            metrics: String::new(),
        };
        let result = store.create_test_plan(&project_id, missing_goal);
        match result {
            Err(ActionError::Validation(message)) => {
                assert_eq!(message, "Plan goal is required")
            }
            other => panic!("expected a validation error, got {:?}", other),
        }
        assert!(store.test_plans().is_empty());
    }

    #[test]
    fn test_user_requires_name_and_email() {
        let mut store = EntityStore::new();
        let result = store.create_user(NewUser {
            name: "Rita Moss".to_string(),
            email: "".to_string(),
            role: Role::Reader,
        });
        assert!(matches!(result, Err(ActionError::Validation(_))));
        assert!(store.users().is_empty());
    }

    #[test]
    fn test_delete_does_not_cascade() {
        let (mut store, project_id) = store_with_project();
        let case = store
            .create_test_case(&project_id, some_case("login check"))
            .expect("case should be created");
        let suite = store
            .create_test_suite(
                &project_id,
                NewTestSuite {
                    name: "Smoke tests".to_string(),
                    description: String::new(),
                    test_case_ids: vec![case.id.clone()],
                },
            )
            .expect("suite should be created");

        store.delete_test_case(&case.id);

        // The suite still lists the id; resolving it just yields nothing.
        let survivor = store.test_suite(&suite.id).expect("suite should remain");
        assert_eq!(survivor.test_case_ids, vec![case.id.clone()]);
        assert!(store.test_case(&case.id).is_none());
        assert!(store.cases_in_suite(&suite.id).is_empty());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (mut store, project_id) = store_with_project();
        store
            .create_test_case(&project_id, some_case("one"))
            .expect("case should be created");
        store
            .create_test_case(&project_id, some_case("two"))
            .expect("case should be created");

        store.delete_test_case("TC-001");
        let after_first: Vec<String> =
            store.test_cases().iter().map(|c| c.id.clone()).collect();

        store.delete_test_case("TC-001");
        let after_second: Vec<String> =
            store.test_cases().iter().map(|c| c.id.clone()).collect();

        assert_eq!(after_first, after_second);
        assert_eq!(after_first, vec!["TC-002".to_string()]);
    }

    #[test]
    fn test_archive_and_unarchive_round_trip() {
        let (mut store, project_id) = store_with_project();
        assert_eq!(store.visible_projects().len(), 1);

        let archived = store
            .archive_project(&project_id)
            .expect("archive should succeed");
        assert_eq!(archived.status, ProjectStatus::Archived);
        assert!(store.visible_projects().is_empty());
        assert_eq!(store.archived_projects().len(), 1);

        let restored = store
            .unarchive_project(&project_id)
            .expect("unarchive should succeed");
        assert_eq!(restored.status, ProjectStatus::Active);
        assert_eq!(store.visible_projects().len(), 1);
        assert!(store.archived_projects().is_empty());
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let mut store = EntityStore::new();
        let result = store.update_requirement(
            "REQ-099",
            "renamed".to_string(),
            "new description".to_string(),
        );
        assert!(matches!(result, Err(ActionError::NotFound { .. })));
    }

    #[test]
    fn test_requirement_ids_are_deduplicated() {
        let (mut store, project_id) = store_with_project();
        let mut input = some_case("covered twice");
        input.requirement_ids = vec![
            "REQ-001".to_string(),
            "REQ-002".to_string(),
            "REQ-001".to_string(),
        ];
        let case = store
            .create_test_case(&project_id, input)
            .expect("case should be created");
        assert_eq!(case.requirement_ids, vec!["REQ-001", "REQ-002"]);

        let updated = store
            .set_case_requirements(
                &case.id,
                vec!["REQ-003".to_string(), "REQ-003".to_string()],
            )
            .expect("update should succeed");
        assert_eq!(updated.requirement_ids, vec!["REQ-003"]);
    }

    #[test]
    fn test_project_slices_join_by_id_not_name() {
        let (mut store, first_id) = store_with_project();
        let second = store
            .create_project(NewProject {
                name: "Payment gateway API".to_string(),
                responsible: "Vince Porter".to_string(),
                completion_date: None,
            })
            .expect("project should be created");

        store
            .create_test_case(&first_id, some_case("portal case"))
            .expect("case should be created");
        store
            .create_test_case(&second.id, some_case("gateway case"))
            .expect("case should be created");

        assert_eq!(store.cases_for_project(&first_id).len(), 1);
        assert_eq!(store.cases_for_project(&second.id).len(), 1);

        // Renaming the project does not break the association.
        store
            .update_project(&first_id, "Portal relaunch".to_string(), None)
            .expect("update should succeed");
        assert_eq!(store.cases_for_project(&first_id).len(), 1);
    }

    #[test]
    fn test_case_label_uses_short_project_name() {
        let (mut store, project_id) = store_with_project();
        let case = store
            .create_test_case(&project_id, some_case("labelled"))
            .expect("case should be created");
        assert_eq!(case.project, "Client Portal");
    }

    #[test]
    fn test_blank_testers_are_dropped() {
        let (mut store, project_id) = store_with_project();
        let plan = store
            .create_test_plan(
                &project_id,
                NewTestPlan {
                    name: "Release plan".to_string(),
                    goal: "Verify the release".to_string(),
                    deadline: None,
                    requirement_ids: Vec::new(),
                    testers: vec![
                        "Irene Vaughn".to_string(),
                        "   ".to_string(),
                        "Tom Becker".to_string(),
                    ],
                    metrics: String::new(),
                },
            )
            .expect("plan should be created");
        assert_eq!(plan.testers, vec!["Irene Vaughn", "Tom Becker"]);
    }

    #[test]
    fn test_suite_members_resolve_in_order() {
        let (mut store, project_id) = store_with_project();
        let first = store
            .create_test_case(&project_id, some_case("first"))
            .expect("case should be created");
        let second = store
            .create_test_case(&project_id, some_case("second"))
            .expect("case should be created");
        let suite = store
            .create_test_suite(
                &project_id,
                NewTestSuite {
                    name: "Ordered".to_string(),
                    description: String::new(),
                    test_case_ids: vec![second.id.clone(), "TC-099".to_string(), first.id.clone()],
                },
            )
            .expect("suite should be created");

        let members = store.cases_in_suite(&suite.id);
        let names: Vec<&str> = members.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["second", "first"]);
    }

    #[test]
    fn test_report_search_matches_name_and_project() {
        let mut store = EntityStore::new();
        store.reports = vec![
            TestReport {
                id: "TR-001".to_string(),
                name: "Smoke run".to_string(),
                project: "Client Portal".to_string(),
                ran_at: Utc::now(),
                status: ReportStatus::Success,
                passed: 15,
                total: 15,
                duration: "12m 40s".to_string(),
            },
            TestReport {
                id: "TR-002".to_string(),
                name: "Regression run".to_string(),
                project: "Food Delivery".to_string(),
                ran_at: Utc::now(),
                status: ReportStatus::Failed,
                passed: 12,
                total: 18,
                duration: "43m 12s".to_string(),
            },
        ];

        let by_name = store.search_reports("smoke", None);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "TR-001");

        let by_project = store.search_reports("DELIVERY", None);
        assert_eq!(by_project.len(), 1);
        assert_eq!(by_project[0].id, "TR-002");

        let by_status = store.search_reports("", Some(ReportStatus::Failed));
        assert_eq!(by_status.len(), 1);
        assert_eq!(by_status[0].id, "TR-002");

        assert!(store
            .search_reports("smoke", Some(ReportStatus::Failed))
            .is_empty());
    }

    #[test]
    fn test_create_in_unknown_project_is_not_found() {
        let mut store = EntityStore::new();
        let result = store.create_test_case("PRJ-404", some_case("orphan"));
        assert!(matches!(result, Err(ActionError::NotFound { .. })));
        assert!(store.test_cases().is_empty());
    }
}
