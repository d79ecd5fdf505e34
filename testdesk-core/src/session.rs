//! The session object renderers talk to.
//!
//! A `Session` owns the store, the navigator, the feedback channel, the
//! current-user selection and the screen-scoped selections (focused project,
//! detail tab, chosen suite). Every mutating operation goes through the same
//! path: authorization gate, store call, outcome onto the modal. Missing ids
//! on update/delete are dropped silently; deletes are idempotent and the
//! caller cannot tell a repeat from a first run.

use std::time::Duration;

use chrono::NaiveDate;

use crate::error::ActionError;
use crate::feedback::{Feedback, Modal, ModalKind};
use crate::models::{
    NewProject, NewRequirement, NewTestCase, NewTestPlan, NewTestSuite, NewUser, Project, Role,
    SystemUser, TestCase, TestPlan, TestSuite,
};
use crate::nav::{Navigator, Screen};
use crate::policy::{can_perform, EntityKind, Operation};
use crate::store::EntityStore;

/// Simulated delay reported by `logout`; nothing observable happens during it.
pub const LOGOUT_DELAY: Duration = Duration::from_millis(1500);

/// Sub-tab inside the project detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectTab {
    Cases,
    Suites,
    Plans,
}

impl ProjectTab {
    /// All tabs, in display order
    pub fn all() -> Vec<ProjectTab> {
        vec![ProjectTab::Cases, ProjectTab::Suites, ProjectTab::Plans]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectTab::Cases => "Test cases",
            ProjectTab::Suites => "Test suites",
            ProjectTab::Plans => "Test plans",
        }
    }
}

/// Read-only snapshot of the chrome a renderer needs every frame
#[derive(Debug)]
pub struct ViewState<'a> {
    pub screen: Screen,
    pub history_depth: usize,
    pub current_user: Option<&'a SystemUser>,
    pub role: Role,
    /// Whether the settings entry may be rendered for the current role
    pub settings_visible: bool,
    pub notification: Option<&'a str>,
    pub modal: Option<&'a Modal>,
}

/// Composes store, policy, navigation and feedback for one operator
#[derive(Debug)]
pub struct Session {
    store: EntityStore,
    nav: Navigator,
    feedback: Feedback,
    current_user_id: String,
    focused_project_id: Option<String>,
    project_tab: ProjectTab,
    selected_suite_id: Option<String>,
}

impl Session {
    /// Opens a session over `store`. The first registered user becomes the
    /// current one; with no users at all the session falls back to the
    /// reader role and the profile view renders nothing.
    pub fn new(store: EntityStore) -> Self {
        let current_user_id = store
            .users()
            .first()
            .map(|u| u.id.clone())
            .unwrap_or_default();
        Self {
            store,
            nav: Navigator::new(),
            feedback: Feedback::new(),
            current_user_id,
            focused_project_id: None,
            project_tab: ProjectTab::Cases,
            selected_suite_id: None,
        }
    }

    // ---- snapshots ----

    /// Read-only access to the entity collections.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// The screen currently shown.
    pub fn screen(&self) -> Screen {
        self.nav.current()
    }

    /// Navigation history length, current screen included.
    pub fn history_depth(&self) -> usize {
        self.nav.depth()
    }

    /// The user the session acts as.
    pub fn current_user(&self) -> Option<&SystemUser> {
        self.store.user(&self.current_user_id)
    }

    /// The acting role; reader when no user is selected.
    pub fn role(&self) -> Role {
        self.current_user().map(|u| u.role).unwrap_or(Role::Reader)
    }

    /// The chrome snapshot for the current frame.
    pub fn view(&self) -> ViewState<'_> {
        let role = self.role();
        ViewState {
            screen: self.nav.current(),
            history_depth: self.nav.depth(),
            current_user: self.current_user(),
            role,
            settings_visible: can_perform(&role, &Operation::ManageUsers),
            notification: self.feedback.notification(),
            modal: self.feedback.modal(),
        }
    }

    // ---- navigation ----

    /// Moves to `screen`. Settings is refused for roles that may not manage
    /// users; other screens are open to everyone. Screen-scoped selections
    /// reset on every move, matching views that rebuild from scratch.
    pub fn navigate_to(&mut self, screen: Screen) {
        if screen == Screen::Settings {
            if let Err(err) = self.gate(Operation::ManageUsers) {
                self.feedback.error(&err.to_string());
                return;
            }
        }
        self.nav.navigate_to(screen);
        self.reset_screen_state();
    }

    /// Steps back one screen in the history.
    pub fn go_back(&mut self) {
        self.nav.go_back();
        self.reset_screen_state();
    }

    fn reset_screen_state(&mut self) {
        self.focused_project_id = None;
        self.project_tab = ProjectTab::Cases;
    }

    // ---- project detail focus ----

    /// Opens a project's detail view. Unknown ids are ignored.
    pub fn open_project(&mut self, id: &str) {
        if self.store.project(id).is_none() {
            return;
        }
        self.focused_project_id = Some(id.to_string());
        self.project_tab = ProjectTab::Cases;
    }

    /// Leaves the detail view, back to the project list. This bypasses the
    /// global history stack.
    pub fn close_project(&mut self) {
        self.focused_project_id = None;
        self.project_tab = ProjectTab::Cases;
    }

    /// The project whose detail view is open, if any.
    pub fn focused_project(&self) -> Option<&Project> {
        self.focused_project_id
            .as_deref()
            .and_then(|id| self.store.project(id))
    }

    pub fn project_tab(&self) -> ProjectTab {
        self.project_tab
    }

    pub fn set_project_tab(&mut self, tab: ProjectTab) {
        self.project_tab = tab;
    }

    /// Test cases of the focused project.
    pub fn focused_cases(&self) -> Vec<&TestCase> {
        match self.focused_project_id.as_deref() {
            Some(id) => self.store.cases_for_project(id),
            None => Vec::new(),
        }
    }

    /// Test suites of the focused project.
    pub fn focused_suites(&self) -> Vec<&TestSuite> {
        match self.focused_project_id.as_deref() {
            Some(id) => self.store.suites_for_project(id),
            None => Vec::new(),
        }
    }

    /// Test plans of the focused project.
    pub fn focused_plans(&self) -> Vec<&TestPlan> {
        match self.focused_project_id.as_deref() {
            Some(id) => self.store.plans_for_project(id),
            None => Vec::new(),
        }
    }

    // ---- testing screen selection ----

    /// Chooses the suite the run-tests action targets, or clears the choice.
    pub fn select_suite(&mut self, id: Option<&str>) {
        self.selected_suite_id = id.map(|s| s.to_string());
    }

    /// The chosen suite, if it still exists. A selection left dangling by a
    /// later delete behaves like no selection.
    pub fn selected_suite(&self) -> Option<&TestSuite> {
        self.selected_suite_id
            .as_deref()
            .and_then(|id| self.store.test_suite(id))
    }

    // ---- feedback passthrough ----

    /// Posts a notification line.
    pub fn notify(&mut self, message: &str) {
        self.feedback.notify(message);
    }

    /// The notification currently within its window, if any.
    pub fn notification(&self) -> Option<&str> {
        self.feedback.notification()
    }

    pub fn show_modal(&mut self, message: &str, kind: ModalKind) {
        self.feedback.show_modal(message, kind);
    }

    /// The modal waiting for dismissal, if any.
    pub fn modal(&self) -> Option<&Modal> {
        self.feedback.modal()
    }

    pub fn dismiss_modal(&mut self) {
        self.feedback.dismiss_modal();
    }

    // ---- gate / report plumbing ----

    fn gate(&self, operation: Operation) -> Result<(), ActionError> {
        let role = self.role();
        if can_perform(&role, &operation) {
            Ok(())
        } else {
            Err(ActionError::Forbidden { role, operation })
        }
    }

    /// Funnels an operation outcome into the modal. Success posts the given
    /// message, validation and authorization failures post their own text,
    /// and a missing id stays silent.
    fn report<T>(&mut self, outcome: Result<T, ActionError>, success: &str) -> Option<T> {
        match outcome {
            Ok(value) => {
                self.feedback.success(success);
                Some(value)
            }
            Err(ActionError::NotFound { .. }) => None,
            Err(err) => {
                self.feedback.error(&err.to_string());
                None
            }
        }
    }

    // ---- project operations ----

    pub fn create_project(&mut self, new: NewProject) {
        let gate = self.gate(Operation::Create(EntityKind::Project));
        let outcome = gate.and_then(|_| self.store.create_project(new));
        self.report(outcome, "Project created");
    }

    pub fn update_project(&mut self, id: &str, name: String, completion_date: Option<NaiveDate>) {
        let gate = self.gate(Operation::Edit(EntityKind::Project));
        let outcome = gate.and_then(|_| self.store.update_project(id, name, completion_date));
        self.report(outcome, "Project updated");
    }

    pub fn archive_project(&mut self, id: &str) {
        let gate = self.gate(Operation::Archive(EntityKind::Project));
        let outcome = gate.and_then(|_| self.store.archive_project(id));
        self.report(outcome, "Project archived");
    }

    pub fn unarchive_project(&mut self, id: &str) {
        let gate = self.gate(Operation::Archive(EntityKind::Project));
        let outcome = gate.and_then(|_| self.store.unarchive_project(id));
        self.report(outcome, "Project restored");
    }

    pub fn delete_project(&mut self, id: &str) {
        if let Err(err) = self.gate(Operation::Delete(EntityKind::Project)) {
            self.feedback.error(&err.to_string());
            return;
        }
        if self.store.project(id).is_none() {
            return;
        }
        self.store.delete_project(id);
        if self.focused_project_id.as_deref() == Some(id) {
            self.close_project();
        }
        self.feedback.success("Project deleted");
    }

    // ---- requirement operations ----

    pub fn create_requirement(&mut self, new: NewRequirement) {
        let gate = self.gate(Operation::Create(EntityKind::Requirement));
        let outcome = gate.and_then(|_| self.store.create_requirement(new));
        self.report(outcome, "Requirement created");
    }

    pub fn update_requirement(&mut self, id: &str, name: String, description: String) {
        let gate = self.gate(Operation::Edit(EntityKind::Requirement));
        let outcome = gate.and_then(|_| self.store.update_requirement(id, name, description));
        self.report(outcome, "Requirement updated");
    }

    pub fn delete_requirement(&mut self, id: &str) {
        if let Err(err) = self.gate(Operation::Delete(EntityKind::Requirement)) {
            self.feedback.error(&err.to_string());
            return;
        }
        if self.store.requirement(id).is_none() {
            return;
        }
        self.store.delete_requirement(id);
        self.feedback.success("Requirement deleted");
    }

    // ---- test case operations ----

    pub fn create_test_case(&mut self, project_id: &str, new: NewTestCase) {
        let gate = self.gate(Operation::Create(EntityKind::TestCase));
        let outcome = gate.and_then(|_| self.store.create_test_case(project_id, new));
        self.report(outcome, "Test case created");
    }

    /// Replaces the requirements a test case covers.
    pub fn attach_requirements(&mut self, case_id: &str, requirement_ids: Vec<String>) {
        let gate = self.gate(Operation::Edit(EntityKind::TestCase));
        let outcome = gate.and_then(|_| self.store.set_case_requirements(case_id, requirement_ids));
        self.report(outcome, "Requirements attached");
    }

    pub fn delete_test_case(&mut self, id: &str) {
        if let Err(err) = self.gate(Operation::Delete(EntityKind::TestCase)) {
            self.feedback.error(&err.to_string());
            return;
        }
        if self.store.test_case(id).is_none() {
            return;
        }
        self.store.delete_test_case(id);
        self.feedback.success("Test case deleted");
    }

    // ---- test suite operations ----

    pub fn create_test_suite(&mut self, project_id: &str, new: NewTestSuite) {
        let gate = self.gate(Operation::Create(EntityKind::TestSuite));
        let outcome = gate.and_then(|_| self.store.create_test_suite(project_id, new));
        self.report(outcome, "Test suite created");
    }

    pub fn update_test_suite(
        &mut self,
        id: &str,
        name: String,
        description: String,
        test_case_ids: Vec<String>,
    ) {
        let gate = self.gate(Operation::Edit(EntityKind::TestSuite));
        let outcome =
            gate.and_then(|_| self.store.update_test_suite(id, name, description, test_case_ids));
        self.report(outcome, "Test suite updated");
    }

    pub fn delete_test_suite(&mut self, id: &str) {
        if let Err(err) = self.gate(Operation::Delete(EntityKind::TestSuite)) {
            self.feedback.error(&err.to_string());
            return;
        }
        if self.store.test_suite(id).is_none() {
            return;
        }
        self.store.delete_test_suite(id);
        self.feedback.success("Test suite deleted");
    }

    // ---- test plan operations ----

    pub fn create_test_plan(&mut self, project_id: &str, new: NewTestPlan) {
        let gate = self.gate(Operation::Create(EntityKind::TestPlan));
        let outcome = gate.and_then(|_| self.store.create_test_plan(project_id, new));
        self.report(outcome, "Test plan created");
    }

    pub fn delete_test_plan(&mut self, id: &str) {
        if let Err(err) = self.gate(Operation::Delete(EntityKind::TestPlan)) {
            self.feedback.error(&err.to_string());
            return;
        }
        if self.store.test_plan(id).is_none() {
            return;
        }
        self.store.delete_test_plan(id);
        self.feedback.success("Test plan deleted");
    }

    // ---- user operations ----

    pub fn add_user(&mut self, new: NewUser) {
        let gate = self.gate(Operation::Create(EntityKind::User));
        let outcome = gate.and_then(|_| self.store.create_user(new));
        self.report(outcome, "User added");
    }

    pub fn change_user_role(&mut self, id: &str, role: Role) {
        let gate = self.gate(Operation::Edit(EntityKind::User));
        let outcome = gate.and_then(|_| self.store.update_user_role(id, role));
        self.report(outcome, "User updated");
    }

    /// Removes a user. The account the session is acting as is protected.
    pub fn remove_user(&mut self, id: &str) {
        if let Err(err) = self.gate(Operation::Delete(EntityKind::User)) {
            self.feedback.error(&err.to_string());
            return;
        }
        if id == self.current_user_id {
            self.feedback.error("You cannot delete your own account");
            return;
        }
        if self.store.user(id).is_none() {
            return;
        }
        self.store.delete_user(id);
        self.feedback.success("User deleted");
    }

    /// Switches the acting user. Unknown ids are ignored.
    pub fn set_current_user(&mut self, id: &str) {
        if self.store.user(id).is_none() {
            return;
        }
        self.current_user_id = id.to_string();
        self.feedback.success("User switched");
    }

    // ---- named input events ----

    /// The help trigger: posts a notification, nothing else.
    pub fn open_help(&mut self) {
        self.feedback.notify("Help opened");
    }

    /// The run-tests trigger. A suite must be selected on the testing
    /// screen; execution itself is out of scope, so success is an
    /// acknowledgment only.
    pub fn run_tests(&mut self) {
        if self.selected_suite().is_some() {
            self.feedback.success("Testing started!");
        } else {
            self.feedback.error("Select a test suite before running");
        }
    }

    /// Signs the operator out: posts the success modal and reports the
    /// simulated delay the caller should wait before closing.
    pub fn logout(&mut self) -> Duration {
        self.feedback.success("You have signed out");
        LOGOUT_DELAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_store;

    fn admin_session() -> Session {
        Session::new(demo_store())
    }

    fn tester_session() -> Session {
        let mut session = admin_session();
        session.set_current_user("USR-004");
        session.dismiss_modal();
        session
    }

    #[test]
    fn test_first_seeded_user_is_current() {
        let session = admin_session();
        let user = session.current_user().expect("seed has users");
        assert_eq!(user.id, "USR-001");
        assert_eq!(session.role(), Role::Admin);
        assert!(session.view().settings_visible);
    }

    #[test]
    fn test_non_admin_cannot_mutate_users() {
        let mut session = tester_session();
        let before = session.store().users().len();

        session.add_user(NewUser {
            name: "Eve".to_string(),
            email: "eve@testdesk.io".to_string(),
            role: Role::Reader,
        });

        let modal = session.modal().expect("a modal should be shown");
        assert_eq!(modal.kind, ModalKind::Error);
        assert!(modal.message.contains("not allowed"));
        assert_eq!(session.store().users().len(), before);
    }

    #[test]
    fn test_non_admin_cannot_reach_settings() {
        let mut session = tester_session();
        assert!(!session.view().settings_visible);

        session.navigate_to(Screen::Settings);
        assert_eq!(session.screen(), Screen::Dashboard);
        let modal = session.modal().expect("a modal should be shown");
        assert_eq!(modal.kind, ModalKind::Error);
    }

    #[test]
    fn test_validation_error_reaches_the_modal() {
        let mut session = admin_session();
        let before = session.store().requirements().len();

        session.create_requirement(NewRequirement {
            name: "".to_string(),
            description: "unnamed".to_string(),
        });

        let modal = session.modal().expect("a modal should be shown");
        assert_eq!(modal.kind, ModalKind::Error);
        assert_eq!(modal.message, "Requirement name is required");
        assert_eq!(session.store().requirements().len(), before);
    }

    #[test]
    fn test_successful_mutation_posts_success() {
        let mut session = admin_session();
        session.create_requirement(NewRequirement {
            name: "Audit logging".to_string(),
            description: "Every mutation is recorded".to_string(),
        });

        let modal = session.modal().expect("a modal should be shown");
        assert_eq!(modal.kind, ModalKind::Success);
        assert_eq!(modal.message, "Requirement created");
        assert_eq!(session.store().requirements().len(), 4);
    }

    #[test]
    fn test_current_user_cannot_be_deleted() {
        let mut session = admin_session();
        let before = session.store().users().len();

        session.remove_user("USR-001");

        let modal = session.modal().expect("a modal should be shown");
        assert_eq!(modal.kind, ModalKind::Error);
        assert_eq!(modal.message, "You cannot delete your own account");
        assert_eq!(session.store().users().len(), before);
    }

    #[test]
    fn test_deleting_missing_id_stays_silent() {
        let mut session = admin_session();
        session.remove_user("USR-099");
        assert!(session.modal().is_none());

        session.delete_test_case("TC-099");
        assert!(session.modal().is_none());
    }

    #[test]
    fn test_admin_can_manage_users() {
        let mut session = admin_session();
        session.remove_user("USR-005");
        let modal = session.modal().expect("a modal should be shown");
        assert_eq!(modal.kind, ModalKind::Success);
        assert_eq!(session.store().users().len(), 4);

        session.change_user_role("USR-004", Role::Manager);
        let user = session.store().user("USR-004").expect("user exists");
        assert_eq!(user.role, Role::Manager);
    }

    #[test]
    fn test_back_returns_to_previous_screen() {
        let mut session = admin_session();
        session.navigate_to(Screen::Projects);
        session.navigate_to(Screen::Reports);
        session.go_back();

        let view = session.view();
        assert_eq!(view.screen, Screen::Projects);
        assert_eq!(view.history_depth, 2);
    }

    #[test]
    fn test_project_focus_is_screen_scoped() {
        let mut session = admin_session();
        session.navigate_to(Screen::Projects);
        session.open_project("PRJ-001");
        assert!(session.focused_project().is_some());
        assert_eq!(session.focused_cases().len(), 3);

        session.navigate_to(Screen::Dashboard);
        assert!(session.focused_project().is_none());
    }

    #[test]
    fn test_run_tests_requires_a_selected_suite() {
        let mut session = admin_session();
        session.run_tests();
        let modal = session.modal().expect("a modal should be shown");
        assert_eq!(modal.kind, ModalKind::Error);
        assert_eq!(modal.message, "Select a test suite before running");

        session.select_suite(Some("TS-001"));
        session.run_tests();
        let modal = session.modal().expect("a modal should be shown");
        assert_eq!(modal.kind, ModalKind::Success);
        assert_eq!(modal.message, "Testing started!");
    }

    #[test]
    fn test_dangling_suite_selection_counts_as_none() {
        let mut session = admin_session();
        session.select_suite(Some("TS-001"));
        session.delete_test_suite("TS-001");
        session.dismiss_modal();

        assert!(session.selected_suite().is_none());
        session.run_tests();
        let modal = session.modal().expect("a modal should be shown");
        assert_eq!(modal.kind, ModalKind::Error);
    }

    #[test]
    fn test_logout_reports_the_delay() {
        let mut session = admin_session();
        assert_eq!(session.logout(), LOGOUT_DELAY);
        let modal = session.modal().expect("a modal should be shown");
        assert_eq!(modal.kind, ModalKind::Success);
        assert_eq!(modal.message, "You have signed out");
    }

    #[test]
    fn test_help_goes_through_the_notification_channel() {
        let mut session = admin_session();
        session.open_help();
        assert_eq!(session.notification(), Some("Help opened"));
        assert!(session.modal().is_none());
    }

    #[test]
    fn test_attach_requirements_deduplicates() {
        let mut session = admin_session();
        session.attach_requirements(
            "TC-001",
            vec![
                "REQ-002".to_string(),
                "REQ-002".to_string(),
                "REQ-003".to_string(),
            ],
        );

        let modal = session.modal().expect("a modal should be shown");
        assert_eq!(modal.message, "Requirements attached");
        let case = session.store().test_case("TC-001").expect("case exists");
        assert_eq!(case.requirement_ids, vec!["REQ-002", "REQ-003"]);
    }

    #[test]
    fn test_deleting_the_focused_project_closes_the_detail() {
        let mut session = admin_session();
        session.navigate_to(Screen::Projects);
        session.open_project("PRJ-002");
        session.delete_project("PRJ-002");

        assert!(session.focused_project().is_none());
        let modal = session.modal().expect("a modal should be shown");
        assert_eq!(modal.message, "Project deleted");
    }
}
