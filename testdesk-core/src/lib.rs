//! Core state and rules for the testdesk test-management dashboard.
//!
//! Everything lives in memory for the lifetime of the process: an entity
//! store with sequential string ids and no cascading deletes, a coarse
//! role-based authorization policy, a history-stack navigator, a transient
//! feedback channel, and the session object that composes them for a
//! rendering layer.

pub mod error;
pub mod export;
pub mod feedback;
pub mod models;
pub mod nav;
pub mod policy;
pub mod seed;
pub mod session;
pub mod store;

pub use error::ActionError;
pub use export::{export_json, export_yaml};
pub use feedback::{Feedback, Modal, ModalKind, NOTIFICATION_WINDOW};
pub use models::{
    CaseStatus, NewProject, NewRequirement, NewTestCase, NewTestPlan, NewTestSuite, NewUser,
    Project, ProjectStatus, ReportStatus, Requirement, Role, SystemUser, TestCase, TestPlan,
    TestReport, TestSuite,
};
pub use nav::{Navigator, Screen};
pub use policy::{can_perform, EntityKind, Operation};
pub use seed::demo_store;
pub use session::{ProjectTab, Session, ViewState, LOGOUT_DELAY};
pub use store::EntityStore;
