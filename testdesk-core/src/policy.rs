//! Role-based authorization for mutating operations.
//!
//! The matrix is deliberately coarse: only user management is restricted,
//! every other role/operation combination is allowed. That is the documented
//! contract of the dashboard, not a gap to tighten here.

use std::fmt;

use crate::models::Role;

/// Entity families the policy distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Project,
    Requirement,
    TestCase,
    TestSuite,
    TestPlan,
    User,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Project => write!(f, "project"),
            EntityKind::Requirement => write!(f, "requirement"),
            EntityKind::TestCase => write!(f, "test case"),
            EntityKind::TestSuite => write!(f, "test suite"),
            EntityKind::TestPlan => write!(f, "test plan"),
            EntityKind::User => write!(f, "user"),
        }
    }
}

/// A mutating operation a role may or may not perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create(EntityKind),
    Edit(EntityKind),
    Delete(EntityKind),
    Archive(EntityKind),
    ManageUsers,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create(kind) => write!(f, "create a {}", kind),
            Operation::Edit(kind) => write!(f, "edit a {}", kind),
            Operation::Delete(kind) => write!(f, "delete a {}", kind),
            Operation::Archive(kind) => write!(f, "archive a {}", kind),
            Operation::ManageUsers => write!(f, "manage users"),
        }
    }
}

/// Returns whether `role` is allowed to perform `operation`.
///
/// User records and the settings screen belong to administrators; everything
/// else is open to every role.
pub fn can_perform(role: &Role, operation: &Operation) -> bool {
    match operation {
        Operation::ManageUsers => *role == Role::Admin,
        Operation::Create(EntityKind::User)
        | Operation::Edit(EntityKind::User)
        | Operation::Delete(EntityKind::User)
        | Operation::Archive(EntityKind::User) => *role == Role::Admin,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_admin_manages_users() {
        assert!(can_perform(&Role::Admin, &Operation::ManageUsers));
        for role in [Role::Manager, Role::TestAnalyst, Role::Tester, Role::Reader] {
            assert!(!can_perform(&role, &Operation::ManageUsers));
            assert!(!can_perform(&role, &Operation::Create(EntityKind::User)));
            assert!(!can_perform(&role, &Operation::Edit(EntityKind::User)));
            assert!(!can_perform(&role, &Operation::Delete(EntityKind::User)));
        }
    }

    #[test]
    fn test_everything_else_is_unrestricted() {
        let kinds = [
            EntityKind::Project,
            EntityKind::Requirement,
            EntityKind::TestCase,
            EntityKind::TestSuite,
            EntityKind::TestPlan,
        ];
        for role in Role::all() {
            for kind in kinds {
                assert!(can_perform(&role, &Operation::Create(kind)));
                assert!(can_perform(&role, &Operation::Edit(kind)));
                assert!(can_perform(&role, &Operation::Delete(kind)));
                assert!(can_perform(&role, &Operation::Archive(kind)));
            }
        }
    }

    #[test]
    fn test_operation_descriptions() {
        assert_eq!(Operation::ManageUsers.to_string(), "manage users");
        assert_eq!(
            Operation::Delete(EntityKind::TestCase).to_string(),
            "delete a test case"
        );
    }
}
