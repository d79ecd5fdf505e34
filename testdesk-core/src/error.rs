use thiserror::Error;

use crate::models::Role;
use crate::policy::Operation;

/// Failure modes of user-triggered operations.
///
/// Nothing here is fatal: validation and authorization failures are surfaced
/// back to the user as an error message, and missing ids on update/delete are
/// swallowed as no-ops because deletes are idempotent and dangling references
/// are expected.
#[derive(Debug, Error)]
pub enum ActionError {
    /// A required field was empty on create or edit
    #[error("{0}")]
    Validation(String),

    /// The current role may not perform the operation
    #[error("role {role} is not allowed to {operation}")]
    Forbidden { role: Role, operation: Operation },

    /// A referenced id does not exist
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },
}

impl ActionError {
    pub(crate) fn required(field: &str) -> Self {
        ActionError::Validation(format!("{} is required", field))
    }

    pub(crate) fn not_found(kind: &'static str, id: &str) -> Self {
        ActionError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::EntityKind;

    #[test]
    fn test_messages_are_user_facing() {
        let err = ActionError::required("Project name");
        assert_eq!(err.to_string(), "Project name is required");

        let err = ActionError::Forbidden {
            role: Role::Tester,
            operation: Operation::Create(EntityKind::User),
        };
        assert_eq!(err.to_string(), "role Tester is not allowed to create a user");

        let err = ActionError::not_found("test case", "TC-099");
        assert_eq!(err.to_string(), "test case TC-099 not found");
    }
}
