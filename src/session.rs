use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Teacher,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Teacher => write!(f, "teacher"),
        }
    }
}

/// Identity of the single active user.
///
/// Mirrors the two-step login screen: pick a role first, then submit
/// credentials. Credentials are only checked for presence, never validity,
/// and the password is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    RoleSelected(Role),
    Authenticated {
        role: Role,
        name: String,
    },
}

impl Session {
    pub fn select_role(&mut self, role: Role) -> Result<(), Error> {
        match self {
            Session::Anonymous => {
                *self = Session::RoleSelected(role);
                Ok(())
            }
            _ => Err(Error::BadTransition {
                action: "select a role",
                state: self.state_name(),
            }),
        }
    }

    /// Any non-empty name/password pair signs the user in.
    /// Empty fields block the submission and leave the state untouched.
    pub fn authenticate(&mut self, name: &str, password: &str) -> Result<Role, Error> {
        let Session::RoleSelected(role) = *self else {
            return Err(Error::BadTransition {
                action: "sign in",
                state: self.state_name(),
            });
        };
        if name.is_empty() || password.is_empty() {
            return Err(Error::EmptyCredentials);
        }
        *self = Session::Authenticated {
            role,
            name: name.to_string(),
        };
        Ok(role)
    }

    /// Leave the credential form and return to the role picker.
    pub fn back(&mut self) -> Result<(), Error> {
        match self {
            Session::RoleSelected(_) => {
                *self = Session::Anonymous;
                Ok(())
            }
            _ => Err(Error::BadTransition {
                action: "go back",
                state: self.state_name(),
            }),
        }
    }

    /// Always lands in `Anonymous`, whatever the current state.
    pub fn logout(&mut self) {
        *self = Session::Anonymous;
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Session::Anonymous => None,
            Session::RoleSelected(role) => Some(*role),
            Session::Authenticated { role, .. } => Some(*role),
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        match self {
            Session::Authenticated { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    fn state_name(&self) -> &'static str {
        match self {
            Session::Anonymous => "anonymous",
            Session::RoleSelected(_) => "on the credential form",
            Session::Authenticated { .. } => "signed in",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_succeeds_for_any_non_empty_credentials() {
        for role in [Role::Student, Role::Teacher] {
            let mut session = Session::default();
            session.select_role(role).unwrap();
            assert_eq!(session.authenticate("Riley", "hunter2").unwrap(), role);
            assert_eq!(
                session,
                Session::Authenticated {
                    role,
                    name: "Riley".to_string()
                }
            );
        }
    }

    #[test]
    fn empty_fields_block_submission_without_changing_state() {
        let mut session = Session::default();
        session.select_role(Role::Student).unwrap();

        assert!(matches!(
            session.authenticate("", "pw"),
            Err(Error::EmptyCredentials)
        ));
        assert!(matches!(
            session.authenticate("Riley", ""),
            Err(Error::EmptyCredentials)
        ));
        assert_eq!(session, Session::RoleSelected(Role::Student));
    }

    #[test]
    fn logout_always_clears_to_anonymous() {
        let mut session = Session::default();
        session.logout();
        assert_eq!(session, Session::Anonymous);

        session.select_role(Role::Teacher).unwrap();
        session.logout();
        assert_eq!(session, Session::Anonymous);

        session.select_role(Role::Teacher).unwrap();
        session.authenticate("Ms. Park", "pw").unwrap();
        session.logout();
        assert_eq!(session, Session::Anonymous);
    }

    #[test]
    fn back_returns_to_the_role_picker() {
        let mut session = Session::default();
        session.select_role(Role::Student).unwrap();
        session.back().unwrap();
        assert_eq!(session, Session::Anonymous);
        assert!(session.back().is_err());
    }

    #[test]
    fn no_other_transitions_exist() {
        let mut session = Session::default();
        assert!(session.authenticate("Riley", "pw").is_err());

        session.select_role(Role::Student).unwrap();
        assert!(session.select_role(Role::Teacher).is_err());

        session.authenticate("Riley", "pw").unwrap();
        assert!(session.select_role(Role::Teacher).is_err());
        assert!(session.authenticate("Riley", "pw").is_err());
        assert!(session.back().is_err());
    }

    #[test]
    fn accessors_follow_the_state() {
        let mut session = Session::default();
        assert_eq!(session.role(), None);
        assert_eq!(session.display_name(), None);
        assert!(!session.is_authenticated());

        session.select_role(Role::Student).unwrap();
        assert_eq!(session.role(), Some(Role::Student));
        assert!(!session.is_authenticated());

        session.authenticate("Riley", "pw").unwrap();
        assert_eq!(session.display_name(), Some("Riley"));
        assert!(session.is_authenticated());
    }
}
