use crate::session::Role;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("name and password must not be empty")]
    EmptyCredentials,
    #[error("cannot {action} while {state}")]
    BadTransition {
        action: &'static str,
        state: &'static str,
    },
    #[error("no {0} is signed in")]
    RoleRequired(Role),
    #[error("no lesson is open")]
    NoLessonOpen,
    #[error("the lesson video has not been played")]
    VideoNotPlayed,
    #[error("poster asset unavailable: {0}")]
    Asset(#[from] std::io::Error),
}
