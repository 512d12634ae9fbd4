use std::sync::Arc;

use tracing::info;

use crate::alert::{AlertConfirmation, AlertDispatcher, EmergencyKind, Notifier, TracingNotifier};
use crate::catalog::{Lesson, StaticCatalog};
use crate::dashboard::{
    LessonSummary, StudentDashboard, StudentTab, TeacherDashboard, TeacherTab,
};
use crate::error::Error;
use crate::progress::ProgressState;
use crate::report::{self, ProgressSummary};
use crate::session::{Role, Session};

/// Root of all runtime state: the session, and the dashboard belonging to
/// whichever role is signed in. There is exactly one of these per process
/// and it owns everything the UI can touch.
pub struct App {
    catalog: StaticCatalog,
    session: Session,
    student: Option<StudentDashboard>,
    teacher: Option<TeacherDashboard>,
    dispatcher: AlertDispatcher,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Arc::new(TracingNotifier))
    }
}

impl App {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            catalog: StaticCatalog::new(),
            session: Session::default(),
            student: None,
            teacher: None,
            dispatcher: AlertDispatcher::new(notifier),
        }
    }

    pub fn catalog(&self) -> &StaticCatalog {
        &self.catalog
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn select_role(&mut self, role: Role) -> Result<(), Error> {
        self.session.select_role(role)
    }

    pub fn back(&mut self) -> Result<(), Error> {
        self.session.back()
    }

    /// Sign in and hand the user a dashboard in its default state. Every
    /// login starts fresh; nothing carries over from earlier sessions.
    pub fn login(&mut self, name: &str, password: &str) -> Result<Role, Error> {
        let role = self.session.authenticate(name, password)?;
        match role {
            Role::Student => self.student = Some(StudentDashboard::new()),
            Role::Teacher => self.teacher = Some(TeacherDashboard::new()),
        }
        info!("{role} {name} signed in");
        Ok(role)
    }

    /// Sign out and discard all session-scoped state.
    pub fn logout(&mut self) {
        if let Session::Authenticated { role, name } = &self.session {
            info!("{role} {name} signed out");
        }
        self.session.logout();
        self.student = None;
        self.teacher = None;
    }

    pub fn student(&self) -> Result<&StudentDashboard, Error> {
        self.student.as_ref().ok_or(Error::RoleRequired(Role::Student))
    }

    fn student_mut(&mut self) -> Result<&mut StudentDashboard, Error> {
        self.student.as_mut().ok_or(Error::RoleRequired(Role::Student))
    }

    pub fn teacher(&self) -> Result<&TeacherDashboard, Error> {
        self.teacher.as_ref().ok_or(Error::RoleRequired(Role::Teacher))
    }

    fn teacher_mut(&mut self) -> Result<&mut TeacherDashboard, Error> {
        self.teacher.as_mut().ok_or(Error::RoleRequired(Role::Teacher))
    }

    // student operations

    pub fn list_lessons(&self) -> Result<Vec<LessonSummary>, Error> {
        Ok(self.student()?.list_lessons(&self.catalog))
    }

    pub fn open_lesson(&mut self, id: i64) -> Result<Option<Lesson>, Error> {
        let student = self.student.as_mut().ok_or(Error::RoleRequired(Role::Student))?;
        Ok(student.open_lesson(&self.catalog, id).cloned())
    }

    pub fn close_lesson(&mut self) -> Result<(), Error> {
        self.student_mut()?.close_lesson();
        Ok(())
    }

    pub fn play_video(&mut self) -> Result<(), Error> {
        self.student_mut()?.play_video()
    }

    pub fn pause_video(&mut self) -> Result<(), Error> {
        self.student_mut()?.pause_video()
    }

    pub fn complete_lesson(&mut self) -> Result<i64, Error> {
        let id = self.student_mut()?.complete_lesson()?;
        info!("lesson {id} completed");
        Ok(id)
    }

    pub fn select_student_tab(&mut self, tab: StudentTab) -> Result<(), Error> {
        self.student_mut()?.select_tab(tab);
        Ok(())
    }

    pub fn progress(&self) -> Result<&ProgressState, Error> {
        Ok(self.student()?.progress())
    }

    pub fn progress_summary(&self) -> Result<ProgressSummary, Error> {
        Ok(report::progress_summary(
            self.student()?.progress(),
            &self.catalog,
        ))
    }

    // teacher operations

    pub fn select_teacher_tab(&mut self, tab: TeacherTab) -> Result<(), Error> {
        self.teacher_mut()?.select_tab(tab);
        Ok(())
    }

    /// Simulated emergency broadcast; mutates nothing.
    pub fn send_alert(&self, kind: EmergencyKind) -> Result<AlertConfirmation, Error> {
        self.teacher()?;
        Ok(self.dispatcher.send(kind))
    }
}
