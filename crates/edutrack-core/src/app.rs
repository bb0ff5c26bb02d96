//! Application shell.
//!
//! [`App`] owns the screen states, the repositories, the clock and the
//! simulated backend latency. Callers dispatch screen actions; the app runs
//! the pure reducers, waits where the mock backend would, follows up with
//! the confirming action and commits the result to the repositories.
//!
//! Task changes are diffed before/after each dispatch. A task whose
//! completion flipped awards or revokes its XP on the signed-in user, no
//! matter whether the flip came from a direct toggle, a subtask toggle or a
//! subtask list edit.

use chrono::{DateTime, FixedOffset, Utc};

use crate::clock::{Clock, Delay};
use crate::config::Config;
use crate::error::{CoreError, Result};
use crate::events::Event;
use crate::gamification::XpCalculator;
use crate::model::{new_id, Notification, Subject, Task, User};
use crate::repository::{
    fixtures, InMemoryNotifications, InMemorySession, InMemorySubjects, InMemoryTasks,
    NotificationRepository, SessionProvider, SubjectRepository, TaskRepository,
};
use crate::screens::calendar::{self, CalendarAction, CalendarState};
use crate::screens::home::{self, HomeAction, HomeSnapshot, HomeState};
use crate::screens::login::{self, credentials_match, LoginAction, LoginState};
use crate::screens::notifications::{self, NotificationsAction, NotificationsState};
use crate::screens::profile::{self, ProfileAction, ProfileState};
use crate::screens::recovery::{self, RecoveryAction, RecoveryState};
use crate::screens::register::{self, RegisterAction, RegisterState};
use crate::screens::subjects::{self, SubjectsAction, SubjectsState};
use crate::screens::tasks::{self, TasksAction, TasksState};
use crate::task::TaskTransition;

/// Storage the app runs against.
pub struct Repositories {
    pub session: Box<dyn SessionProvider>,
    pub tasks: Box<dyn TaskRepository>,
    pub subjects: Box<dyn SubjectRepository>,
    pub notifications: Box<dyn NotificationRepository>,
}

impl Repositories {
    /// In-memory storage seeded with the demo data, positioned around `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Repositories {
            session: Box::new(InMemorySession::new(None)),
            tasks: Box::new(InMemoryTasks::new(fixtures::tasks(now))),
            subjects: Box::new(InMemorySubjects::new(fixtures::subjects(
                fixtures::DEMO_USER_ID,
            ))),
            notifications: Box::new(InMemoryNotifications::new(fixtures::notifications(now))),
        }
    }
}

pub struct App {
    config: Config,
    xp: XpCalculator,
    clock: Box<dyn Clock>,
    delay: Box<dyn Delay>,
    repos: Repositories,
    events: Vec<Event>,

    login: LoginState,
    register: RegisterState,
    recovery: RecoveryState,
    home: Option<HomeState>,
    profile: Option<ProfileState>,
    tasks: TasksState,
    calendar: CalendarState,
    subjects: SubjectsState,
    notifications: NotificationsState,
}

impl App {
    /// App over the seeded in-memory storage. Nobody is signed in.
    pub fn new(config: Config, clock: Box<dyn Clock>, delay: Box<dyn Delay>) -> Result<Self> {
        let repos = Repositories::seeded(clock.now());
        Self::with_repositories(config, clock, delay, repos)
    }

    pub fn with_repositories(
        config: Config,
        clock: Box<dyn Clock>,
        delay: Box<dyn Delay>,
        repos: Repositories,
    ) -> Result<Self> {
        let offset = config.calendar.utc_offset_minutes;
        let today = clock.now().with_timezone(&config.calendar.offset()).date_naive();
        let mut app = App {
            xp: XpCalculator::with_config(config.gamification.clone()),
            login: LoginState::default(),
            register: RegisterState::default(),
            recovery: RecoveryState::default(),
            home: None,
            profile: None,
            tasks: TasksState::new(offset),
            calendar: CalendarState::new(today, offset),
            subjects: SubjectsState::default(),
            notifications: NotificationsState::default(),
            events: Vec::new(),
            config,
            clock,
            delay,
            repos,
        };
        app.reload()?;
        Ok(app)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn xp(&self) -> &XpCalculator {
        &self.xp
    }

    pub fn current_user(&self) -> Option<User> {
        self.repos.session.current_user()
    }

    pub fn is_logged_in(&self) -> bool {
        self.repos.session.is_logged_in()
    }

    pub fn login(&self) -> &LoginState {
        &self.login
    }

    pub fn register(&self) -> &RegisterState {
        &self.register
    }

    pub fn recovery(&self) -> &RecoveryState {
        &self.recovery
    }

    pub fn home(&self) -> Option<&HomeState> {
        self.home.as_ref()
    }

    pub fn profile(&self) -> Option<&ProfileState> {
        self.profile.as_ref()
    }

    pub fn tasks(&self) -> &TasksState {
        &self.tasks
    }

    pub fn calendar(&self) -> &CalendarState {
        &self.calendar
    }

    pub fn subjects(&self) -> &SubjectsState {
        &self.subjects
    }

    pub fn notifications(&self) -> &NotificationsState {
        &self.notifications
    }

    /// Take the events produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    fn now_local(&self) -> DateTime<FixedOffset> {
        self.clock.now().with_timezone(&self.config.calendar.offset())
    }

    // ── Auth ────────────────────────────────────────────────────────

    pub fn dispatch_login(&mut self, action: LoginAction) -> Result<&LoginState> {
        let submitting = matches!(action, LoginAction::Submit);
        self.login = login::reduce(&self.login, action);
        if !(submitting && self.login.is_loading) {
            return Ok(&self.login);
        }

        self.delay.wait(self.config.delays.login());
        let accepted = credentials_match(&self.login, &self.config.auth);
        self.login = login::reduce(&self.login, LoginAction::Resolved { accepted });
        let at = self.clock.now();
        if accepted {
            let user = fixtures::demo_user();
            tracing::info!(user_id = %user.id, "login succeeded");
            self.events.push(Event::LoginSucceeded {
                user_id: user.id.clone(),
                at,
            });
            self.sign_in(user)?;
        } else {
            tracing::warn!(email = %self.login.email, "login rejected");
            self.events.push(Event::LoginFailed {
                email: self.login.email.clone(),
                at,
            });
        }
        Ok(&self.login)
    }

    pub fn dispatch_register(&mut self, action: RegisterAction) -> Result<&RegisterState> {
        let submitting = matches!(action, RegisterAction::Submit);
        self.register = register::reduce(&self.register, action);
        if submitting && self.register.is_loading {
            self.delay.wait(self.config.delays.register());
            self.register = register::reduce(&self.register, RegisterAction::Completed);
            tracing::info!(email = %self.register.email, "account registered");
            self.events.push(Event::Registered {
                email: self.register.email.clone(),
                at: self.clock.now(),
            });
        }
        Ok(&self.register)
    }

    pub fn dispatch_recovery(&mut self, action: RecoveryAction) -> Result<&RecoveryState> {
        let submitting = matches!(action, RecoveryAction::Submit);
        self.recovery = recovery::reduce(&self.recovery, action);
        if submitting && self.recovery.is_loading {
            self.delay.wait(self.config.delays.recovery());
            self.recovery = recovery::reduce(&self.recovery, RecoveryAction::Completed);
            self.events.push(Event::RecoveryRequested {
                email: self.recovery.email.clone(),
                at: self.clock.now(),
            });
        }
        Ok(&self.recovery)
    }

    /// Put `user` in the session and load every screen for them.
    pub fn sign_in(&mut self, user: User) -> Result<()> {
        self.profile = Some(ProfileState::new(user.clone()));
        self.repos.session.set_current_user(Some(user));
        self.reload()
    }

    pub fn logout(&mut self) {
        self.repos.session.set_current_user(None);
        self.home = None;
        self.profile = None;
        self.login = LoginState::default();
        tracing::info!("logged out");
        self.events.push(Event::LoggedOut {
            at: self.clock.now(),
        });
    }

    // ── Profile ─────────────────────────────────────────────────────

    pub fn dispatch_profile(&mut self, action: ProfileAction) -> Result<&ProfileState> {
        let saving = matches!(action, ProfileAction::Save);
        let state = self.profile.as_ref().ok_or(CoreError::NotSignedIn)?;
        let mut next = profile::reduce(state, action);
        if saving && next.is_saving {
            self.delay.wait(self.config.delays.profile_save());
            next = profile::reduce(&next, ProfileAction::Saved);
            if next.save_success {
                self.repos.session.set_current_user(Some(next.user.clone()));
                self.events.push(Event::ProfileSaved {
                    user_id: next.user.id.clone(),
                    at: self.clock.now(),
                });
            }
        }
        self.profile = Some(next);
        self.refresh_home()?;
        self.profile.as_ref().ok_or(CoreError::NotSignedIn)
    }

    // ── Tasks ───────────────────────────────────────────────────────

    pub fn dispatch_tasks(&mut self, action: TasksAction) -> Result<&TasksState> {
        let before = self.tasks.tasks.clone();
        let submit = match action {
            TasksAction::SubmitCreate => Some(true),
            TasksAction::SubmitUpdate => Some(false),
            _ => None,
        };
        self.tasks = tasks::reduce(&self.tasks, action);

        if let Some(creating) = submit.filter(|_| self.tasks.is_loading) {
            self.delay.wait(self.config.delays.task_save());
            let xp_reward = self.xp.xp_reward(self.tasks.editor.priority);
            let confirm = if creating {
                TasksAction::CreateConfirmed {
                    id: new_id(),
                    xp_reward,
                }
            } else {
                TasksAction::UpdateConfirmed {
                    now: self.clock.now(),
                    xp_reward,
                }
            };
            self.tasks = tasks::reduce(&self.tasks, confirm);
        }

        if self.tasks.tasks != before {
            self.commit_tasks(&before)?;
        }
        Ok(&self.tasks)
    }

    pub fn show_create_task(&mut self) -> Result<&TasksState> {
        let now = self.clock.now();
        self.dispatch_tasks(TasksAction::ShowCreate { now })
    }

    pub fn toggle_task(&mut self, id: &str) -> Result<&TasksState> {
        let now = self.clock.now();
        self.dispatch_tasks(TasksAction::ToggleTask {
            id: id.to_string(),
            now,
        })
    }

    pub fn toggle_subtask(&mut self, task_id: &str, subtask_id: &str) -> Result<&TasksState> {
        let now = self.clock.now();
        self.dispatch_tasks(TasksAction::ToggleSubtask {
            task_id: task_id.to_string(),
            subtask_id: subtask_id.to_string(),
            now,
        })
    }

    pub fn save_subtasks(&mut self) -> Result<&TasksState> {
        let now = self.clock.now();
        self.dispatch_tasks(TasksAction::SaveSubtasks { now })
    }

    /// Write changed tasks back, settle XP and refresh dependent screens.
    fn commit_tasks(&mut self, before: &[Task]) -> Result<()> {
        let at = self.clock.now();
        let after = self.tasks.tasks.clone();

        for task in &after {
            let previous = before.iter().find(|t| t.id == task.id);
            if previous == Some(task) {
                continue;
            }
            self.repos.tasks.save_task(task.clone())?;
            let Some(previous) = previous else {
                self.events.push(Event::TaskCreated {
                    task_id: task.id.clone(),
                    at,
                });
                continue;
            };
            let transition = TaskTransition::between(previous, task);
            match transition {
                TaskTransition::Completed { xp_reward } => {
                    tracing::info!(task_id = %task.id, xp_reward, "task completed");
                    self.events.push(Event::TaskCompleted {
                        task_id: task.id.clone(),
                        xp_reward,
                        at,
                    });
                }
                TaskTransition::Reopened { xp_reward } => {
                    tracing::info!(task_id = %task.id, xp_reward, "task reopened");
                    self.events.push(Event::TaskReopened {
                        task_id: task.id.clone(),
                        xp_reward,
                        at,
                    });
                }
                TaskTransition::Unchanged => {
                    self.events.push(Event::TaskUpdated {
                        task_id: task.id.clone(),
                        at,
                    });
                    // Re-pricing a completed task settles the difference.
                    if task.completed && previous.xp_reward != task.xp_reward {
                        let delta = i64::from(task.xp_reward) - i64::from(previous.xp_reward);
                        self.change_xp(delta, at);
                    }
                }
            }
            self.settle_xp(transition, at);
        }

        for task in before {
            if !after.iter().any(|t| t.id == task.id) && self.repos.tasks.delete_task(&task.id)? {
                self.events.push(Event::TaskDeleted {
                    task_id: task.id.clone(),
                    at,
                });
            }
        }

        self.calendar = calendar::reduce(&self.calendar, CalendarAction::TasksLoaded(after));
        self.refresh_home()
    }

    fn settle_xp(&mut self, transition: TaskTransition, at: DateTime<Utc>) {
        match transition {
            TaskTransition::Completed { xp_reward } => self.change_xp(i64::from(xp_reward), at),
            TaskTransition::Reopened { xp_reward } => self.change_xp(-i64::from(xp_reward), at),
            TaskTransition::Unchanged => {}
        }
    }

    /// Award (positive) or revoke (negative) XP on the session user.
    fn change_xp(&mut self, delta: i64, at: DateTime<Utc>) {
        if delta == 0 {
            return;
        }
        let Some(user) = self.repos.session.current_user() else {
            return;
        };
        let amount = u32::try_from(delta.unsigned_abs()).unwrap_or(u32::MAX);
        let user = if delta > 0 {
            self.xp.award_xp(&user, amount)
        } else {
            self.xp.revoke_xp(&user, amount)
        };
        self.events.push(Event::XpChanged {
            user_id: user.id.clone(),
            current_xp: user.current_xp,
            total_xp: user.total_xp,
            level_up_pending: self.xp.level_up_pending(&user),
            at,
        });
        if let Some(state) = &self.profile {
            self.profile = Some(profile::reduce(state, ProfileAction::UserLoaded(user.clone())));
        }
        self.repos.session.set_current_user(Some(user));
    }

    // ── Calendar, subjects, notifications ──────────────────────────

    pub fn dispatch_calendar(&mut self, action: CalendarAction) -> &CalendarState {
        self.calendar = calendar::reduce(&self.calendar, action);
        &self.calendar
    }

    pub fn dispatch_subjects(&mut self, action: SubjectsAction) -> Result<&SubjectsState> {
        let before = self.subjects.subjects.clone();
        self.subjects = subjects::reduce(&self.subjects, action);
        if self.subjects.subjects != before {
            self.commit_subjects(&before)?;
            self.refresh_home()?;
        }
        Ok(&self.subjects)
    }

    fn commit_subjects(&mut self, before: &[Subject]) -> Result<()> {
        let at = self.clock.now();
        for subject in &self.subjects.subjects {
            if before.iter().any(|s| s == subject) {
                continue;
            }
            self.repos.subjects.save_subject(subject.clone())?;
            self.events.push(Event::SubjectSaved {
                subject_id: subject.id.clone(),
                at,
            });
        }
        for subject in before {
            let kept = self.subjects.subjects.iter().any(|s| s.id == subject.id);
            if !kept && self.repos.subjects.delete_subject(&subject.id)? {
                self.events.push(Event::SubjectDeleted {
                    subject_id: subject.id.clone(),
                    at,
                });
            }
        }
        Ok(())
    }

    pub fn dispatch_notifications(
        &mut self,
        action: NotificationsAction,
    ) -> Result<&NotificationsState> {
        let before = self.notifications.notifications.clone();
        self.notifications = notifications::reduce(&self.notifications, action);
        let at = self.clock.now();
        let changed: Vec<Notification> = self
            .notifications
            .notifications
            .iter()
            .filter(|n| !before.contains(n))
            .cloned()
            .collect();
        for notification in changed {
            let newly_read = notification.read
                && before
                    .iter()
                    .any(|b| b.id == notification.id && !b.read);
            if newly_read {
                self.events.push(Event::NotificationRead {
                    notification_id: notification.id.clone(),
                    at,
                });
            }
            self.repos.notifications.save_notification(notification)?;
        }
        Ok(&self.notifications)
    }

    // ── Banners and reloads ────────────────────────────────────────

    /// Wait out the banner delay, then hide every success banner.
    pub fn expire_banners(&mut self) {
        self.delay.wait(self.config.delays.banner());
        self.tasks = tasks::reduce(&self.tasks, TasksAction::ClearSuccess);
        self.recovery = recovery::reduce(&self.recovery, RecoveryAction::ClearSuccess);
        if let Some(state) = &self.profile {
            self.profile = Some(profile::reduce(state, ProfileAction::DismissSuccess));
        }
    }

    /// Load every list screen from the repositories.
    pub fn reload(&mut self) -> Result<()> {
        let task_list = self.repos.tasks.list_tasks()?;
        self.tasks = tasks::reduce(&self.tasks, TasksAction::Loaded(task_list.clone()));
        self.calendar = calendar::reduce(&self.calendar, CalendarAction::TasksLoaded(task_list));
        self.subjects = subjects::reduce(
            &self.subjects,
            SubjectsAction::Loaded(self.repos.subjects.list_subjects()?),
        );
        self.notifications = notifications::reduce(
            &self.notifications,
            NotificationsAction::Loaded(self.repos.notifications.list_notifications()?),
        );
        self.refresh_home()
    }

    fn refresh_home(&mut self) -> Result<()> {
        let Some(user) = self.repos.session.current_user() else {
            self.home = None;
            return Ok(());
        };
        let snapshot = HomeSnapshot {
            user,
            tasks: self.repos.tasks.list_tasks()?,
            subjects: self.repos.subjects.list_subjects()?,
            now: self.now_local(),
        };
        self.home = Some(match &self.home {
            Some(state) => home::reduce(state, HomeAction::Refresh(snapshot), &self.xp),
            None => HomeState::build(snapshot, &self.xp),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{FixedClock, NoDelay, RecordingDelay};
    use chrono::TimeZone;
    use std::rc::Rc;
    use std::time::Duration;

    fn monday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 12, 9, 0, 0).unwrap()
    }

    fn app() -> App {
        App::new(
            Config::default(),
            Box::new(FixedClock::new(monday())),
            Box::new(NoDelay),
        )
        .unwrap()
    }

    fn signed_in() -> App {
        let mut app = app();
        app.sign_in(fixtures::demo_user()).unwrap();
        app
    }

    #[test]
    fn starts_signed_out_with_lists_loaded() {
        let app = app();
        assert!(!app.is_logged_in());
        assert!(app.home().is_none());
        assert_eq!(app.tasks().tasks.len(), 4);
        assert_eq!(app.notifications().unread_count, 2);
    }

    #[test]
    fn login_waits_then_signs_in() {
        let delay = Rc::new(RecordingDelay::new());
        let mut app = App::new(
            Config::default(),
            Box::new(FixedClock::new(monday())),
            Box::new(Rc::clone(&delay)),
        )
        .unwrap();

        app.dispatch_login(LoginAction::EmailChanged("alex@upp.edu.mx".into()))
            .unwrap();
        app.dispatch_login(LoginAction::PasswordChanged("123456".into()))
            .unwrap();
        let state = app.dispatch_login(LoginAction::Submit).unwrap();
        assert!(state.login_success);
        assert!(!state.is_loading);
        assert_eq!(delay.waits(), vec![Duration::from_millis(2000)]);
        assert!(app.is_logged_in());
        assert_eq!(app.home().unwrap().user.current_xp, 350);
    }

    #[test]
    fn wrong_password_is_rejected() {
        let mut app = app();
        app.dispatch_login(LoginAction::EmailChanged("alex@upp.edu.mx".into()))
            .unwrap();
        app.dispatch_login(LoginAction::PasswordChanged("654321".into()))
            .unwrap();
        let state = app.dispatch_login(LoginAction::Submit).unwrap();
        assert_eq!(state.error_message.as_deref(), Some(login::LOGIN_FAILED));
        assert!(!app.is_logged_in());
        let events = app.drain_events();
        assert!(matches!(events.as_slice(), [Event::LoginFailed { .. }]));
    }

    #[test]
    fn completing_last_subtask_awards_xp_once() {
        let mut app = signed_in();
        app.toggle_subtask("2", "1").unwrap();
        assert_eq!(app.current_user().unwrap().current_xp, 350);

        app.toggle_subtask("2", "2").unwrap();
        let user = app.current_user().unwrap();
        assert_eq!(user.current_xp, 375);
        assert_eq!(user.total_xp, 875);
        assert_eq!(app.profile().unwrap().user.current_xp, 375);

        app.toggle_subtask("2", "2").unwrap();
        assert_eq!(app.current_user().unwrap().current_xp, 350);

        let kinds: Vec<_> = app
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, Event::TaskCompleted { .. } | Event::TaskReopened { .. }))
            .collect();
        assert_eq!(kinds.len(), 2);
    }

    #[test]
    fn created_task_is_persisted_with_priority_reward() {
        let mut app = signed_in();
        app.show_create_task().unwrap();
        app.dispatch_tasks(TasksAction::TitleChanged("Essay".into()))
            .unwrap();
        app.dispatch_tasks(TasksAction::PriorityChanged(crate::model::Priority::Low))
            .unwrap();
        let state = app.dispatch_tasks(TasksAction::SubmitCreate).unwrap();
        let created = state.tasks.last().unwrap().clone();
        assert_eq!(created.xp_reward, 10);
        assert_eq!(app.repos.tasks.get_task(&created.id).unwrap(), Some(created));
        assert_eq!(app.home().unwrap().week.total, 4);
    }

    #[test]
    fn repricing_a_completed_task_keeps_xp_symmetric() {
        let mut app = signed_in();
        let start = app.current_user().unwrap();

        app.show_create_task().unwrap();
        app.dispatch_tasks(TasksAction::TitleChanged("Essay".into()))
            .unwrap();
        let state = app.dispatch_tasks(TasksAction::SubmitCreate).unwrap();
        let id = state.tasks.last().unwrap().id.clone();
        assert_eq!(state.tasks.last().unwrap().xp_reward, 25);

        app.toggle_task(&id).unwrap();
        assert_eq!(app.current_user().unwrap().total_xp, start.total_xp + 25);

        app.dispatch_tasks(TasksAction::ShowEdit(id.clone())).unwrap();
        app.dispatch_tasks(TasksAction::PriorityChanged(crate::model::Priority::High))
            .unwrap();
        app.dispatch_tasks(TasksAction::SubmitUpdate).unwrap();
        let edited = app.tasks().tasks.iter().find(|t| t.id == id).unwrap();
        assert!(edited.completed);
        assert_eq!(edited.xp_reward, 50);
        assert_eq!(app.current_user().unwrap().total_xp, start.total_xp + 50);

        app.toggle_task(&id).unwrap();
        let end = app.current_user().unwrap();
        assert_eq!(end.current_xp, start.current_xp);
        assert_eq!(end.total_xp, start.total_xp);
    }

    #[test]
    fn profile_requires_session() {
        let mut app = app();
        assert!(matches!(
            app.dispatch_profile(ProfileAction::Edit),
            Err(CoreError::NotSignedIn)
        ));
    }

    #[test]
    fn expire_banners_clears_success() {
        let mut app = signed_in();
        app.toggle_subtask("2", "1").unwrap();
        app.toggle_subtask("2", "2").unwrap();
        assert!(app.tasks().success_message.is_some());
        app.expire_banners();
        assert!(app.tasks().success_message.is_none());
    }
}
