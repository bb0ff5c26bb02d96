//! Seed data the app starts with, positioned relative to "now".

use chrono::{DateTime, Duration, Utc};

use crate::model::{
    Notification, NotificationKind, Priority, Subject, Subtask, Task, TaskType, User,
};

pub const DEMO_USER_ID: &str = "user-1";

pub fn demo_user() -> User {
    let mut user = User::new(DEMO_USER_ID, "Alex Roldan", "alex@upp.edu.mx");
    user.university = "Universidad Politécnica de Pachuca".into();
    user.career = "Software Engineering".into();
    user.age = 21;
    user.current_level = 5;
    user.current_xp = 350;
    user.total_xp = 850;
    user.current_streak = 7;
    user.badges = ["first_task", "perfect_week", "early_bird"]
        .into_iter()
        .map(String::from)
        .collect();
    user
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: &str,
    title: &str,
    description: &str,
    notes: Option<&str>,
    subject: (&str, &str),
    due_at: DateTime<Utc>,
    priority: Priority,
    task_type: TaskType,
    xp_reward: u32,
    subtasks: &[(&str, bool)],
) -> Task {
    let mut task = Task::new(id, title, due_at);
    task.description = description.into();
    task.notes = notes.map(String::from);
    task.subject_id = subject.0.into();
    task.subject_name = subject.1.into();
    task.priority = priority;
    task.task_type = task_type;
    task.xp_reward = xp_reward;
    task.subtasks = subtasks
        .iter()
        .enumerate()
        .map(|(i, (title, done))| Subtask::new((i + 1).to_string(), *title, *done))
        .collect();
    task.completed = task.all_subtasks_completed();
    task
}

/// Four tasks: three due in the next three days, one a month out.
pub fn tasks(now: DateTime<Utc>) -> Vec<Task> {
    let seeded = vec![
        task(
            "1",
            "Mobile Development exam",
            "Study Jetpack Compose, MVVM, Navigation",
            Some("Review the exercises from chapters 5 and 6"),
            ("1", "Mobile Development"),
            now + Duration::days(1),
            Priority::High,
            TaskType::Exam,
            50,
            &[
                ("Study Jetpack Compose", true),
                ("Review MVVM", false),
                ("Practice Navigation", false),
                ("Do exercises", false),
            ],
        ),
        task(
            "2",
            "Database practice",
            "Implement triggers and stored procedures",
            Some("Use the professor's sample database"),
            ("2", "Databases"),
            now + Duration::days(2),
            Priority::Medium,
            TaskType::Homework,
            25,
            &[("Write triggers", false), ("Write procedures", false)],
        ),
        task(
            "3",
            "Read chapter 5",
            "Design patterns in software engineering",
            None,
            ("3", "Software Engineering"),
            now + Duration::days(3),
            Priority::Low,
            TaskType::Reading,
            10,
            &[("Read chapter 5", true), ("Write summary", true)],
        ),
        task(
            "4",
            "Final project",
            "Build a complete gamified mobile app",
            Some("Include login, task CRUD, gamification, statistics"),
            ("1", "Mobile Development"),
            now + Duration::days(30),
            Priority::High,
            TaskType::Project,
            100,
            &[
                ("Design UI/UX", true),
                ("Implement login", false),
                ("Task CRUD", false),
                ("Gamification", false),
                ("Statistics", false),
            ],
        ),
    ];
    seeded
        .into_iter()
        .map(|mut task| {
            task.completed_at = task.completed.then_some(now);
            task
        })
        .collect()
}

pub fn subjects(user_id: &str) -> Vec<Subject> {
    let subject = |id: &str, name: &str, color: &str, professor: &str, room: &str, schedule: &str, total, done| Subject {
        id: id.into(),
        user_id: user_id.into(),
        name: name.into(),
        color: color.into(),
        professor_name: Some(professor.into()),
        classroom: room.into(),
        schedule: schedule.into(),
        total_tasks: total,
        completed_tasks: done,
    };
    vec![
        subject("1", "Mobile Development", "#FF6B6B", "Miguel Angel Montoya", "Lab 3", "Mon-Wed 8:00-10:00", 10, 7),
        subject("2", "Databases", "#4ECDC4", "Gael Rojo", "Room 101", "Tue-Thu 10:00-12:00", 8, 5),
        subject("3", "Software Engineering", "#FFE66D", "Dr. Martinez", "Room 205", "Mon-Fri 14:00-16:00", 12, 10),
    ]
}

pub fn notifications(now: DateTime<Utc>) -> Vec<Notification> {
    let note = |id: &str, title: &str, message: &str, kind, read, ago: Duration, task_id: Option<&str>| Notification {
        id: id.into(),
        title: title.into(),
        message: message.into(),
        kind,
        read,
        timestamp: now - ago,
        task_id: task_id.map(String::from),
    };
    vec![
        note("1", "Due in 2 hours!", "Mobile Development exam - don't forget to study", NotificationKind::TaskReminder, false, Duration::hours(1), Some("1")),
        note("2", "Mark it as delivered!", "Database practice - completed", NotificationKind::TaskCompleted, false, Duration::hours(2), Some("2")),
        note("3", "Final weeks", "Mathematics - integrals lecture", NotificationKind::TaskReminder, true, Duration::days(1), None),
        note("4", "Home stretch", "Science - lab assignment pending", NotificationKind::TaskReminder, true, Duration::days(2), None),
    ]
}
