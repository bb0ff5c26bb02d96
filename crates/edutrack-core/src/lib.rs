//! # EduTrack Core Library
//!
//! This library provides the core logic of EduTrack, a gamified study
//! planner for university students. Front-ends (the `edutrack` CLI, or any
//! GUI) are thin layers over the same core.
//!
//! ## Architecture
//!
//! - **Validation**: Pure field validators for email, name and password,
//!   plus the profile form check and input sanitizers
//! - **Gamification**: XP per priority, the level curve, progress ratios
//!   and timeliness multipliers
//! - **Tasks**: Filtering, weekly progress, calendar bucketing and the
//!   task/subtask completion cascade
//! - **Screens**: One immutable state record and pure reducer per screen
//! - **App**: Owns screens and repositories, injects the clock and the
//!   simulated backend latency
//!
//! ## Key Components
//!
//! - [`XpCalculator`]: Level curve and XP awards
//! - [`App`]: Screen orchestration over the repositories
//! - [`Config`]: Application configuration management
//! - [`Clock`] / [`Delay`]: Injected time and latency

pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod gamification;
pub mod model;
pub mod repository;
pub mod screens;
pub mod task;
pub mod validation;

pub use app::{App, Repositories};
pub use clock::{Clock, Delay, FixedClock, NoDelay, RecordingDelay, SystemClock, ThreadDelay};
pub use config::{data_dir, Config};
pub use error::{ConfigError, CoreError, TaskError};
pub use events::Event;
pub use gamification::{Badge, Timeliness, XpCalculator};
pub use model::{Notification, Priority, Subject, Subtask, Task, TaskType, User};
pub use task::{TaskFilter, TaskStatus, TaskTransition, WeekWindow, WeeklyProgress};
pub use validation::ValidationResult;
