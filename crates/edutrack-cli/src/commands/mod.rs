pub mod calendar;
pub mod config;
pub mod notification;
pub mod profile;
pub mod task;
pub mod validate;
pub mod xp;

use edutrack_core::repository::fixtures;
use edutrack_core::{App, Config, NoDelay, SystemClock};
use serde::Serialize;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// App over the seeded data with the demo user signed in.
///
/// Each invocation starts from the fixtures; nothing is persisted.
pub fn demo_app() -> Result<App, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut app = App::new(config, Box::new(SystemClock), Box::new(NoDelay))?;
    let user = fixtures::demo_user();
    tracing::debug!(user_id = %user.id, "starting from fixtures");
    app.sign_in(user)?;
    Ok(app)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
