//! Request dispatch and named intent handlers

pub mod dispatcher;
pub mod intent;

pub use dispatcher::SkillDispatcher;
pub use intent::IntentKind;
