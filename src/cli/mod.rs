pub mod actions;
pub mod logging;

pub mod commands;
pub mod dispatch;

mod start;
pub use self::start::start;
