//! Terminal rendition of the order dashboard.

pub mod command;
pub mod render;
pub mod session;

pub use command::Command;
pub use session::{DashboardSession, Outcome};
