#![forbid(unsafe_code)]

pub mod catalog;
pub mod forms;
pub mod guard;
pub mod model;
pub mod time;
pub mod wizard;

pub use time::Clock;
