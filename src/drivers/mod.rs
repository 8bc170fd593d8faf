//! Pin drivers, GPIO initialisation, and the task watchdog.

pub mod gpio;
pub mod hw_init;
pub mod relay;
pub mod switch;
pub mod watchdog;
