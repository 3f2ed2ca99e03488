//! Exercise Modules.

pub mod bubble_step;
pub mod chunks;
pub mod closures;
pub mod digit_steps;
pub mod field_access;
pub mod fill;
pub mod find;
pub mod greetings;
pub mod grid;
pub mod name_check;
pub mod swap;
