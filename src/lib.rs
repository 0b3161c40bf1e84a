//! Terminal Body Mass Index calculator.
//!
//! The core ([`bmi`] and [`ui::form`]) is pure and framework-free; the rest
//! of [`ui`] draws it with ratatui.

pub mod bmi;
pub mod config;
pub mod locale;
pub mod logging;
pub mod ui;
