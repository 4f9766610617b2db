//! Thrive Up: a small personal health helper.
//!
//! Thrive keeps a list of medication reminders in a persisted key-value slot
//! and bundles three stateless helpers around it: a keyword-based symptom
//! checker, a built-in drug reference, and a rule-based assistant that points
//! the user at the right section.
//!
//! | Feature | State | Entry point |
//! |---------|-------|-------------|
//! | **Reminders** | one JSON array under `thrive_reminders_v1` | [`reminders::ReminderBoard`] |
//! | **Symptom checker** | none | [`lookup::check_symptom`] |
//! | **Drug reference** | static table | [`lookup::lookup_drug`] |
//! | **Quick search** | none | [`lookup::quick_search`] |
//! | **Assistant** | none | [`assistant::respond`] |
//!
//! # Modules
//!
//! - [`config`]: configuration loading from TOML files and environment variables
//! - [`db`]: SQLite database initialization, schema, and health checks
//! - [`storage`]: the [`storage::KeyValueStore`] seam with SQLite and in-memory backends
//! - [`reminders`]: reminder store, views, and the board that keeps them in sync
//! - [`lookup`]: symptom checker, drug reference, quick search
//! - [`assistant`]: keyword-driven assistant replies

pub mod assistant;
pub mod config;
pub mod db;
pub mod lookup;
pub mod reminders;
pub mod storage;
