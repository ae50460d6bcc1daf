//! Database entity models for the booking session tables.
//!
//! The primary entity in this module is [`user_session`], which maps the
//! `user_session` table read and written by
//! [`SessionHandler`](crate::SessionHandler).

/// Session entity model for Sea-ORM database interaction.
///
/// Contains the database schema representation and entity model for the
/// `user_session` table.
pub mod user_session;
