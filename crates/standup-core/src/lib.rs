//! # standup-core
//!
//! Domain types and decision logic for the daily standup report.
//!
//! This crate performs no I/O. It provides:
//! - Ticket, comment, history and report entities
//! - The canonical [`enums::TicketStatus`] enumeration
//! - The [`window::ActivityWindow`] that bounds "recent work"
//! - The activity classifier deciding what counts as yesterday's work
//! - The work-queue rebalancer that keeps enough tickets in progress

pub mod classify;
pub mod entities;
pub mod enums;
pub mod rebalance;
pub mod window;
