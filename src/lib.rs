//! Client relationship and billing core for the Mag System dashboard.
//!
//! The crate owns the client record lifecycle (creation, status updates,
//! settlement), the derived financial metrics feeding every dashboard view,
//! and the agenda partitioning. The surrounding UI is an external
//! collaborator: it reads snapshots from the [`repository`] and calls into
//! [`services`] synchronously.

pub mod domain;
pub mod dto;
pub mod format;
pub mod forms;
pub mod repository;
pub mod services;
