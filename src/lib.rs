//! Attendance Balance Engine
//!
//! This crate computes a running time balance for a monthly attendance
//! table, projects the hours still required, and warns when overtime is
//! heading towards the monthly limit.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
