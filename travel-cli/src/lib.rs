//! Interactive travel-booking CLI.
//!
//! Users sign up, log in, plan journeys across transport segments by
//! choosing among options filtered by a comfort threshold and sorted by
//! time or cost, view their trip history, and make payments from a
//! wallet balance.

pub mod accounts;
pub mod cli;
pub mod config;
pub mod domain;
pub mod notify;
pub mod planner;
