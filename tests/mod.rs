//! Integration tests for jobify-web
//!
//! This module contains all integration tests including:
//! - Navigation rendering tests (Sidebar link resolution)
//! - Component tests (StatsCard, job form validation)

mod components;
