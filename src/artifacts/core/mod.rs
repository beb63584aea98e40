//! Core utilities and shared types
//!
//! This module contains shared types used across the application.

pub mod error;
