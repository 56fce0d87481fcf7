//! Editor portfolio library.
//!
//! A server-rendered portfolio site for a video editor: a biography section
//! and a per-platform gallery of YouTube, TikTok, and Instagram videos read
//! from a hosted `projects` table.

// Inline scripts and JSON fixtures are written as raw strings
#![allow(clippy::needless_raw_string_hashes)]

pub mod components;
pub mod config;
pub mod constants;
pub mod gallery;
pub mod platforms;
pub mod projects;
pub mod web;
