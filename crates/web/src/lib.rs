//! Manejo de cookies web library.
//!
//! A small product catalog whose prices are only shown to visitors holding a
//! `username` cookie, obtained through a login form. This crate exposes the
//! router as a library so it can be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
