//! # Slotbook App
//!
//! The stateful client layer sitting between the pure view model of
//! `slotbook-core` and the HTTP client of `slotbook-client`:
//!
//! - **Session**: the persisted token + current user, with a change
//!   subscription any auth-dependent surface can watch for its lifetime.
//! - **Polling**: per-dependency cells that re-fetch on a fixed interval
//!   and on explicit invalidation, reporting a loading state until the
//!   first fetch lands.
//! - **Schedule page**: the composition used by both the public booking
//!   page and the owner's profile page: filtered slots, day groups,
//!   per-slot booking states, date options, master profile.
//! - **Booking flow**: the two-step confirm/cancel interaction that
//!   submits a booking request and reconciles the caches on success.

/// Two-step booking submission flow
pub mod booking;
/// Environment-driven application settings
pub mod config;
/// Interval-driven cache cells with explicit invalidation
pub mod polling;
/// The composed schedule view used by the booking pages
pub mod schedule_page;
/// Persisted session state and its change notification
pub mod session;
