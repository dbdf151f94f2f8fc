//! # Slotbook Core
//!
//! Domain types and the availability view model shared by every part of the
//! slotbook client: the wire-level entities (slots, services, records,
//! users, notifications), the display-window/service/date filters, the
//! date grouping used to render a schedule, and the booking-state deriver
//! that decides what control a slot offers to the viewing client.
//!
//! Everything in this crate is pure: no I/O, no clocks. Callers pass the
//! current instant and the viewer's UTC offset explicitly, which keeps the
//! whole view model deterministic under test.

pub mod availability;
pub mod errors;
pub mod models;
pub mod timefmt;
