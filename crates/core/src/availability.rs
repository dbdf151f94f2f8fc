//! # Availability View Model
//!
//! The pipeline a master's raw slot list goes through before it is shown:
//!
//! 1. [`window`] drops slots that started more than an hour ago.
//! 2. [`filter`] narrows by the viewer's service and date selections.
//! 3. [`grouping`] partitions what is left into labeled day groups.
//!
//! Independently, [`state`] cross-references the viewing client's own
//! records to classify every slot into one of five display states and
//! decide whether a booking control is offered.

pub mod filter;
pub mod grouping;
pub mod state;
pub mod window;
