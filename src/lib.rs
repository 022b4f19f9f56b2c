//! RBX Task - gamified reward progression engine
//!
//! Users complete tasks, accrue a virtual coin balance, track streaks,
//! ranks and achievements, and convert coins to a simulated cash-out value.
//! This crate is the in-process core behind the app: the task board, the
//! 7-day reward cycle, the achievement engine, the transaction ledger, and
//! the manager that sequences them. Rendering, navigation, and the video/
//! share/install flows are external collaborators that call back into the
//! manager once their work is done.

pub mod config;
pub mod domain;
pub mod rewards;
pub mod storage;

pub use domain::*;
