//! Route table and guard evaluator.
//!
//! ARCHITECTURE
//! ============
//! `table` declares which paths exist and which are protected, `guard` holds
//! the single token check, `config` binds integrator choices (token key,
//! redirect target, table profile), and `evaluator` turns a requested path
//! into an allow/redirect decision for the UI shell.

pub mod config;
pub mod evaluator;
pub mod guard;
pub mod table;

pub use config::{RouteProfile, RouterConfig};
pub use evaluator::{Evaluator, NavState, Navigation, NavigationRequest};
pub use table::{RouteEntry, RouteTable, RouteTarget, View, paths};
