//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared route evaluator from Leptos context and decide
//! what each route renders.

pub mod route_gate;
