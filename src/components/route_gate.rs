//! Per-route gate that applies the evaluator's decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route in `app` renders through this component, so guarded and
//! unguarded pages share one code path and identical redirect behavior.
//!
//! The credential store is only readable in the browser, so the decision is
//! made inside an `Effect` after hydration. Until then the gate is `Pending`
//! and renders nothing, which keeps server and client markup identical.

#[cfg(test)]
#[path = "route_gate_test.rs"]
mod route_gate_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::error::RouteError;
use crate::pages::{render_view, view_title};
use crate::router::{Evaluator, NavState, Navigation, View};

/// What the gate shows for its current decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    Pending,
    Render(View),
    Redirect(String),
    NotFound,
}

impl GateOutcome {
    /// Navigation state, or `None` when the path is not in the table.
    #[must_use]
    pub fn nav_state(&self) -> Option<NavState> {
        match self {
            Self::Pending => Some(NavState::Pending),
            Self::Render(_) => Some(NavState::Allowed),
            Self::Redirect(_) => Some(NavState::Redirected),
            Self::NotFound => None,
        }
    }
}

/// Map an evaluator decision (or its absence) to what the gate shows.
pub fn gate_outcome(decision: Option<&Result<Navigation, RouteError>>) -> GateOutcome {
    match decision {
        None => GateOutcome::Pending,
        Some(Ok(Navigation::Allowed { view })) => GateOutcome::Render(*view),
        Some(Ok(Navigation::Redirected { to })) => GateOutcome::Redirect(to.clone()),
        Some(Err(_)) => GateOutcome::NotFound,
    }
}

/// Options for a guard redirect: the denied entry is replaced in history so
/// the back button does not return to it.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Resolve `path` once mounted and render its page, redirect, or a
/// not-found notice.
#[component]
pub fn RouteGate(path: &'static str) -> impl IntoView {
    let evaluator = expect_context::<Evaluator>();
    let navigate = use_navigate();
    let decision = RwSignal::new(None::<Result<Navigation, RouteError>>);

    Effect::new(move || {
        let resolved = evaluator.resolve(path);
        match &resolved {
            Ok(Navigation::Redirected { to }) => navigate(to.as_str(), redirect_options()),
            Ok(Navigation::Allowed { .. }) => {}
            Err(e) => log::warn!("route gate: {e}"),
        }
        decision.set(Some(resolved));
    });

    move || match decision.with(|d| gate_outcome(d.as_ref())) {
        GateOutcome::Pending | GateOutcome::Redirect(_) => ().into_any(),
        GateOutcome::Render(view) => view! {
            <Title text=view_title(view)/>
            {render_view(view)}
        }
        .into_any(),
        GateOutcome::NotFound => view! { <p class="not-found">"Page not found."</p> }.into_any(),
    }
}
