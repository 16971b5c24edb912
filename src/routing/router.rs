//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the ordered route table
//! - Resolve a request to exactly one route target
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc without locks)
//! - First match wins, in table order
//! - Anything unmatched falls through to static files, never to an error

use axum::body::Body;
use axum::http::{Method, Request};

use crate::routing::matcher::{AndMatcher, ExactPathMatcher, Matcher, MethodMatcher};

/// Path the widget posts compile jobs to.
pub const COMPILE_PATH: &str = "/compile";

/// The handler a request is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// CORS preflight, answered with 204.
    Preflight,
    /// Forwarded to the compile upstream.
    Compile,
    /// Served from the static root.
    Static,
}

/// A route predicate paired with its target.
#[derive(Debug)]
pub struct Route {
    pub name: &'static str,
    matcher: Box<dyn Matcher>,
    pub target: RouteTarget,
}

impl Route {
    pub fn new(name: &'static str, matcher: Box<dyn Matcher>, target: RouteTarget) -> Self {
        Self {
            name,
            matcher,
            target,
        }
    }
}

/// Ordered route table with a static-file fallback.
#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// The gateway's fixed table: preflight first, then `POST /compile`.
    pub fn gateway() -> Self {
        Self::new(vec![
            Route::new(
                "preflight",
                Box::new(MethodMatcher::new(Method::OPTIONS)),
                RouteTarget::Preflight,
            ),
            Route::new(
                "compile",
                Box::new(AndMatcher::new(vec![
                    Box::new(MethodMatcher::new(Method::POST)),
                    Box::new(ExactPathMatcher::new(COMPILE_PATH)),
                ])),
                RouteTarget::Compile,
            ),
        ])
    }

    /// Resolve the target for a request.
    pub fn resolve(&self, req: &Request<Body>) -> RouteTarget {
        self.routes
            .iter()
            .find(|route| route.matcher.matches(req))
            .map(|route| {
                tracing::trace!(route = route.name, path = %req.uri().path(), "Route matched");
                route.target
            })
            .unwrap_or(RouteTarget::Static)
    }
}
