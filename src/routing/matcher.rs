//! Route matching logic.
//!
//! # Responsibilities
//! - Match request method (exact)
//! - Match request path (exact, case-sensitive)
//! - Combine conditions with AND semantics
//!
//! # Design Decisions
//! - Paths are compared without the query string
//! - No regex, no prefix tricks: the gateway only has fixed routes

use axum::body::Body;
use axum::http::{Method, Request};

/// Trait for matching requests against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the request matches this condition.
    fn matches(&self, req: &Request<Body>) -> bool;
}

/// Matches the request method.
#[derive(Debug, Clone)]
pub struct MethodMatcher {
    method: Method,
}

impl MethodMatcher {
    pub fn new(method: Method) -> Self {
        Self { method }
    }
}

impl Matcher for MethodMatcher {
    fn matches(&self, req: &Request<Body>) -> bool {
        req.method() == self.method
    }
}

/// Matches one exact request path.
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    path: String,
}

impl ExactPathMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, req: &Request<Body>) -> bool {
        req.uri().path() == self.path
    }
}

/// Combines multiple matchers with AND semantics.
#[derive(Debug)]
pub struct AndMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AndMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AndMatcher {
    fn matches(&self, req: &Request<Body>) -> bool {
        self.matchers.iter().all(|m| m.matches(req))
    }
}
