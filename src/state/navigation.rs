// Navigation state - the route stack and the presented entry
//
// Every operation consumes the previous state and returns the next one plus
// an `Effect`. Out-of-range input never fails: it is clamped or ignored.
use crate::action::NavAction;
use crate::error::NavError;
use crate::model::{Route, RouteId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What `push` does with entries after the presented one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PushPolicy {
    /// Drop forward history, then append (browser-style).
    #[default]
    DiscardForward,
    /// Append to the full stack; forward entries are kept.
    Append,
}

/// Why an operation left the state untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoOp {
    NothingToPop,
    RouteNotFound(RouteId),
    IndexOutOfBounds { index: usize, len: usize },
    NoPreviousEntry,
    AtLastIndex,
    AtFirstIndex,
    AlreadyAtTop,
    EmptyRouteStack,
}

impl fmt::Display for NoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingToPop => f.write_str("only the root entry is left"),
            Self::RouteNotFound(id) => write!(f, "no entry with id {}", id),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {} outside stack of length {}", index, len)
            }
            Self::NoPreviousEntry => f.write_str("presented entry has no predecessor"),
            Self::AtLastIndex => f.write_str("already at the last entry"),
            Self::AtFirstIndex => f.write_str("already at the first entry"),
            Self::AlreadyAtTop => f.write_str("presented index is already 0"),
            Self::EmptyRouteStack => f.write_str("refusing an empty route stack"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Applied,
    Ignored(NoOp),
}

impl Effect {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Result of one transition: always a valid state, plus what happened.
#[derive(Clone, Debug)]
pub struct Reduced<P> {
    pub state: NavState<P>,
    pub effect: Effect,
}

impl<P> Reduced<P> {
    fn applied(state: NavState<P>) -> Self {
        Self {
            state,
            effect: Effect::Applied,
        }
    }

    fn ignored(state: NavState<P>, reason: NoOp) -> Self {
        Self {
            state,
            effect: Effect::Ignored(reason),
        }
    }
}

/// The `(route_stack, presented_index)` pair. Both fields only ever change
/// together, through the transitions below.
#[derive(Clone, Debug)]
pub struct NavState<P> {
    route_stack: Vec<Route<P>>,
    presented_index: usize,
}

impl<P> NavState<P> {
    pub fn new(initial_route: Route<P>) -> Self {
        Self {
            route_stack: vec![initial_route],
            presented_index: 0,
        }
    }

    /// Placeholder while a transition owns the real state. Never observed.
    pub(crate) fn vacant() -> Self {
        Self {
            route_stack: Vec::new(),
            presented_index: 0,
        }
    }

    /// Seeds from an ordered stack, presenting its last entry.
    pub fn from_stack(route_stack: Vec<Route<P>>) -> Result<Self, NavError> {
        if route_stack.is_empty() {
            return Err(NavError::EmptyRouteStack);
        }
        let presented_index = route_stack.len() - 1;
        Ok(Self {
            route_stack,
            presented_index,
        })
    }

    pub fn route_stack(&self) -> &[Route<P>] {
        &self.route_stack
    }

    pub fn presented_index(&self) -> usize {
        self.presented_index
    }

    pub fn presented_route(&self) -> &Route<P> {
        &self.route_stack[self.presented_index]
    }

    pub fn len(&self) -> usize {
        self.route_stack.len()
    }

    /// Always false for a constructed state; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.route_stack.is_empty()
    }

    pub fn position_of(&self, id: &RouteId) -> Option<usize> {
        self.route_stack.iter().position(|r| &r.id == id)
    }

    pub fn can_pop(&self) -> bool {
        self.route_stack.len() > 1
    }

    pub fn can_jump_back(&self) -> bool {
        self.presented_index > 0
    }

    pub fn can_jump_forward(&self) -> bool {
        self.presented_index + 1 < self.route_stack.len()
    }

    /// `len >= 1` and `presented_index < len`.
    pub fn is_consistent(&self) -> bool {
        !self.route_stack.is_empty() && self.presented_index < self.route_stack.len()
    }

    pub fn into_route_stack(self) -> Vec<Route<P>> {
        self.route_stack
    }

    pub fn reduce(self, action: NavAction<P>, policy: PushPolicy) -> Reduced<P> {
        let reduced = match action {
            NavAction::Push(route) => self.push(route, policy),
            NavAction::Pop => self.pop(),
            NavAction::PopN(n) => self.pop_n(n),
            NavAction::PopToRoute(id) => self.pop_to_route(&id),
            NavAction::PopToTop => self.pop_to_top(),
            NavAction::ReplaceAtIndex(index, route) => self.replace_at_index(index, route),
            NavAction::Replace(route) => self.replace(route),
            NavAction::ReplacePrevious(route) => self.replace_previous(route),
            NavAction::ReplacePreviousAndPop(route) => self.replace_previous_and_pop(route),
            NavAction::JumpTo(index) => self.jump_to(index),
            NavAction::JumpForward => self.jump_forward(),
            NavAction::JumpBack => self.jump_back(),
            NavAction::ResetTo(route) => self.reset_to(route),
            NavAction::ImmediatelyResetRouteStack(stack) => {
                self.immediately_reset_route_stack(stack)
            }
        };
        debug_assert!(reduced.state.is_consistent());
        reduced
    }

    pub fn push(mut self, route: Route<P>, policy: PushPolicy) -> Reduced<P> {
        if policy == PushPolicy::DiscardForward {
            // Remove any forward history when navigating to a new route
            self.route_stack.truncate(self.presented_index + 1);
        }
        self.route_stack.push(route);
        self.presented_index = self.route_stack.len() - 1;
        Reduced::applied(self)
    }

    /// Removes `min(n, len - 1)` entries from the tail.
    pub fn pop_n(mut self, n: usize) -> Reduced<P> {
        let removable = n.min(self.route_stack.len() - 1);
        if removable == 0 {
            return Reduced::ignored(self, NoOp::NothingToPop);
        }
        self.route_stack.truncate(self.route_stack.len() - removable);
        self.presented_index = self.route_stack.len() - 1;
        Reduced::applied(self)
    }

    pub fn pop(self) -> Reduced<P> {
        self.pop_n(1)
    }

    /// Matches on id only; payloads are never compared.
    pub fn pop_to_route(self, id: &RouteId) -> Reduced<P> {
        match self.position_of(id) {
            Some(k) => {
                let n = self.route_stack.len() - (k + 1);
                self.pop_n(n)
            }
            None => Reduced::ignored(self, NoOp::RouteNotFound(id.clone())),
        }
    }

    /// Only takes effect when the presented index is past the root, even if
    /// deeper entries exist.
    pub fn pop_to_top(mut self) -> Reduced<P> {
        if self.presented_index == 0 {
            return Reduced::ignored(self, NoOp::AlreadyAtTop);
        }
        self.route_stack.truncate(1);
        self.presented_index = 0;
        Reduced::applied(self)
    }

    pub fn replace_at_index(mut self, index: usize, route: Route<P>) -> Reduced<P> {
        let len = self.route_stack.len();
        if index >= len {
            return Reduced::ignored(self, NoOp::IndexOutOfBounds { index, len });
        }
        self.route_stack[index] = route;
        Reduced::applied(self)
    }

    pub fn replace(self, route: Route<P>) -> Reduced<P> {
        let index = self.presented_index;
        self.replace_at_index(index, route)
    }

    pub fn replace_previous(self, route: Route<P>) -> Reduced<P> {
        match self.presented_index.checked_sub(1) {
            Some(index) => self.replace_at_index(index, route),
            None => Reduced::ignored(self, NoOp::NoPreviousEntry),
        }
    }

    /// Each step clamps on its own; applied if either step applied.
    pub fn replace_previous_and_pop(self, route: Route<P>) -> Reduced<P> {
        let replaced = self.replace_previous(route);
        let popped = replaced.state.pop();
        match (replaced.effect, popped.effect) {
            (Effect::Ignored(reason), Effect::Ignored(_)) => Reduced::ignored(popped.state, reason),
            _ => Reduced::applied(popped.state),
        }
    }

    pub fn reset_to(mut self, route: Route<P>) -> Reduced<P> {
        self.route_stack.clear();
        self.route_stack.push(route);
        self.presented_index = 0;
        Reduced::applied(self)
    }

    pub fn jump_to(mut self, index: usize) -> Reduced<P> {
        let len = self.route_stack.len();
        if index >= len {
            return Reduced::ignored(self, NoOp::IndexOutOfBounds { index, len });
        }
        self.presented_index = index;
        Reduced::applied(self)
    }

    pub fn jump_forward(mut self) -> Reduced<P> {
        if !self.can_jump_forward() {
            return Reduced::ignored(self, NoOp::AtLastIndex);
        }
        self.presented_index += 1;
        Reduced::applied(self)
    }

    pub fn jump_back(mut self) -> Reduced<P> {
        if !self.can_jump_back() {
            return Reduced::ignored(self, NoOp::AtFirstIndex);
        }
        self.presented_index -= 1;
        Reduced::applied(self)
    }

    /// Callers must pass a non-empty stack. An empty one is refused and the
    /// previous state kept.
    pub fn immediately_reset_route_stack(mut self, route_stack: Vec<Route<P>>) -> Reduced<P> {
        if route_stack.is_empty() {
            return Reduced::ignored(self, NoOp::EmptyRouteStack);
        }
        self.presented_index = route_stack.len() - 1;
        self.route_stack = route_stack;
        Reduced::applied(self)
    }
}
