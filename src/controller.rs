// Deferred navigation actions shared between the navigator and its collaborators
use crate::action::NavAction;
use crate::model::{Route, RouteId};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

pub(crate) type ActionQueue<P> = Rc<RefCell<VecDeque<NavAction<P>>>>;

/// The mutation API handed to navigation bars, scene contents and event
/// handlers. It only records intent; the owning `Navigator` applies queued
/// actions in call order on its next `process_pending`.
pub struct NavController<P> {
    queue: ActionQueue<P>,
}

// Manual impl: cloning the handle must not require `P: Clone`.
impl<P> Clone for NavController<P> {
    fn clone(&self) -> Self {
        Self {
            queue: Rc::clone(&self.queue),
        }
    }
}

impl<P> NavController<P> {
    pub(crate) fn new(queue: ActionQueue<P>) -> Self {
        Self { queue }
    }

    pub fn dispatch(&self, action: NavAction<P>) {
        self.queue.borrow_mut().push_back(action);
    }

    /// Actions recorded but not yet applied.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn push(&self, route: Route<P>) {
        self.dispatch(NavAction::Push(route));
    }

    pub fn pop(&self) {
        self.dispatch(NavAction::Pop);
    }

    pub fn pop_n(&self, n: usize) {
        self.dispatch(NavAction::PopN(n));
    }

    pub fn pop_to_route(&self, route: &Route<P>) {
        self.dispatch(NavAction::PopToRoute(route.id.clone()));
    }

    pub fn pop_to_route_id(&self, id: impl Into<RouteId>) {
        self.dispatch(NavAction::PopToRoute(id.into()));
    }

    pub fn pop_to_top(&self) {
        self.dispatch(NavAction::PopToTop);
    }

    pub fn replace_at_index(&self, index: usize, route: Route<P>) {
        self.dispatch(NavAction::ReplaceAtIndex(index, route));
    }

    pub fn replace(&self, route: Route<P>) {
        self.dispatch(NavAction::Replace(route));
    }

    pub fn replace_previous(&self, route: Route<P>) {
        self.dispatch(NavAction::ReplacePrevious(route));
    }

    pub fn replace_previous_and_pop(&self, route: Route<P>) {
        self.dispatch(NavAction::ReplacePreviousAndPop(route));
    }

    pub fn jump_to(&self, index: usize) {
        self.dispatch(NavAction::JumpTo(index));
    }

    pub fn jump_forward(&self) {
        self.dispatch(NavAction::JumpForward);
    }

    pub fn jump_back(&self) {
        self.dispatch(NavAction::JumpBack);
    }

    pub fn reset_to(&self, route: Route<P>) {
        self.dispatch(NavAction::ResetTo(route));
    }

    pub fn immediately_reset_route_stack(&self, route_stack: Vec<Route<P>>) {
        self.dispatch(NavAction::ImmediatelyResetRouteStack(route_stack));
    }
}
