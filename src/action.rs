use crate::model::{Route, RouteId};

/// One stack operation as a value, so it can be queued and replayed.
#[derive(Debug, Clone)]
pub enum NavAction<P> {
    // Growing / shrinking
    Push(Route<P>),
    Pop,
    PopN(usize),
    PopToRoute(RouteId),
    PopToTop,

    // Overwriting entries
    ReplaceAtIndex(usize, Route<P>),
    Replace(Route<P>),
    ReplacePrevious(Route<P>),
    ReplacePreviousAndPop(Route<P>),

    // Moving the presented pointer
    JumpTo(usize),
    JumpForward,
    JumpBack,

    // Wholesale resets
    ResetTo(Route<P>),
    ImmediatelyResetRouteStack(Vec<Route<P>>),
}

impl<P> NavAction<P> {
    /// Stable name for log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Push(_) => "push",
            Self::Pop => "pop",
            Self::PopN(_) => "pop_n",
            Self::PopToRoute(_) => "pop_to_route",
            Self::PopToTop => "pop_to_top",
            Self::ReplaceAtIndex(..) => "replace_at_index",
            Self::Replace(_) => "replace",
            Self::ReplacePrevious(_) => "replace_previous",
            Self::ReplacePreviousAndPop(_) => "replace_previous_and_pop",
            Self::JumpTo(_) => "jump_to",
            Self::JumpForward => "jump_forward",
            Self::JumpBack => "jump_back",
            Self::ResetTo(_) => "reset_to",
            Self::ImmediatelyResetRouteStack(_) => "immediately_reset_route_stack",
        }
    }
}
