// Navigator - owns the navigation state and applies actions in call order
use crate::action::NavAction;
use crate::controller::{ActionQueue, NavController};
use crate::error::NavError;
use crate::model::{Route, RouteId};
use crate::scene::{compose_scenes, NavigationBar, Scene, SceneRenderer, SceneStyle};
use crate::state::{Effect, NavState, NoOp, PushPolicy, Reduced};
use std::mem;
use std::rc::Rc;
use tracing::{debug, warn};

/// Construction inputs. `initial_route_stack` wins over `initial_route`.
pub struct NavigatorOptions<P> {
    pub initial_route_stack: Option<Vec<Route<P>>>,
    pub initial_route: Option<Route<P>>,
    pub scene_style: SceneStyle,
    pub push_policy: PushPolicy,
}

impl<P> Default for NavigatorOptions<P> {
    fn default() -> Self {
        Self {
            initial_route_stack: None,
            initial_route: None,
            scene_style: SceneStyle::default(),
            push_policy: PushPolicy::default(),
        }
    }
}

impl<P> NavigatorOptions<P> {
    pub fn with_initial_route_stack(mut self, route_stack: Vec<Route<P>>) -> Self {
        self.initial_route_stack = Some(route_stack);
        self
    }

    pub fn with_initial_route(mut self, route: Route<P>) -> Self {
        self.initial_route = Some(route);
        self
    }

    pub fn with_scene_style(mut self, scene_style: SceneStyle) -> Self {
        self.scene_style = scene_style;
        self
    }

    pub fn with_push_policy(mut self, push_policy: PushPolicy) -> Self {
        self.push_policy = push_policy;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<P> = Box<dyn FnMut(&NavState<P>)>;

/// Imperative handle over the route stack.
///
/// Direct calls (`push`, `pop`, ...) commit before returning. Actions
/// recorded through a [`NavController`] wait in a FIFO queue until the next
/// direct call or [`Navigator::process_pending`]. Every action reads the
/// latest committed state, so the order of calls is the order of effects.
/// Listeners run after each applied action and see both fields updated.
pub struct Navigator<P> {
    state: NavState<P>,
    queue: ActionQueue<P>,
    listeners: Vec<(SubscriptionId, Listener<P>)>,
    next_subscription: u64,
    scene_style: SceneStyle,
    push_policy: PushPolicy,
}

impl<P> Navigator<P> {
    pub fn new(options: NavigatorOptions<P>) -> Result<Self, NavError> {
        let state = match (options.initial_route_stack, options.initial_route) {
            (Some(route_stack), _) => NavState::from_stack(route_stack)?,
            (None, Some(route)) => NavState::new(route),
            (None, None) => return Err(NavError::EmptyRouteStack),
        };
        debug!(
            len = state.len(),
            presented_index = state.presented_index(),
            "navigator created"
        );
        Ok(Self {
            state,
            queue: Rc::default(),
            listeners: Vec::new(),
            next_subscription: 0,
            scene_style: options.scene_style,
            push_policy: options.push_policy,
        })
    }

    pub fn with_initial_route(route: Route<P>) -> Self {
        Self::from_state(NavState::new(route))
    }

    pub fn from_state(state: NavState<P>) -> Self {
        Self {
            state,
            queue: Rc::default(),
            listeners: Vec::new(),
            next_subscription: 0,
            scene_style: SceneStyle::default(),
            push_policy: PushPolicy::default(),
        }
    }

    // --- Read API ---

    pub fn get_current_routes(&self) -> &[Route<P>] {
        self.state.route_stack()
    }

    pub fn nav_state(&self) -> &NavState<P> {
        &self.state
    }

    pub fn presented_index(&self) -> usize {
        self.state.presented_index()
    }

    pub fn presented_route(&self) -> &Route<P> {
        self.state.presented_route()
    }

    pub fn scene_style(&self) -> &SceneStyle {
        &self.scene_style
    }

    pub fn push_policy(&self) -> PushPolicy {
        self.push_policy
    }

    pub fn set_push_policy(&mut self, push_policy: PushPolicy) {
        self.push_policy = push_policy;
    }

    /// A mutation handle sharing this navigator's queue.
    pub fn controller(&self) -> NavController<P> {
        NavController::new(Rc::clone(&self.queue))
    }

    // --- Observers ---

    pub fn subscribe(&mut self, listener: impl FnMut(&NavState<P>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    // --- Applying actions ---

    /// Applies every queued action in FIFO order, including ones queued by
    /// listeners while draining. Returns how many actions were applied.
    pub fn process_pending(&mut self) -> usize {
        self.drain_effects()
            .iter()
            .filter(|effect| effect.is_applied())
            .count()
    }

    /// Like [`Navigator::process_pending`], but returns the effect of every
    /// drained action in the order applied, follow-ups from listeners
    /// included.
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        loop {
            // Borrow released before applying: listeners may enqueue more.
            let next = self.queue.borrow_mut().pop_front();
            let Some(action) = next else {
                break;
            };
            effects.push(self.apply(action));
        }
        effects
    }

    /// Applies `action` after anything already queued, then drains whatever
    /// listeners queued in response. Returns the effect of `action` itself.
    pub fn dispatch(&mut self, action: NavAction<P>) -> Effect {
        self.process_pending();
        let effect = self.apply(action);
        self.process_pending();
        effect
    }

    fn apply(&mut self, action: NavAction<P>) -> Effect {
        let name = action.name();
        let previous = mem::replace(&mut self.state, NavState::vacant());
        let Reduced { state, effect } = previous.reduce(action, self.push_policy);
        self.state = state;

        match &effect {
            Effect::Applied => {
                debug!(
                    action = name,
                    len = self.state.len(),
                    presented_index = self.state.presented_index(),
                    "navigation applied"
                );
                self.notify();
            }
            Effect::Ignored(reason @ NoOp::EmptyRouteStack) => {
                warn!(action = name, %reason, "navigation contract violated, state kept");
            }
            Effect::Ignored(reason) => {
                debug!(action = name, %reason, "navigation ignored");
            }
        }
        effect
    }

    fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }

    // --- Action API ---

    pub fn push(&mut self, route: Route<P>) -> Effect {
        self.dispatch(NavAction::Push(route))
    }

    pub fn pop(&mut self) -> Effect {
        self.dispatch(NavAction::Pop)
    }

    pub fn pop_n(&mut self, n: usize) -> Effect {
        self.dispatch(NavAction::PopN(n))
    }

    /// Pops everything above the entry whose id matches `route.id`.
    pub fn pop_to_route(&mut self, route: &Route<P>) -> Effect {
        self.dispatch(NavAction::PopToRoute(route.id.clone()))
    }

    pub fn pop_to_route_id(&mut self, id: impl Into<RouteId>) -> Effect {
        self.dispatch(NavAction::PopToRoute(id.into()))
    }

    pub fn pop_to_top(&mut self) -> Effect {
        self.dispatch(NavAction::PopToTop)
    }

    pub fn replace_at_index(&mut self, index: usize, route: Route<P>) -> Effect {
        self.dispatch(NavAction::ReplaceAtIndex(index, route))
    }

    pub fn replace(&mut self, route: Route<P>) -> Effect {
        self.dispatch(NavAction::Replace(route))
    }

    pub fn replace_previous(&mut self, route: Route<P>) -> Effect {
        self.dispatch(NavAction::ReplacePrevious(route))
    }

    pub fn replace_previous_and_pop(&mut self, route: Route<P>) -> Effect {
        self.dispatch(NavAction::ReplacePreviousAndPop(route))
    }

    pub fn reset_to(&mut self, route: Route<P>) -> Effect {
        self.dispatch(NavAction::ResetTo(route))
    }

    pub fn jump_to(&mut self, index: usize) -> Effect {
        self.dispatch(NavAction::JumpTo(index))
    }

    pub fn jump_forward(&mut self) -> Effect {
        self.dispatch(NavAction::JumpForward)
    }

    pub fn jump_back(&mut self) -> Effect {
        self.dispatch(NavAction::JumpBack)
    }

    /// `route_stack` must not be empty.
    pub fn immediately_reset_route_stack(&mut self, route_stack: Vec<Route<P>>) -> Effect {
        self.dispatch(NavAction::ImmediatelyResetRouteStack(route_stack))
    }

    // --- Rendering collaborators ---

    pub fn render_scenes<R>(&self, renderer: &mut R) -> Vec<Scene<'_, P, R::Output>>
    where
        R: SceneRenderer<P>,
    {
        compose_scenes(&self.state, &self.scene_style, renderer)
    }

    pub fn render_navigation_bar<B>(&self, bar: &mut B)
    where
        B: NavigationBar<P>,
    {
        bar.render(&self.controller(), &self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn route(id: &str) -> Route<()> {
        Route::new(id, ())
    }

    fn ids(nav: &Navigator<()>) -> Vec<String> {
        nav.get_current_routes()
            .iter()
            .map(|r| r.id.to_string())
            .collect()
    }

    #[test]
    fn test_new_prefers_initial_route_stack() {
        let nav = Navigator::new(
            NavigatorOptions::default()
                .with_initial_route(route("ignored"))
                .with_initial_route_stack(vec![route("a"), route("b")]),
        )
        .unwrap();
        assert_eq!(ids(&nav), vec!["a", "b"]);
        assert_eq!(nav.presented_index(), 1);
    }

    #[test]
    fn test_new_rejects_missing_seed() {
        let err = Navigator::<()>::new(NavigatorOptions::default()).err();
        assert_eq!(err, Some(NavError::EmptyRouteStack));

        let err = Navigator::<()>::new(
            NavigatorOptions::default().with_initial_route_stack(Vec::new()),
        )
        .err();
        assert_eq!(err, Some(NavError::EmptyRouteStack));
    }

    #[test]
    fn test_controller_actions_apply_in_call_order() {
        let mut nav = Navigator::with_initial_route(route("a"));
        let first = nav.controller();
        let second = nav.controller();

        // Same tick, two handlers
        first.push(route("b"));
        second.pop();
        assert_eq!(ids(&nav), vec!["a"]);

        assert_eq!(nav.process_pending(), 2);
        assert_eq!(ids(&nav), vec!["a"]);
        assert_eq!(nav.presented_index(), 0);
    }

    #[test]
    fn test_direct_call_flushes_queue_first() {
        let mut nav = Navigator::with_initial_route(route("a"));
        nav.controller().push(route("b"));

        // Replace sees "b" presented, not the stale "a".
        assert!(nav.replace(route("c")).is_applied());
        assert_eq!(ids(&nav), vec!["a", "c"]);
    }

    #[test]
    fn test_listeners_fire_only_for_applied_actions() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut nav = Navigator::with_initial_route(route("a"));
        let sink = Rc::clone(&seen);
        let id = nav.subscribe(move |state| {
            sink.borrow_mut()
                .push((state.len(), state.presented_index()));
        });

        nav.pop();
        nav.push(route("b"));
        nav.jump_forward();
        nav.jump_back();

        assert_eq!(*seen.borrow(), vec![(2, 1), (2, 0)]);

        assert!(nav.unsubscribe(id));
        assert!(!nav.unsubscribe(id));
        nav.jump_forward();
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_listener_can_queue_followups() {
        let mut nav = Navigator::with_initial_route(route("a"));
        let controller = nav.controller();
        nav.subscribe(move |state| {
            if state.presented_route().id.as_str() == "redirect" {
                controller.replace(Route::new("target", ()));
            }
        });

        nav.push(route("redirect"));
        assert_eq!(ids(&nav), vec!["a", "target"]);
    }

    #[test]
    fn test_empty_reset_keeps_previous_state() {
        let mut nav = Navigator::with_initial_route(route("a"));
        nav.push(route("b"));

        let effect = nav.immediately_reset_route_stack(Vec::new());
        assert_eq!(effect, Effect::Ignored(NoOp::EmptyRouteStack));
        assert_eq!(ids(&nav), vec!["a", "b"]);
        assert!(nav.nav_state().is_consistent());
        assert_eq!(nav.presented_route().id.as_str(), "b");

        // Still usable afterwards
        assert!(nav.pop().is_applied());
        assert_eq!(ids(&nav), vec!["a"]);
    }

    #[test]
    fn test_queued_empty_reset_is_ignored() {
        let mut nav = Navigator::with_initial_route(route("a"));
        let controller = nav.controller();
        controller.immediately_reset_route_stack(Vec::new());
        controller.push(route("b"));

        let effects = nav.drain_effects();
        assert_eq!(
            effects,
            vec![Effect::Ignored(NoOp::EmptyRouteStack), Effect::Applied]
        );
        assert_eq!(ids(&nav), vec!["a", "b"]);
    }

    #[test]
    fn test_drain_effects_includes_listener_followups() {
        let mut nav = Navigator::with_initial_route(route("a"));
        let controller = nav.controller();
        let followup = nav.controller();
        nav.subscribe(move |state| {
            if state.presented_route().id.as_str() == "b" {
                followup.jump_forward();
            }
        });

        controller.push(route("b"));
        let effects = nav.drain_effects();
        assert_eq!(
            effects,
            vec![Effect::Applied, Effect::Ignored(NoOp::AtLastIndex)]
        );
    }

    #[test]
    fn test_pop_to_route_id() {
        let mut nav = Navigator::new(
            NavigatorOptions::default()
                .with_initial_route_stack(vec![route("a"), route("b"), route("c")]),
        )
        .unwrap();

        assert!(nav.pop_to_route_id("a").is_applied());
        assert_eq!(ids(&nav), vec!["a"]);
        assert_eq!(
            nav.pop_to_route_id(RouteId::new("gone")),
            Effect::Ignored(NoOp::RouteNotFound(RouteId::new("gone")))
        );
    }

    #[test]
    fn test_navigation_bar_receives_snapshot_and_controller() {
        let mut nav = Navigator::new(
            NavigatorOptions::default().with_initial_route_stack(vec![route("a"), route("b")]),
        )
        .unwrap();

        let mut seen_len = 0;
        let mut bar = |controller: &NavController<()>, state: &NavState<()>| {
            seen_len = state.len();
            if state.can_jump_back() {
                controller.jump_back();
            }
        };
        nav.render_navigation_bar(&mut bar);
        assert_eq!(seen_len, 2);

        nav.process_pending();
        assert_eq!(nav.presented_index(), 0);
    }
}
