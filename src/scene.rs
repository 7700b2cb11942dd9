// Scene composition - the contract with scene renderers and navigation bars
use crate::controller::NavController;
use crate::model::{Route, RouteId, TransitionDescriptor};
use crate::state::NavState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Absolute,
    Relative,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overflow {
    Visible,
    Hidden,
}

/// Container style for one scene. `None` fields are left to whatever style
/// sits underneath when merging.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneStyle {
    pub position: Option<Position>,
    pub left: Option<f32>,
    pub right: Option<f32>,
    pub top: Option<f32>,
    pub bottom: Option<f32>,
    pub overflow: Option<Overflow>,
}

impl Default for SceneStyle {
    /// Full-bleed absolute layout.
    fn default() -> Self {
        Self {
            position: Some(Position::Absolute),
            left: Some(0.0),
            right: Some(0.0),
            top: Some(0.0),
            bottom: Some(0.0),
            overflow: None,
        }
    }
}

impl SceneStyle {
    /// Style every scene container starts from.
    pub fn base() -> Self {
        Self {
            overflow: Some(Overflow::Hidden),
            ..Self::default()
        }
    }

    pub fn empty() -> Self {
        Self {
            position: None,
            left: None,
            right: None,
            top: None,
            bottom: None,
            overflow: None,
        }
    }

    /// `self` layered over `base`; set fields in `self` win.
    pub fn merged_over(&self, base: &SceneStyle) -> SceneStyle {
        SceneStyle {
            position: self.position.or(base.position),
            left: self.left.or(base.left),
            right: self.right.or(base.right),
            top: self.top.or(base.top),
            bottom: self.bottom.or(base.bottom),
            overflow: self.overflow.or(base.overflow),
        }
    }
}

/// Maps a route to whatever the host displays.
pub trait SceneRenderer<P> {
    type Output;

    fn render_scene(&mut self, route: &Route<P>) -> Self::Output;
}

impl<P, O, F> SceneRenderer<P> for F
where
    F: FnMut(&Route<P>) -> O,
{
    type Output = O;

    fn render_scene(&mut self, route: &Route<P>) -> O {
        self(route)
    }
}

/// Navigation chrome: gets the mutation API and a read-only snapshot.
pub trait NavigationBar<P> {
    fn render(&mut self, navigator: &NavController<P>, nav_state: &NavState<P>);
}

impl<P, F> NavigationBar<P> for F
where
    F: FnMut(&NavController<P>, &NavState<P>),
{
    fn render(&mut self, navigator: &NavController<P>, nav_state: &NavState<P>) {
        self(navigator, nav_state)
    }
}

/// One rendered stack entry. Later entries stack on top (`z_index == index`).
#[derive(Debug)]
pub struct Scene<'a, P, O> {
    pub key: &'a RouteId,
    pub route: &'a Route<P>,
    pub index: usize,
    pub z_index: usize,
    pub is_presented: bool,
    pub style: SceneStyle,
    pub entering: Option<&'a TransitionDescriptor>,
    pub exiting: Option<&'a TransitionDescriptor>,
    pub content: O,
}

/// Invokes `renderer` once per entry, oldest first.
pub fn compose_scenes<'a, P, R>(
    state: &'a NavState<P>,
    scene_style: &SceneStyle,
    renderer: &mut R,
) -> Vec<Scene<'a, P, R::Output>>
where
    R: SceneRenderer<P>,
{
    let style = scene_style.merged_over(&SceneStyle::base());
    state
        .route_stack()
        .iter()
        .enumerate()
        .map(|(index, route)| Scene {
            key: &route.id,
            route,
            index,
            z_index: index,
            is_presented: index == state.presented_index(),
            style: style.clone(),
            entering: route.entering(),
            exiting: route.exiting(),
            content: renderer.render_scene(route),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SceneConfig;

    #[test]
    fn test_default_style_is_full_bleed() {
        let style = SceneStyle::default();
        assert_eq!(style.position, Some(Position::Absolute));
        assert_eq!(style.left, Some(0.0));
        assert_eq!(style.bottom, Some(0.0));
        assert_eq!(style.overflow, None);
    }

    #[test]
    fn test_caller_style_wins_over_base() {
        let custom = SceneStyle {
            top: Some(44.0),
            overflow: Some(Overflow::Visible),
            ..SceneStyle::empty()
        };
        let merged = custom.merged_over(&SceneStyle::base());
        assert_eq!(merged.top, Some(44.0));
        assert_eq!(merged.overflow, Some(Overflow::Visible));
        assert_eq!(merged.position, Some(Position::Absolute));
        assert_eq!(merged.left, Some(0.0));
    }

    #[test]
    fn test_compose_scenes_orders_and_tags_entries() {
        let stack = vec![
            Route::new("a", 1),
            Route::new("b", 2).with_scene_config(SceneConfig::new(
                TransitionDescriptor::new("push_from_right"),
                TransitionDescriptor::new("fade"),
            )),
            Route::new("c", 3),
        ];
        let state = NavState::from_stack(stack).unwrap().jump_to(1).state;

        let mut calls = 0;
        let mut renderer = |route: &Route<i32>| {
            calls += 1;
            route.payload * 10
        };
        let scenes = compose_scenes(&state, &SceneStyle::default(), &mut renderer);

        assert_eq!(calls, 3);
        assert_eq!(scenes.len(), 3);
        for (i, scene) in scenes.iter().enumerate() {
            assert_eq!(scene.z_index, i);
            assert_eq!(scene.key, &scene.route.id);
            assert_eq!(scene.style.overflow, Some(Overflow::Hidden));
        }
        assert_eq!(scenes[2].content, 30);
        assert!(scenes[1].is_presented);
        assert!(!scenes[2].is_presented);
        assert_eq!(scenes[1].entering.map(|t| t.name()), Some("push_from_right"));
        assert_eq!(scenes[1].exiting.map(|t| t.name()), Some("fade"));
        assert!(scenes[0].entering.is_none());
    }
}
