mod route;

pub use route::{Route, RouteId, SceneConfig, TransitionDescriptor};
