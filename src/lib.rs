//! Route-stack navigation history.
//!
//! A [`Navigator`] owns an ordered stack of [`Route`]s and the index of the
//! entry currently presented. It changes only through the action API
//! (`push`, `pop`, `jump_to`, `replace`, `reset_to`, ...), every operation
//! being a pure transition over [`NavState`]. Out-of-range input is clamped
//! or ignored, never an error.
//!
//! Hosts render the stack through [`SceneRenderer`] and may show navigation
//! chrome through [`NavigationBar`], which receives a [`NavController`]
//! (deferred mutation handle) and a read-only [`NavState`] snapshot.

pub mod action;
pub mod controller;
pub mod error;
pub mod model;
pub mod navigator;
pub mod scene;
pub mod state;

pub use action::NavAction;
pub use controller::NavController;
pub use error::NavError;
pub use model::{Route, RouteId, SceneConfig, TransitionDescriptor};
pub use navigator::{Navigator, NavigatorOptions, SubscriptionId};
pub use scene::{compose_scenes, NavigationBar, Overflow, Position, Scene, SceneRenderer, SceneStyle};
pub use state::{Effect, NavState, NoOp, PushPolicy, Reduced};
