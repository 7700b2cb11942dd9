// Route entries - caller-supplied destinations with a stable identity
use std::fmt;

/// Identifier of a route entry. Two routes are "the same entry" exactly when
/// their ids are equal, regardless of payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(String);

impl RouteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Random v4 id for callers that don't track their own.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RouteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Named transition token. Opaque here; the renderer decides what it means.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TransitionDescriptor(String);

impl TransitionDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SceneConfig {
    pub entering: Option<TransitionDescriptor>,
    pub exiting: Option<TransitionDescriptor>,
}

impl SceneConfig {
    pub fn new(entering: TransitionDescriptor, exiting: TransitionDescriptor) -> Self {
        Self {
            entering: Some(entering),
            exiting: Some(exiting),
        }
    }
}

/// A navigable destination.
#[derive(Clone, Debug)]
pub struct Route<P> {
    pub id: RouteId,
    pub payload: P,
    pub scene_config: Option<SceneConfig>,
}

impl<P> Route<P> {
    pub fn new(id: impl Into<RouteId>, payload: P) -> Self {
        Self {
            id: id.into(),
            payload,
            scene_config: None,
        }
    }

    /// Route with a generated id.
    pub fn anonymous(payload: P) -> Self {
        Self {
            id: RouteId::generate(),
            payload,
            scene_config: None,
        }
    }

    pub fn with_scene_config(mut self, scene_config: SceneConfig) -> Self {
        self.scene_config = Some(scene_config);
        self
    }

    pub fn same_entry(&self, other: &Route<P>) -> bool {
        self.id == other.id
    }

    pub fn entering(&self) -> Option<&TransitionDescriptor> {
        self.scene_config.as_ref().and_then(|c| c.entering.as_ref())
    }

    pub fn exiting(&self) -> Option<&TransitionDescriptor> {
        self.scene_config.as_ref().and_then(|c| c.exiting.as_ref())
    }
}
