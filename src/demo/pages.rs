// Demo payloads and the scene renderer that turns them into cards
use chrono::{DateTime, Local};
use navstack::{Route, SceneConfig, TransitionDescriptor};

#[derive(Clone, Debug)]
pub struct Page {
    pub title: String,
    pub serial: usize,
    pub opened_at: DateTime<Local>,
}

impl Page {
    pub fn new(title: impl Into<String>, serial: usize) -> Self {
        Self {
            title: title.into(),
            serial,
            opened_at: Local::now(),
        }
    }
}

/// What one scene shows.
#[derive(Clone, Debug, PartialEq)]
pub struct PageView {
    pub heading: String,
    pub detail: String,
}

pub fn home_route() -> Route<Page> {
    Route::new("home", Page::new("Home", 0))
}

/// A fresh page route with a unique id.
pub fn page_route(serial: usize) -> Route<Page> {
    Route::new(
        format!("page-{}", serial),
        Page::new(format!("Page {}", serial), serial),
    )
    .with_scene_config(SceneConfig::new(
        TransitionDescriptor::new("push_from_right"),
        TransitionDescriptor::new("fade_out"),
    ))
}

pub fn render_page(route: &Route<Page>) -> PageView {
    let transition = match (route.entering(), route.exiting()) {
        (Some(entering), Some(exiting)) => format!("{} / {}", entering.name(), exiting.name()),
        _ => "none".to_string(),
    };
    PageView {
        heading: route.payload.title.clone(),
        detail: format!(
            "#{}  ·  id {}  ·  opened {}  ·  transitions {}",
            route.payload.serial,
            route.id,
            route.payload.opened_at.format("%H:%M:%S"),
            transition
        ),
    }
}
