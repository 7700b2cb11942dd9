mod navigation;

pub use navigation::{Effect, NavState, NoOp, PushPolicy, Reduced};
