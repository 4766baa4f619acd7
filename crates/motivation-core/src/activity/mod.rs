mod tracker;

pub use tracker::{ActivityState, ActivityTracker, FocusReward};
