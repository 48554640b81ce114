//! Headless chart model. Everything here is plain data so it can be tested without a window.

mod axis;
mod model;

pub use axis::anchored_date_ticks;
pub use model::{ChangePointMarker, ChartModel, PlottedPoint};
