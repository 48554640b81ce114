mod dashboard;
mod status;

pub(crate) use dashboard::render_dashboard;
pub(crate) use status::{render_error, render_loading};
