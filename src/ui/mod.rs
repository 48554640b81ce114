mod plot_layers;
mod screens;
mod styles;
mod ui_config;
mod ui_plot_view;
mod ui_text;

pub(crate) use screens::{render_dashboard, render_error, render_loading};

pub(crate) use styles::{UiStyleExt, setup_custom_visuals};

pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_plot_view::PlotView;
pub use ui_text::UI_TEXT;
