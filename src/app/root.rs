use {
    eframe::{
        Frame,
        egui::{Context, Style},
    },
    poll_promise::Promise,
};

use crate::{
    app::DashboardState,
    config::DashboardSettings,
    data::{FetchOutcome, build_source, spawn_fetch},
    ui::{PlotView, render_dashboard, render_error, render_loading, setup_custom_visuals},
};

pub struct App {
    pub(crate) settings: DashboardSettings,
    /// The single in-flight fetch. `None` once it has resolved.
    fetch: Option<Promise<FetchOutcome>>,
    state: DashboardState,
    pub(crate) plot_view: PlotView,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, settings: DashboardSettings) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let source = build_source(&settings.source);
        log::info!("Requesting analysis via {}", source.describe());
        let fetch = spawn_fetch(source, Some(cc.egui_ctx.clone()));

        Self::with_fetch(settings, fetch)
    }

    /// Build around an already started fetch. `new` is the only place one is started.
    pub(crate) fn with_fetch(settings: DashboardSettings, fetch: Promise<FetchOutcome>) -> Self {
        Self {
            settings,
            fetch: Some(fetch),
            state: DashboardState::Loading,
            plot_view: PlotView::new(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Move the fetch result into the presentation state once it lands.
    /// Returns true on the frame the state changes.
    pub(crate) fn poll_fetch(&mut self) -> bool {
        let Some(promise) = self.fetch.take() else {
            return false;
        };
        match promise.try_take() {
            Ok(outcome) => {
                self.state = DashboardState::from_outcome(outcome);
                true
            }
            Err(pending) => {
                self.fetch = Some(pending);
                false
            }
        }
    }

    pub(crate) fn render(&mut self, ctx: &Context) {
        ctx.style_mut(|s: &mut Style| s.interaction.selectable_labels = false);

        match &self.state {
            DashboardState::Failed(message) => render_error(ctx, message),
            DashboardState::Loading => render_loading(ctx),
            DashboardState::Loaded(dashboard) => render_dashboard(
                ctx,
                dashboard,
                &mut self.plot_view,
                self.settings.annotate_change_points,
            ),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_fetch();
        self.render(ctx);
    }
}
