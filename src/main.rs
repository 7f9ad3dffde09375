//! Weather widget binary: terminal UI, or one-shot markup with `--markup`

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
};
use tracing::info;
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{DebugRunOutput, DebugSession, DebugSessionError, ReplayItem};
use weather_widget::action::Action;
use weather_widget::api::OpenMeteoClient;
use weather_widget::card::OutputView;
use weather_widget::components::{
    Component, SearchBar, SearchBarProps, WidgetView, WidgetViewProps,
};
use weather_widget::config::{Args, WidgetConfig};
use weather_widget::effect::{self, Effect};
use weather_widget::headless;
use weather_widget::logging;
use weather_widget::reducer::reducer;
use weather_widget::state::AppState;

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum WidgetComponentId {
    Input,
    Output,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum WidgetContext {
    Main,
    Search,
}

impl EventRoutingState<WidgetComponentId, WidgetContext> for AppState {
    fn focused(&self) -> Option<WidgetComponentId> {
        if self.editing {
            Some(WidgetComponentId::Input)
        } else {
            Some(WidgetComponentId::Output)
        }
    }

    fn modal(&self) -> Option<WidgetComponentId> {
        None
    }

    fn binding_context(&self, id: WidgetComponentId) -> WidgetContext {
        match id {
            WidgetComponentId::Output => WidgetContext::Main,
            WidgetComponentId::Input => WidgetContext::Search,
        }
    }

    fn default_context(&self) -> WidgetContext {
        WidgetContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref())?;

    let config = WidgetConfig::from(&args);
    let client = OpenMeteoClient::new(config.api.clone());
    info!(startup = %config.startup.name, "weather widget starting");

    if args.markup {
        let initial = match args.query {
            Some(query) => Action::SearchSubmit(query),
            None => Action::WeatherLoad(config.startup.clone()),
        };
        let state = headless::run_to_completion(&client, AppState::new(), initial).await;
        println!("{}", OutputView::from_state(&state).to_markup());
        return Ok(());
    }

    let debug = DebugSession::new(args.debug);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(|| async { Ok::<AppState, io::Error>(AppState::new()) })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(
        &mut terminal,
        &debug,
        store,
        client,
        Action::WeatherLoad(config.startup),
        replay_actions,
    )
    .await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct WidgetUi {
    search: SearchBar,
    view: WidgetView,
}

impl WidgetUi {
    fn new() -> Self {
        Self {
            search: SearchBar::new(),
            view: WidgetView,
        }
    }

    fn search_props(state: &AppState, is_focused: bool) -> SearchBarProps<'_> {
        SearchBarProps {
            query: &state.query,
            unit: state.unit,
            is_focused,
            on_query_change: Action::SearchQueryChange,
            on_query_submit: Action::SearchSubmit,
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<WidgetComponentId>,
    ) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Location input
            Constraint::Min(1),    // Output region + hints
        ])
        .split(area);

        event_ctx.set_component_area(WidgetComponentId::Input, chunks[0]);
        event_ctx.set_component_area(WidgetComponentId::Output, chunks[1]);

        let props = Self::search_props(state, render_ctx.is_focused() && state.editing);
        self.search.render(frame, chunks[0], props);

        let props = WidgetViewProps {
            state,
            is_focused: render_ctx.is_focused() && !state.editing,
        };
        self.view.render(frame, chunks[1], props);
    }

    fn handle_output_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = WidgetViewProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.view.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }

    fn handle_input_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = Self::search_props(state, true);
        let actions: Vec<_> = self.search.handle_event(event, props).into_iter().collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    client: OpenMeteoClient,
    startup: Action,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(WidgetUi::new()));
    let mut bus: EventBus<AppState, Action, WidgetComponentId, WidgetContext> = EventBus::new();
    let keybindings: Keybindings<WidgetContext> = Keybindings::new();

    let ui_output = Rc::clone(&ui);
    bus.register(WidgetComponentId::Output, move |event, state| {
        ui_output
            .borrow_mut()
            .handle_output_event(&event.kind, state)
    });

    let ui_input = Rc::clone(&ui);
    bus.register(WidgetComponentId::Input, move |event, state| {
        ui_input.borrow_mut().handle_input_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(startup),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(&client, effect, ctx),
        )
        .await
}

/// Spawn each lookup under its own key so none cancels another
fn handle_effect(client: &OpenMeteoClient, effect: Effect, ctx: &mut EffectContext<Action>) {
    let key = effect.task_key();
    let client = client.clone();
    ctx.tasks().spawn(key, effect::perform(client, effect));
}
