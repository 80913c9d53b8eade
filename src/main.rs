//! Terminal match-four runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from `tui_match4::term` (no widget library).

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info, warn};

use tui_match4::core::{GameSnapshot, GameState};
use tui_match4::input::{should_quit, InputEvent, InputHandler, PointerMap};
use tui_match4::scores::{submit_score, top_scores, JsonFileStore, ScoreEntry, ScoreStore};
use tui_match4::term::{FrameBuffer, GameView, HudView, TerminalRenderer, Viewport};
use tui_match4::types::{GameAction, TICK_MS, TOP_SCORES_LIMIT};
use tui_match4::AppConfig;

const SUBMITTED_NOTICE: &str = "Score submitted!";

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_logging(&config)?;
    config.log_source();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to a file, never to the terminal the game is drawn on.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Front-end state that lives outside the game.
struct Session {
    store: JsonFileStore,
    top: Vec<ScoreEntry>,
    notice: Option<String>,
}

impl Session {
    fn new(config: &AppConfig) -> Self {
        let mut session = Self {
            store: JsonFileStore::new(&config.scores_path),
            top: Vec::new(),
            notice: None,
        };
        session.reload_scores();
        session
    }

    fn reload_scores(&mut self) {
        match self.store.load() {
            Ok(entries) => self.top = top_scores(entries, TOP_SCORES_LIMIT),
            Err(e) => {
                warn!("could not load scores: {}", e);
                self.notice = Some(e.to_string());
            }
        }
    }

    fn handle(&mut self, event: InputEvent, game: &mut GameState, input: &mut InputHandler) {
        match event {
            InputEvent::Action(GameAction::Restart) => {
                game.apply_action(GameAction::Restart);
                input.clear_name();
                self.notice = None;
            }
            InputEvent::Action(action) => {
                game.apply_action(action);
            }
            InputEvent::SubmitName(name) => {
                match submit_score(&mut self.store, game.game_over(), game.score(), &name) {
                    Ok(entry) => {
                        info!("{} scored {}", entry.player_name, entry.points);
                        self.notice = Some(SUBMITTED_NOTICE.to_string());
                        input.clear_name();
                        self.reload_scores();
                    }
                    Err(e) => {
                        if !e.is_user_facing() {
                            warn!("score submission failed: {}", e);
                        }
                        self.notice = Some(e.to_string());
                    }
                }
            }
        }
    }
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let seed = config.resolved_seed();
    info!("starting with seed {}", seed);

    let mut game = GameState::new(seed);
    let mut session = Session::new(config);

    let view = GameView::new(config.cell_width, 1);
    let mut input = InputHandler::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let layout = view.layout(viewport);
        input.set_pointer_map(PointerMap::new(layout.board_x, view.cell_w()));

        game.snapshot_into(&mut snap);
        let hud = HudView {
            highlighted: input.highlighted(),
            top_scores: &session.top,
            name: input.name(),
            notice: session.notice.as_deref(),
        };
        view.render_into(&snap, &hud, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            let event = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key, game.game_over()) {
                        return Ok(());
                    }
                    input.handle_key(key, game.game_over())
                }
                Event::Mouse(mouse) => input.handle_mouse(mouse, game.game_over()),
                Event::Resize(..) => {
                    term.invalidate();
                    None
                }
                _ => None,
            };
            if let Some(event) = event {
                session.handle(event, &mut game, &mut input);
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);

            if let Some(ev) = game.take_last_event() {
                debug!(
                    "{} match(es) for {} points{}",
                    ev.matches,
                    ev.points,
                    if ev.spin { ", spin" } else { "" }
                );
            }
        }
    }
}
