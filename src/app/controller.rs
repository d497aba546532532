//! Application controller — the state machine driving the multi-page TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tracing::{info, instrument, warn};

use crate::app::context::SessionContext;
use crate::app::effects::ParticleField;
use crate::app::screen::{Screen, ScreenTransition};
use crate::app::screens::{GameScreen, HomeScreen, LoginScreen, ProfileScreen};
use crate::app::settings::AppSettings;

const PARTICLE_COUNT: usize = 20;

/// Active page in the application state machine.
#[derive(Debug)]
enum ActivePage {
    Home(HomeScreen),
    Login(LoginScreen),
    Game(GameScreen),
    Profile(ProfileScreen),
}

impl ActivePage {
    fn render(&self, frame: &mut ratatui::Frame, ctx: &SessionContext) {
        match self {
            ActivePage::Home(s) => s.render(frame, ctx),
            ActivePage::Login(s) => s.render(frame, ctx),
            ActivePage::Game(s) => s.render(frame, ctx),
            ActivePage::Profile(s) => s.render(frame, ctx),
        }
    }

    fn handle_key(
        &mut self,
        key: crossterm::event::KeyEvent,
        ctx: &mut SessionContext,
    ) -> ScreenTransition {
        match self {
            ActivePage::Home(s) => s.handle_key(key, ctx),
            ActivePage::Login(s) => s.handle_key(key, ctx),
            ActivePage::Game(s) => s.handle_key(key, ctx),
            ActivePage::Profile(s) => s.handle_key(key, ctx),
        }
    }

    fn tick(&mut self, ctx: &mut SessionContext) -> ScreenTransition {
        match self {
            ActivePage::Home(s) => s.tick(ctx),
            ActivePage::Login(s) => s.tick(ctx),
            ActivePage::Game(s) => s.tick(ctx),
            ActivePage::Profile(s) => s.tick(ctx),
        }
    }
}

/// Controller that owns the session context and drives the page state
/// machine. There are no ambient globals: all mutable state lives here.
///
/// Call [`AppController::run`] to start the event loop.
pub struct AppController {
    ctx: SessionContext,
    settings: AppSettings,
    particles: ParticleField,
}

impl std::fmt::Debug for AppController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppController")
            .field("ctx", &self.ctx)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl AppController {
    /// Creates a new controller.
    #[instrument(skip(ctx, settings))]
    pub fn new(ctx: SessionContext, settings: AppSettings) -> Self {
        info!("Creating AppController");
        let particles = ParticleField::new(PARTICLE_COUNT, *settings.effects());
        Self {
            ctx,
            settings,
            particles,
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// Draws the active page (with the particle field behind it), polls
    /// for input, ticks animations, and applies page transitions. The
    /// session record is saved one final time on exit.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        info!("Starting application event loop");

        // Returning users land on their profile, everyone else on home.
        let mut page = if self.ctx.session().is_logged_in() {
            ActivePage::Profile(ProfileScreen::new(None))
        } else {
            ActivePage::Home(HomeScreen::new(None))
        };

        let tick = Duration::from_millis(*self.settings.tick_ms());

        loop {
            terminal.draw(|frame| {
                let area = frame.area();
                self.particles.render(frame, area);
                page.render(frame, &self.ctx);
            })?;

            if event::poll(tick)?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let transition = page.handle_key(key, &mut self.ctx);
                page = match self.apply_transition(transition, page) {
                    Some(next) => next,
                    None => return self.quit(),
                };
            }

            self.particles.tick();
            let transition = page.tick(&mut self.ctx);
            page = match self.apply_transition(transition, page) {
                Some(next) => next,
                None => return self.quit(),
            };
        }
    }

    /// Applies a transition, returning the next page or `None` to quit.
    fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActivePage,
    ) -> Option<ActivePage> {
        match transition {
            ScreenTransition::Stay => Some(current),
            ScreenTransition::GoToHome { notice } => Some(ActivePage::Home(HomeScreen::new(notice))),
            ScreenTransition::GoToLogin { provider } => Some(ActivePage::Login(LoginScreen::new(
                provider,
                Duration::from_millis(*self.settings.login_delay_ms()),
            ))),
            ScreenTransition::GoToGame => Some(ActivePage::Game(GameScreen::new())),
            ScreenTransition::GoToProfile { notice } => {
                Some(ActivePage::Profile(ProfileScreen::new(notice)))
            }
            ScreenTransition::Quit => None,
        }
    }

    /// Final save before the terminal is handed back.
    fn quit(&mut self) -> anyhow::Result<()> {
        info!("Application quitting");
        if let Err(e) = self.ctx.save() {
            warn!(error = %e, "Final save failed");
        }
        Ok(())
    }
}
