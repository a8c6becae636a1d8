use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use glyphrain_config::{Settings, default_log_path};
use glyphrain_core::Preset;
use glyphrain_engine::{AnimationDriver, FrameOutcome, MatrixRain};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Stylize},
    text::Line,
};
use tracing::{info, warn};

use crate::canvas::{CellCanvas, CellContext};
use crate::cli::Cli;

mod canvas;
mod cli;
mod css;
mod logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::load_default()?,
    };
    if let Some(preset) = cli.preset {
        settings.preset = preset;
    }
    settings.rain = settings.rain.merge(cli.overrides());

    if cli.write_config {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => Settings::default_path()?,
        };
        settings.save(&config_path)?;
        println!("wrote {}", config_path.display());
        return Ok(());
    }

    // An explicit log file must work; the default one is best effort.
    match &cli.log_file {
        Some(path) => logging::init(path)?,
        None => {
            if let Ok(path) = default_log_path() {
                logging::init_or_warn(&path);
            }
        }
    }

    // Reject a bad configuration before the terminal switches screens.
    let config = settings.resolve();
    let rain = MatrixRain::new(&config).wrap_err("invalid rain settings")?;
    info!(preset = %settings.preset, ?config, "starting");

    let terminal = ratatui::init();
    let result = App::new(rain, settings.preset, &terminal).and_then(|app| app.run(terminal));
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
pub struct App {
    /// The running animation.
    driver: AnimationDriver<CellCanvas, CellContext>,
    /// Preset the animation was last mounted with.
    preset: Preset,
    /// Frames are held while paused.
    paused: bool,
    /// Show the key help line.
    show_help: bool,
    /// Origin of the frame clock.
    started: Instant,
}

impl App {
    /// Mount `rain` on the whole terminal.
    pub fn new(
        rain: MatrixRain,
        preset: Preset,
        terminal: &DefaultTerminal,
    ) -> color_eyre::Result<Self> {
        let size = terminal.size()?;
        Ok(Self {
            driver: mount(rain, size.width, size.height),
            preset,
            paused: false,
            show_help: false,
            started: Instant::now(),
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        loop {
            let outcome = self.step(self.now_ms());
            if !outcome.wants_next_frame() {
                break;
            }
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Advance the animation to `now_ms`. While paused nothing is drawn, but a
    /// settled resize still rebuilds the grid.
    fn step(&mut self, now_ms: f64) -> FrameOutcome {
        if self.paused && !self.driver.is_disposed() {
            self.driver.poll_resize(now_ms);
            FrameOutcome::Throttled
        } else {
            self.driver.tick(now_ms)
        }
    }

    /// Renders the rain, plus the help line when requested.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(self.driver.context(), area);

        if self.show_help {
            let [_, help_area] =
                Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
            let help = Line::from(vec![
                "q".bold().fg(Color::White),
                " quit  ".dark_gray(),
                "p".bold().fg(Color::White),
                format!(" preset ({})  ", self.preset).dark_gray(),
                "space".bold().fg(Color::White),
                if self.paused { " resume  " } else { " pause  " }.dark_gray(),
                "h".bold().fg(Color::White),
                " hide help".dark_gray(),
            ])
            .centered();
            frame.render_widget(help, help_area);
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with a short timeout so ticks keep arriving at display rate.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => self.on_resize(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('p')) => self.cycle_preset(),
            (_, KeyCode::Char(' ')) => self.paused = !self.paused,
            (_, KeyCode::Char('h')) => self.show_help = !self.show_help,
            _ => {}
        }
    }

    /// The terminal changed size; the grid follows once resizing settles.
    fn on_resize(&mut self, cols: u16, rows: u16) {
        self.driver.canvas_mut().set_viewport(cols, rows);
        self.driver.context_mut().resize(cols, rows);
        let now = self.now_ms();
        self.driver.notify_resize(now);
    }

    /// Tear down the current animation and mount the next preset.
    fn cycle_preset(&mut self) {
        let next = self.preset.next();
        match MatrixRain::new(&next.config()) {
            Ok(rain) => {
                let (width, height) = self.driver.context().size();
                self.driver.teardown();
                self.driver = mount(rain, width, height);
                self.preset = next;
                info!(preset = %next, "switched preset");
            }
            Err(err) => warn!(preset = %next, %err, "preset rejected"),
        }
    }

    /// Stop the animation; the main loop exits on the next tick.
    fn quit(&mut self) {
        self.driver.teardown();
    }

    fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }
}

fn mount(rain: MatrixRain, cols: u16, rows: u16) -> AnimationDriver<CellCanvas, CellContext> {
    rain.mount(CellCanvas::new(cols, rows), CellContext::new(cols, rows))
}
