use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use insaeng_config::Config;
use insaeng_core::{FontScale, Language, locale, parse_birth_date, weeks_lived};
use insaeng_grid::{FillAnimation, TICK_MS};
use ratatui::{DefaultTerminal, Frame};

mod ui;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = insaeng_config::load();
    let terminal = ratatui::init();
    let result = App::new(&config).run(terminal);
    ratatui::restore();
    result
}

/// Which screen is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Banner, date entry, and the looping intro animation.
    Home,
    /// The life grid for a submitted birth date.
    Grid,
}

/// The main application; every piece of session state is an explicit field.
pub struct App {
    /// Is the application running?
    pub(crate) running: bool,
    /// Current screen.
    pub(crate) screen: Screen,
    /// Display language.
    pub(crate) language: Language,
    /// Text emphasis level.
    pub(crate) font_scale: FontScale,
    /// Birth-date entry buffer.
    pub(crate) input: String,
    /// Weeks lived for the accepted birth date, if one was submitted.
    pub(crate) weeks_lived: Option<i64>,
    /// Show the localized invalid-date message.
    pub(crate) invalid_input: bool,
    /// Reminder currently on display.
    pub(crate) reminder: &'static str,
    /// Rotation paused by the user.
    pub(crate) reminder_paused: bool,
    /// Elapsed-ms timestamp of the last reminder rotation.
    pub(crate) last_rotation_ms: u64,
    /// Banner for this home-screen visit.
    pub(crate) banner: &'static str,
    /// Home-screen fill animation.
    pub(crate) intro: FillAnimation,
    /// Seconds between automatic reminder rotations.
    pub(crate) reminder_secs: u64,
    /// Wall-clock origin for elapsed-ms timing.
    pub(crate) started: Instant,
    /// Seed captured at startup for reminder and banner picks.
    pub(crate) seed: u64,
}

impl App {
    /// Construct a new instance of [`App`] from the loaded config.
    pub fn new(config: &Config) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        // Capture system time as seed for banner and reminder picks
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        let language = config.language();
        Self {
            running: false,
            screen: Screen::Home,
            language,
            font_scale: config.font_scale(),
            input: String::new(),
            weeks_lived: None,
            invalid_input: false,
            reminder: locale::pick_reminder(language, None, seed),
            reminder_paused: false,
            last_rotation_ms: 0,
            banner: insaeng_banners::pick(seed),
            intro: FillAnimation::new(),
            reminder_secs: config.reminder_secs.max(1),
            started: Instant::now(),
            seed,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.intro.start(self.elapsed_ms());
        while self.running {
            let elapsed = self.elapsed_ms();
            self.intro.tick(elapsed);
            self.rotate_reminder_if_due(elapsed);
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        match self.screen {
            Screen::Home => ui::render_home(self, frame),
            Screen::Grid => ui::render_grid(self, frame),
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with a short timeout so the fill animation keeps ticking.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(TICK_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(_, _) => self.on_resize(),
                Event::Mouse(_) => {}
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
            (_, KeyCode::Enter) => self.submit(),
            (_, KeyCode::Backspace) => {
                self.input.pop();
            }
            (_, KeyCode::Char('l')) => self.toggle_language(),
            (_, KeyCode::Char('f')) => self.cycle_font_scale(),
            (_, KeyCode::Char('p')) => self.toggle_reminder_pause(),
            (_, KeyCode::Char('h')) => self.back_to_home(),
            (_, KeyCode::Char(c)) if c.is_ascii_digit() || c == '-' => self.input.push(c),
            _ => {}
        }
    }

    /// Advance the reminder once the rotation interval has elapsed.
    fn rotate_reminder_if_due(&mut self, elapsed_ms: u64) {
        if self.reminder_paused {
            return;
        }
        if elapsed_ms.saturating_sub(self.last_rotation_ms) < self.reminder_secs * 1000 {
            return;
        }
        self.rotate_reminder(elapsed_ms);
    }

    /// Pick a reminder different from the one on display.
    fn rotate_reminder(&mut self, elapsed_ms: u64) {
        let seed = self.seed.wrapping_add(elapsed_ms).wrapping_mul(31);
        self.reminder = locale::pick_reminder(self.language, Some(self.reminder), seed);
        self.last_rotation_ms = elapsed_ms;
    }

    /// Validate the entry and switch to the life grid.
    fn submit(&mut self) {
        let elapsed = self.elapsed_ms();
        if !self.reminder_paused {
            self.rotate_reminder(elapsed);
        }
        match parse_birth_date(&self.input) {
            Ok(birth) => {
                self.invalid_input = false;
                self.intro.stop();
                self.weeks_lived = Some(weeks_lived(birth, Local::now().date_naive()));
                self.screen = Screen::Grid;
            }
            Err(_) => {
                // only the message line changes; whatever is on screen stays
                self.invalid_input = true;
            }
        }
    }

    /// Return to the banner screen and restart the intro loop.
    fn back_to_home(&mut self) {
        let elapsed = self.elapsed_ms();
        self.screen = Screen::Home;
        self.weeks_lived = None;
        self.invalid_input = false;
        self.banner = insaeng_banners::pick(self.seed.wrapping_add(elapsed));
        self.intro.restart(elapsed);
        if !self.reminder_paused {
            self.rotate_reminder(elapsed);
        }
    }

    /// Toggle between Chinese and English.
    fn toggle_language(&mut self) {
        self.language = self.language.toggle();
        // a paused reminder stays as-is, even across a language switch
        if !self.reminder_paused {
            self.rotate_reminder(self.elapsed_ms());
        }
    }

    /// Cycle through the text emphasis levels.
    fn cycle_font_scale(&mut self) {
        self.font_scale = self.font_scale.next();
    }

    /// Pause or resume the automatic reminder rotation.
    fn toggle_reminder_pause(&mut self) {
        self.reminder_paused = !self.reminder_paused;
    }

    /// A resize mid-animation restarts the fill from a clean row.
    fn on_resize(&mut self) {
        if self.intro.is_running() {
            self.intro.restart(self.elapsed_ms());
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
