//! Application state and core logic

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::site::{Page, Site, HEADER_HEIGHT};
use crate::state::{
    AnchorTarget, ControllerOptions, FieldKind, FormController, PageSession, PendingValidation,
    SessionOptions, SubmitOutcome,
};
use crate::submit::{ContactSubmission, SimulatedSubmitter};
use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::collections::VecDeque;
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Height of the status bar below the page
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Rows moved per mouse wheel notch
const WHEEL_STEP: i32 = 3;

/// Default terminal size until the first draw reports the real one (height, width)
const DEFAULT_TERMINAL_SIZE: (u16, u16) = (24, 80);

pub type ContactController = FormController<SimulatedSubmitter>;

/// Main application struct
pub struct App {
    site: Site,
    config: SiteConfig,
    /// Widgets of the page on screen
    pub session: PageSession,
    /// Contact form of the page on screen, when it has a complete one
    pub contact: Option<ContactController>,
    debounce_tx: UnboundedSender<PendingValidation>,
    debounce_rx: UnboundedReceiver<PendingValidation>,
    /// Blocking alerts, oldest first
    alerts: VecDeque<String>,
    /// Payload waiting to be sent once the "sending" state has been drawn
    pending_submission: Option<ContactSubmission>,
    /// Transient message for the status bar
    pub status_message: Option<String>,
    /// Terminal size (height, width)
    pub terminal_size: (u16, u16),
    quit: bool,
}

impl App {
    /// Create the app on the site's landing page. Must run inside a tokio runtime.
    pub fn new(config: SiteConfig) -> Result<Self> {
        let site = Site::load(config.site_path.as_deref())?;
        let landing = site
            .landing_page()
            .ok_or_else(|| anyhow!("site document defines no pages"))?;

        let (debounce_tx, debounce_rx) = mpsc::unbounded_channel();
        let terminal_size = DEFAULT_TERMINAL_SIZE;
        let session = PageSession::load(
            landing,
            Self::session_options(&config),
            Self::viewport_height(terminal_size),
        );
        let contact = Self::attach_contact(landing, &config, debounce_tx.clone());

        Ok(Self {
            site,
            config,
            session,
            contact,
            debounce_tx,
            debounce_rx,
            alerts: VecDeque::new(),
            pending_submission: None,
            status_message: None,
            terminal_size,
            quit: false,
        })
    }

    fn session_options(config: &SiteConfig) -> SessionOptions {
        SessionOptions {
            dark: config.dark_theme(),
            scroll_duration: config.scroll_duration(),
        }
    }

    fn viewport_height((height, _): (u16, u16)) -> u16 {
        height.saturating_sub(STATUS_BAR_HEIGHT)
    }

    fn attach_contact(
        page: &Page,
        config: &SiteConfig,
        tx: UnboundedSender<PendingValidation>,
    ) -> Option<ContactController> {
        let action = page
            .contact_form()
            .map(|form| form.action.clone())
            .unwrap_or_default();
        let submitter = SimulatedSubmitter::new(action)
            .with_latency(config.submit_latency())
            .failing(config.simulate_failure())
            .redact_all(config.defensive());
        let options = ControllerOptions {
            debounce: config.debounce(),
            defensive: config.defensive(),
        };

        match FormController::attach(page, submitter, options, tx) {
            Ok(controller) => Some(controller),
            Err(err) => {
                tracing::error!(error = %err, "Form initialization aborted");
                None
            }
        }
    }

    /// The page on screen
    pub fn page(&self) -> Option<&Page> {
        self.site.page(&self.session.path).ok()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// The alert currently blocking input
    pub fn alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    pub fn push_alert(&mut self, message: impl Into<String>) {
        self.alerts.push_back(message.into());
    }

    /// Whether keyboard input goes to the contact form
    pub fn in_form(&self) -> bool {
        self.contact.as_ref().is_some_and(|c| c.is_focused())
    }

    /// Whether the main loop should redraw at animation speed
    pub fn is_animating(&self) -> bool {
        self.session.scroll.is_animating()
    }

    pub fn set_terminal_size(&mut self, height: u16, width: u16) {
        self.terminal_size = (height, width);
        self.session
            .set_viewport_height(Self::viewport_height(self.terminal_size));
    }

    /// Replace the page on screen. Every widget and the form are rebuilt.
    pub fn load_page(&mut self, path: &str) -> Result<(), SiteError> {
        let page = self.site.page(path)?;

        // Timers of the old form must not reach the new one
        self.contact = None;
        while self.debounce_rx.try_recv().is_ok() {}

        self.session = PageSession::load(
            page,
            Self::session_options(&self.config),
            Self::viewport_height(self.terminal_size),
        );
        self.contact = Self::attach_contact(page, &self.config, self.debounce_tx.clone());
        self.pending_submission = None;
        Ok(())
    }

    /// Load another page and jump to `hash` on it
    pub fn navigate(&mut self, path: &str, hash: &str) {
        match self.load_page(path) {
            Ok(()) => {
                self.session.scroll_to_hash(hash, None);
                self.status_message = Some(self.session.title.clone());
            }
            Err(err) => {
                tracing::error!(error = %err, recoverable = err.is_recoverable(), "Navigation failed");
                self.status_message = Some(err.to_string());
            }
        }
    }

    /// Follow a navigation link the way a click would
    pub fn follow_link(&mut self, href: &str) {
        let Some(target) = self.session.anchors.as_ref().and_then(|a| a.follow(href)) else {
            return;
        };
        match target {
            AnchorTarget::Page { path, hash } => self.navigate(&path, &hash),
            AnchorTarget::Section(hash) => {
                self.session.scroll_to_hash(&hash, Some(Instant::now()));
            }
            AnchorTarget::Top => {
                self.session.scroll_to_hash("", Some(Instant::now()));
            }
        }
    }

    /// Validate fields whose debounce timers fired
    pub fn drain_debounce(&mut self) {
        while let Ok(fired) = self.debounce_rx.try_recv() {
            if let Some(contact) = self.contact.as_mut() {
                contact.on_debounce(fired);
            }
        }
    }

    /// Advance timers and animations
    pub fn tick(&mut self, now: Instant) {
        self.drain_debounce();
        self.session.tick(now);
    }

    /// Handle keyboard input
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Alerts are modal
        if !self.alerts.is_empty() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.alerts.pop_front();
            }
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        self.status_message = None;

        if self.in_form() {
            self.handle_form_key(key);
        } else if self.session.menu.as_ref().is_some_and(|m| m.is_expanded()) {
            self.handle_menu_key(key);
        } else {
            self.handle_page_key(key);
        }
        Ok(())
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        let page_step = i32::from(
            Self::viewport_height(self.terminal_size)
                .saturating_sub(HEADER_HEIGHT)
                .max(1),
        );

        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('m') => match self.session.menu.as_mut() {
                Some(menu) => menu.toggle(),
                None => self.status_message = Some("No menu on this page".to_string()),
            },
            KeyCode::Char('t') => match self.session.theme.as_mut() {
                Some(theme) => theme.toggle(),
                None => self.status_message = Some("No theme toggle on this page".to_string()),
            },
            KeyCode::Char(']') => {
                if let Some(carousel) = self.session.carousel.as_mut() {
                    carousel.next();
                }
            }
            KeyCode::Char('[') => {
                if let Some(carousel) = self.session.carousel.as_mut() {
                    carousel.prev();
                }
            }
            KeyCode::Char('c') => self.enter_form(),
            KeyCode::Up | KeyCode::Char('k') => self.session.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.session.scroll_by(1),
            KeyCode::PageUp => self.session.scroll_by(-page_step),
            KeyCode::PageDown | KeyCode::Char(' ') => self.session.scroll_by(page_step),
            KeyCode::Home => {
                self.session.scroll_to_hash("", Some(Instant::now()));
            }
            KeyCode::End => self.session.scroll_to_bottom(),
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        let Some(menu) = self.session.menu.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => menu.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => menu.select_next(),
            KeyCode::Esc | KeyCode::Char('m') => menu.close(),
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Enter => {
                let href = menu.selected_link().map(|link| link.href.clone());
                menu.close();
                if let Some(href) = href {
                    self.follow_link(&href);
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(contact) = self.contact.as_mut() else {
            return;
        };
        let on_button = contact.form().is_submit_button_active();

        match key.code {
            KeyCode::Char('s') if key.modifiers.intersects(crate::platform::SUBMIT_MODIFIERS) => {
                self.request_submit();
            }
            KeyCode::Tab => contact.focus_next(),
            KeyCode::BackTab => contact.focus_prev(),
            KeyCode::Esc => contact.leave(),
            KeyCode::Enter if on_button => {
                if contact.can_submit() {
                    self.request_submit();
                }
            }
            KeyCode::Enter => match contact.form().active_kind() {
                Some(kind) if kind.is_multiline() => contact.input('\n'),
                _ => contact.focus_next(),
            },
            KeyCode::Char(c)
                if !on_button && key.modifiers.difference(KeyModifiers::SHIFT).is_empty() =>
            {
                contact.input(c)
            }
            KeyCode::Backspace if !on_button => contact.backspace(),
            _ => {}
        }
    }

    /// Move keyboard focus to the contact form and bring it on screen
    fn enter_form(&mut self) {
        let Some(contact) = self.contact.as_mut() else {
            self.status_message = Some("No contact form on this page".to_string());
            return;
        };
        contact.enter(FieldKind::Name);
        if let Some(row) = self.session.layout.form_row {
            self.session.scroll_to_row(row, Some(Instant::now()));
        }
    }

    /// Validate the form and queue its payload for sending
    fn request_submit(&mut self) {
        let Some(contact) = self.contact.as_mut() else {
            return;
        };
        match contact.begin_submit() {
            Ok(payload) => {
                self.pending_submission = Some(payload);
                self.status_message = Some("Sending...".to_string());
            }
            Err(outcome) => self.apply_outcome(outcome),
        }
    }

    pub fn has_pending_submission(&self) -> bool {
        self.pending_submission.is_some()
    }

    /// Send a queued submission, if any
    pub async fn flush_submission(&mut self) {
        let Some(payload) = self.pending_submission.take() else {
            return;
        };
        let Some(contact) = self.contact.as_mut() else {
            return;
        };
        let outcome = contact.finish_submit(payload).await;
        self.apply_outcome(outcome);
    }

    fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        if let Some(alert) = outcome.alert() {
            self.push_alert(alert);
        }
        self.status_message = match &outcome {
            SubmitOutcome::Submitted(receipt) => Some(format!("Message sent ({})", receipt.id)),
            SubmitOutcome::Failed(_) => None,
            SubmitOutcome::Invalid { .. } => {
                if let Some(row) = self.session.layout.form_row {
                    self.session.scroll_to_row(row, Some(Instant::now()));
                }
                Some("Please fix the highlighted fields".to_string())
            }
        };
    }

    /// Pasted text goes to the focused form field
    pub fn handle_paste(&mut self, text: &str) {
        if !self.alerts.is_empty() {
            return;
        }
        if let Some(contact) = self.contact.as_mut().filter(|c| c.is_focused()) {
            contact.paste(text);
        }
    }

    /// Handle mouse input
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if !self.alerts.is_empty() {
            return Ok(());
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => self.session.scroll_by(-WHEEL_STEP),
            MouseEventKind::ScrollDown => self.session.scroll_by(WHEEL_STEP),
            _ => {}
        }
        Ok(())
    }
}
