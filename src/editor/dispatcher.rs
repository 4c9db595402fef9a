//! Event dispatch and the edit loop.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::backend::{FilePicker, Persistence, Surface};
use crate::config::EditorConfig;
use crate::editor::render;
use crate::editor::session::Session;
use crate::error::{Error, Result};
use crate::highlight::Compositor;
use crate::input::InputEvent;

/// Whether the edit loop keeps going after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A session wired to its collaborators.
///
/// [`Editor::handle_event`] applies one event; [`Editor::run`] is the
/// blocking read-dispatch-render loop around it. Only surface I/O errors
/// escape; history and file errors become status messages.
pub struct Editor<S, P, F> {
    session: Session,
    surface: S,
    persistence: P,
    picker: F,
    compositor: Compositor,
    config: EditorConfig,
}

impl<S: Surface, P: Persistence, F: FilePicker> Editor<S, P, F> {
    pub fn new(config: EditorConfig, surface: S, persistence: P, picker: F) -> Self {
        Self {
            session: Session::new(&config),
            surface,
            persistence,
            picker,
            compositor: Compositor::new(),
            config,
        }
    }

    #[must_use]
    pub fn with_compositor(mut self, compositor: Compositor) -> Self {
        self.compositor = compositor;
        self
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    #[must_use]
    pub fn picker(&self) -> &F {
        &self.picker
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Load `path` before the first frame. A missing file starts an empty
    /// document under that name.
    pub fn open_startup(&mut self, path: &Path) {
        match self.persistence.read_lines(path) {
            Ok(lines) => self.loaded(lines, path),
            Err(Error::FileNotFound { path }) => {
                info!(path = %path.display(), "starting new file");
                self.session
                    .set_status(format!("New file {}", path.display()));
                self.session.set_file_name(path);
            }
            Err(e) => self.open_failed(path, &e),
        }
        self.recompute_viewport();
    }

    /// Apply one event.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<Flow> {
        let cursor = self.session.cursor();
        debug!(event = event.name(), line = cursor.line, col = cursor.col, "dispatch");

        match event {
            InputEvent::Char(ch) => self.session.insert_char(ch),
            InputEvent::Enter => self.session.newline(),
            InputEvent::Backspace => {
                self.session.backspace();
            }
            InputEvent::ArrowUp => self.session.move_up(),
            InputEvent::ArrowDown => self.session.move_down(),
            InputEvent::ArrowLeft => self.session.move_left(),
            InputEvent::ArrowRight => self.session.move_right(),
            InputEvent::Undo => match self.session.undo() {
                Ok(()) => self.session.set_status("Undone last action"),
                Err(Error::EmptyHistory) => self.session.set_status("Nothing to undo"),
                Err(e) => return Err(e),
            },
            InputEvent::Redo => match self.session.redo() {
                Ok(()) => self.session.set_status("Redone last action"),
                Err(Error::EmptyHistory) => self.session.set_status("Nothing to redo"),
                Err(e) => return Err(e),
            },
            InputEvent::SaveRequested => self.save()?,
            InputEvent::OpenRequested => self.open()?,
            InputEvent::Escape => {
                info!("exit requested");
                return Ok(Flow::Exit);
            }
        }

        self.recompute_viewport();
        Ok(Flow::Continue)
    }

    /// Draw and present the current state.
    pub fn render(&mut self) -> Result<()> {
        render::draw_frame(&mut self.surface, &self.session, &self.compositor);
        self.surface.present()
    }

    /// Render, then dispatch events until Escape.
    pub fn run(&mut self) -> Result<()> {
        self.recompute_viewport();
        self.render()?;
        loop {
            let event = self.surface.next_input_event()?;
            if self.handle_event(event)? == Flow::Exit {
                return Ok(());
            }
            self.render()?;
        }
    }

    fn recompute_viewport(&mut self) {
        let (cols, rows) = self.surface.size();
        let (text_rows, text_cols) = self.config.text_area(cols, rows);
        self.session.recompute_viewport(text_rows, text_cols);
    }

    fn save(&mut self) -> Result<()> {
        let suggested = self.session.file_name().to_path_buf();
        let Some(path) = self.picker.prompt_save_path(&mut self.surface, &suggested)? else {
            debug!("save cancelled");
            self.session.set_status("Save cancelled");
            return Ok(());
        };

        let lines = self.session.document().lines();
        match self.persistence.write_lines(&path, lines) {
            Ok(()) => {
                info!(path = %path.display(), lines = lines.len(), "saved");
                self.session
                    .set_status(format!("File saved as {}", path.display()));
                self.session.set_file_name(path);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "save failed");
                self.session
                    .set_status(format!("Could not save {}: {e}", path.display()));
            }
        }
        Ok(())
    }

    fn open(&mut self) -> Result<()> {
        let Some(path) = self.picker.prompt_open_path(&mut self.surface)? else {
            debug!("open cancelled");
            return Ok(());
        };

        match self.persistence.read_lines(&path) {
            Ok(lines) => self.loaded(lines, &path),
            Err(Error::FileNotFound { path }) => {
                warn!(path = %path.display(), "open: file not found");
                self.session
                    .set_status(format!("File {} not found", path.display()));
            }
            Err(e) => self.open_failed(&path, &e),
        }
        Ok(())
    }

    fn loaded(&mut self, lines: Vec<String>, path: &Path) {
        info!(path = %path.display(), lines = lines.len(), "opened");
        self.session.load(lines, PathBuf::from(path));
        self.session
            .set_status(format!("File {} opened", path.display()));
    }

    fn open_failed(&mut self, path: &Path, error: &Error) {
        warn!(path = %path.display(), %error, "open failed");
        self.session
            .set_status(format!("Could not open {}: {error}", path.display()));
    }
}
