/// Terminal host for the wireframe renderer
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use wire3d_core::{RenderConfig, Scene};

pub mod renderer;

pub use renderer::TerminalCanvas;

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    scene: Scene,
    canvas: TerminalCanvas,
    frame_time: Duration,
    running: bool,
    last_report: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(scene: Scene, config: &RenderConfig) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self::with_size(scene, config, cols as usize, rows as usize))
    }

    /// Build the app for a known grid size without querying the terminal
    pub fn with_size(scene: Scene, config: &RenderConfig, cols: usize, rows: usize) -> Self {
        Self {
            scene,
            canvas: TerminalCanvas::new(cols, rows, config.width, config.height),
            frame_time: config.frame_duration(),
            running: true,
            last_report: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;

        let result = execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)
            .and_then(|()| {
                log::info!(
                    "render loop started: {} triangles, frame budget {:?}",
                    self.scene.triangle_count(),
                    self.frame_time
                );
                self.main_loop()
            });

        // Cleanup runs whatever happened above
        let restored = restore_terminal(&mut stdout(), terminal::disable_raw_mode);
        log::info!("render loop stopped");

        result.and(restored)
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.running {
            let frame_start = Instant::now();

            while event::poll(Duration::ZERO)? {
                let event = event::read()?;
                self.handle_event(event);
            }

            self.render()?;
            self.scene.advance();

            // Pad the frame; an overrun is not made up later
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_time {
                std::thread::sleep(self.frame_time - elapsed);
            }
            log::trace!("frame took {:?}", frame_start.elapsed());

            let now = Instant::now();
            if (now - self.last_report).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_report).as_secs_f32();
                self.frame_count = 0;
                self.last_report = now;
            }
        }

        Ok(())
    }

    /// Apply one input event; quitting takes effect at the next frame boundary
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.running = false,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    self.running = false
                }
                KeyCode::Char('f') => {
                    let fill = !self.scene.fill();
                    self.scene.set_fill(fill);
                    log::debug!("fill {}", if fill { "on" } else { "off" });
                }
                _ => {}
            },
            Event::Resize(cols, rows) => self.canvas.resize(cols as usize, rows as usize),
            _ => {}
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.scene.render(&mut self.canvas);

        let mut stdout = stdout();
        self.canvas.present(&mut stdout)?;

        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "wire3d | FPS: {:.1} | Triangles: {} | Controls: F=Fill Q=Quit",
                self.fps,
                self.scene.triangle_count()
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

/// Leave raw mode and the alternate screen; both steps always run and the
/// first failure is reported
fn restore_terminal<W, F>(writer: &mut W, disable_raw_mode: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce() -> io::Result<()>,
{
    let raw = disable_raw_mode();
    let screen = execute!(writer, terminal::LeaveAlternateScreen, cursor::Show);
    raw.and(screen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire3d_core::Mesh;

    fn app() -> TerminalApp {
        let config = RenderConfig::default();
        let scene = Scene::new(vec![Mesh::cube(2.0)], &config);
        TerminalApp::with_size(scene, &config, 80, 24)
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_quit_keys() {
        for event in [
            key(KeyCode::Char('q'), KeyModifiers::NONE),
            key(KeyCode::Esc, KeyModifiers::NONE),
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = app();
            app.handle_event(event);
            assert!(!app.is_running());
        }
    }

    #[test]
    fn test_plain_c_does_not_quit() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(app.is_running());
    }

    #[test]
    fn test_fill_toggle() {
        let mut app = app();
        assert!(!app.scene().fill());
        app.handle_event(key(KeyCode::Char('f'), KeyModifiers::NONE));
        assert!(app.scene().fill());
        app.handle_event(key(KeyCode::Char('f'), KeyModifiers::NONE));
        assert!(!app.scene().fill());
    }

    #[test]
    fn test_resize_rebuilds_canvas() {
        let mut app = app();
        app.handle_event(Event::Resize(120, 40));
        assert_eq!(app.canvas.size(), (120, 40));
    }

    #[test]
    fn test_restore_leaves_screen_when_raw_mode_fails() {
        let mut out = Vec::new();
        let result = restore_terminal(&mut out, || Err(io::Error::new(io::ErrorKind::Other, "raw")));

        assert_eq!(result.unwrap_err().to_string(), "raw");
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[?1049l"));
        assert!(text.contains("\x1b[?25h"));
    }

    #[test]
    fn test_restore_succeeds() {
        let mut out = Vec::new();
        assert!(restore_terminal(&mut out, || Ok(())).is_ok());
        assert!(!out.is_empty());
    }

    #[test]
    fn test_frame_budget_from_config() {
        let config = RenderConfig {
            target_fps: 50,
            ..RenderConfig::default()
        };
        let app = TerminalApp::with_size(Scene::new(Vec::new(), &config), &config, 10, 10);
        assert_eq!(app.frame_time, Duration::from_millis(20));
    }
}
