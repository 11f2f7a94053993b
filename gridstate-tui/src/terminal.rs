//! Raw-mode terminal session.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};

use crate::render::Line;

/// Owns the terminal while the grid runs; restores it on drop.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture,
            event::EnableFocusChange
        )?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Block until at least one event arrives, then drain pending ones.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<Event>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        for (y, line) in lines.iter().enumerate() {
            let Ok(y) = u16::try_from(y) else { break };
            queue!(self.stdout, cursor::MoveTo(0, y))?;
            for span in line {
                if span.style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if span.style.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
                if span.style.reverse {
                    queue!(self.stdout, SetAttribute(Attribute::Reverse))?;
                }
                queue!(
                    self.stdout,
                    Print(&span.text),
                    SetAttribute(Attribute::Reset)
                )?;
            }
        }
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableFocusChange,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
