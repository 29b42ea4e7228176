use crossterm::{
    cursor::{Hide, Show},
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, Clear, ClearType,
        EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use std::io::{self, stdout};

/// Raw-mode alternate screen, restored on drop
pub struct TerminalSession {
    key_release: bool,
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on Drop undoes whatever succeeded
        let mut session = Self { key_release: false };

        let mut out = stdout();
        execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;

        if supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            session.key_release = true;
        }
        tracing::debug!(key_release = session.key_release, "terminal ready");

        Ok(session)
    }

    /// Whether the terminal reports key releases
    pub fn key_release(&self) -> bool {
        self.key_release
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = stdout();
        if self.key_release {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(out, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
