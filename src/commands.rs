//! Command pattern for key event handling in the pager demo.
//!
//! Key input is translated into [`PagerCommand`] values by [`KeyMapper`],
//! keeping keybindings testable without a terminal.
//!
//! # Example
//!
//! ```ignore
//! let command = KeyMapper::map_key(key_event);
//! app.update(command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

// ============================================================================
// Pager Commands
// ============================================================================

/// All commands the pager demo can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerCommand {
    // === Application Control ===
    /// Exit the demo.
    Quit,

    // === Page Navigation ===
    /// Go to the previous page.
    PreviousPage,
    /// Go to the next page.
    NextPage,
    /// Go to page 1.
    FirstPage,
    /// Go to the last page.
    LastPage,

    // === Focus ===
    /// Focus the next activatable item.
    FocusNext,
    /// Focus the previous activatable item.
    FocusPrevious,
    /// Activate the focused item.
    Activate,

    // === Visibility ===
    /// Show one more sibling on each side of the current page.
    IncreaseSiblings,
    /// Show one fewer sibling on each side of the current page.
    DecreaseSiblings,
    /// Show one more boundary page at each end.
    IncreaseBoundary,
    /// Show one fewer boundary page at each end.
    DecreaseBoundary,
    ToggleFirst,
    TogglePrevious,
    ToggleNext,
    ToggleLast,

    // === No Operation ===
    /// Unhandled key.
    Noop,
}

impl PagerCommand {
    /// Returns `true` if this command would exit the demo.
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this command changes the pager configuration
    /// rather than the page.
    #[must_use]
    pub const fn is_visibility(&self) -> bool {
        matches!(
            self,
            Self::IncreaseSiblings
                | Self::DecreaseSiblings
                | Self::IncreaseBoundary
                | Self::DecreaseBoundary
                | Self::ToggleFirst
                | Self::TogglePrevious
                | Self::ToggleNext
                | Self::ToggleLast
        )
    }
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to pager commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to a command.
    ///
    /// Key releases map to [`PagerCommand::Noop`] so that terminals reporting
    /// both press and release do not fire commands twice.
    #[must_use]
    pub fn map_key(key: KeyEvent) -> PagerCommand {
        if key.kind == KeyEventKind::Release {
            return PagerCommand::Noop;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => PagerCommand::Quit,
                _ => PagerCommand::Noop,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => PagerCommand::Quit,
            KeyCode::Left | KeyCode::Char('h') => PagerCommand::PreviousPage,
            KeyCode::Right | KeyCode::Char('l') => PagerCommand::NextPage,
            KeyCode::Home | KeyCode::Char('g') => PagerCommand::FirstPage,
            KeyCode::End | KeyCode::Char('G') => PagerCommand::LastPage,
            KeyCode::Tab => PagerCommand::FocusNext,
            KeyCode::BackTab => PagerCommand::FocusPrevious,
            KeyCode::Enter | KeyCode::Char(' ') => PagerCommand::Activate,
            KeyCode::Char('+' | '=') => PagerCommand::IncreaseSiblings,
            KeyCode::Char('-') => PagerCommand::DecreaseSiblings,
            KeyCode::Char(']') => PagerCommand::IncreaseBoundary,
            KeyCode::Char('[') => PagerCommand::DecreaseBoundary,
            KeyCode::Char('f') => PagerCommand::ToggleFirst,
            KeyCode::Char('p') => PagerCommand::TogglePrevious,
            KeyCode::Char('n') => PagerCommand::ToggleNext,
            KeyCode::Char('L') => PagerCommand::ToggleLast,
            _ => PagerCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use rstest::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[rstest]
    #[case(KeyCode::Char('q'), PagerCommand::Quit)]
    #[case(KeyCode::Esc, PagerCommand::Quit)]
    #[case(KeyCode::Left, PagerCommand::PreviousPage)]
    #[case(KeyCode::Char('h'), PagerCommand::PreviousPage)]
    #[case(KeyCode::Right, PagerCommand::NextPage)]
    #[case(KeyCode::Char('l'), PagerCommand::NextPage)]
    #[case(KeyCode::Home, PagerCommand::FirstPage)]
    #[case(KeyCode::Char('g'), PagerCommand::FirstPage)]
    #[case(KeyCode::End, PagerCommand::LastPage)]
    #[case(KeyCode::Char('G'), PagerCommand::LastPage)]
    #[case(KeyCode::Tab, PagerCommand::FocusNext)]
    #[case(KeyCode::BackTab, PagerCommand::FocusPrevious)]
    #[case(KeyCode::Enter, PagerCommand::Activate)]
    #[case(KeyCode::Char(' '), PagerCommand::Activate)]
    #[case(KeyCode::Char('+'), PagerCommand::IncreaseSiblings)]
    #[case(KeyCode::Char('='), PagerCommand::IncreaseSiblings)]
    #[case(KeyCode::Char('-'), PagerCommand::DecreaseSiblings)]
    #[case(KeyCode::Char(']'), PagerCommand::IncreaseBoundary)]
    #[case(KeyCode::Char('['), PagerCommand::DecreaseBoundary)]
    #[case(KeyCode::Char('f'), PagerCommand::ToggleFirst)]
    #[case(KeyCode::Char('p'), PagerCommand::TogglePrevious)]
    #[case(KeyCode::Char('n'), PagerCommand::ToggleNext)]
    #[case(KeyCode::Char('L'), PagerCommand::ToggleLast)]
    #[case(KeyCode::Char('x'), PagerCommand::Noop)]
    #[case(KeyCode::F(1), PagerCommand::Noop)]
    fn test_map_key(#[case] code: KeyCode, #[case] expected: PagerCommand) {
        assert_eq!(KeyMapper::map_key(key(code)), expected);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyMapper::map_key(event), PagerCommand::Quit);

        let event = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert_eq!(KeyMapper::map_key(event), PagerCommand::Noop);
    }

    #[test]
    fn test_release_is_ignored() {
        let event = KeyEvent::new_with_kind_and_state(
            KeyCode::Right,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(KeyMapper::map_key(event), PagerCommand::Noop);
    }

    #[test]
    fn test_command_classification() {
        assert!(PagerCommand::Quit.is_exit());
        assert!(!PagerCommand::NextPage.is_exit());
        assert!(PagerCommand::ToggleLast.is_visibility());
        assert!(PagerCommand::DecreaseBoundary.is_visibility());
        assert!(!PagerCommand::Activate.is_visibility());
    }
}
