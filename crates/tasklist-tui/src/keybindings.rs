//! Maps key presses to controller actions for the focused widget.

use crate::app::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tasklist_domain::TaskFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    ToggleSelected,
    DeleteSelected,
    SelectFilter(TaskFilter),
    CycleFilter,
    ToggleSort,
    SelectNext,
    SelectPrev,
    FocusNext,
    FocusPrev,
    FocusList,
    FocusDescription,
    Edit(KeyCode),
    ToggleHelp,
    DismissWarning,
    Quit,
}

/// Resolves a key for the current UI state.
///
/// `blocked` is true while a warning is shown; only dismissal (and Ctrl-C)
/// gets through.
pub fn action_for(key: KeyEvent, focus: Focus, blocked: bool) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('a') if !blocked => Some(Action::Add),
            _ => None,
        };
    }

    if blocked {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(Action::DismissWarning),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::BackTab => return Some(Action::FocusPrev),
        _ => {}
    }

    match focus {
        Focus::Description | Focus::DueDate => match key.code {
            KeyCode::Enter => Some(Action::Add),
            KeyCode::Esc => Some(Action::FocusList),
            code => Some(Action::Edit(code)),
        },
        Focus::List => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectPrev),
            KeyCode::Char(' ') | KeyCode::Char('x') => Some(Action::ToggleSelected),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteSelected),
            KeyCode::Char('1') => Some(Action::SelectFilter(TaskFilter::All)),
            KeyCode::Char('2') => Some(Action::SelectFilter(TaskFilter::Active)),
            KeyCode::Char('3') => Some(Action::SelectFilter(TaskFilter::Completed)),
            KeyCode::Char('f') => Some(Action::CycleFilter),
            KeyCode::Char('s') => Some(Action::ToggleSort),
            KeyCode::Char('a') | KeyCode::Char('i') => Some(Action::FocusDescription),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            _ => None,
        },
    }
}

/// Footer hints for the focused widget.
pub fn hints(focus: Focus) -> &'static [(&'static str, &'static str)] {
    match focus {
        Focus::Description | Focus::DueDate => &[
            ("Enter", "add"),
            ("Tab", "next field"),
            ("Esc", "list"),
            ("Ctrl-C", "quit"),
        ],
        Focus::List => &[
            ("a", "add"),
            ("space", "done"),
            ("d", "delete"),
            ("1/2/3", "all/active/completed"),
            ("s", "sort"),
            ("?", "help"),
            ("q", "quit"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_in_description_adds() {
        assert_eq!(
            action_for(press(KeyCode::Enter), Focus::Description, false),
            Some(Action::Add)
        );
    }

    #[test]
    fn test_letters_in_inputs_are_text() {
        assert_eq!(
            action_for(press(KeyCode::Char('q')), Focus::Description, false),
            Some(Action::Edit(KeyCode::Char('q')))
        );
        assert_eq!(
            action_for(press(KeyCode::Char('q')), Focus::List, false),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_warning_blocks_everything_but_dismiss() {
        assert_eq!(action_for(press(KeyCode::Char('d')), Focus::List, true), None);
        assert_eq!(action_for(press(KeyCode::Tab), Focus::List, true), None);
        assert_eq!(
            action_for(press(KeyCode::Esc), Focus::Description, true),
            Some(Action::DismissWarning)
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_c, Focus::List, true), Some(Action::Quit));
    }

    #[test]
    fn test_filter_keys() {
        assert_eq!(
            action_for(press(KeyCode::Char('3')), Focus::List, false),
            Some(Action::SelectFilter(TaskFilter::Completed))
        );
    }
}
