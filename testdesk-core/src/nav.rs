//! Screen navigation as a history stack.
//!
//! The stack always holds at least one entry and its top is the current
//! screen. Navigating pushes without deduplication, so revisiting a screen
//! grows the stack; going back pops one entry and is a no-op once only the
//! initial screen remains.

use std::fmt;

/// A top-level navigable view of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Projects,
    ArchivedProjects,
    Requirements,
    Reports,
    Testing,
    Profile,
    Settings,
}

impl Screen {
    /// All screens, in the order navigation menus present them
    pub fn all() -> Vec<Screen> {
        vec![
            Screen::Dashboard,
            Screen::Projects,
            Screen::ArchivedProjects,
            Screen::Requirements,
            Screen::Reports,
            Screen::Testing,
            Screen::Profile,
            Screen::Settings,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Projects => "Projects",
            Screen::ArchivedProjects => "Archived projects",
            Screen::Requirements => "Requirements",
            Screen::Reports => "Reports",
            Screen::Testing => "Testing",
            Screen::Profile => "Profile",
            Screen::Settings => "Settings",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Tracks the active screen and the back-navigation history
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Navigator {
    /// Creates a navigator positioned on the dashboard.
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Dashboard],
        }
    }

    /// The screen currently shown.
    pub fn current(&self) -> Screen {
        *self.stack.last().unwrap_or(&Screen::Dashboard)
    }

    /// Moves to `screen`, recording the move in the history.
    pub fn navigate_to(&mut self, screen: Screen) {
        self.stack.push(screen);
    }

    /// Steps back one screen. At the initial screen this does nothing.
    /// Returns the screen that is current afterwards.
    pub fn go_back(&mut self) -> Screen {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        self.current()
    }

    /// Number of entries in the history, the current screen included.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The full history, oldest first, ending with the current screen.
    pub fn history(&self) -> &[Screen] {
        &self.stack
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
