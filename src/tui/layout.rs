//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: tab bar, main view, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Tab bar at the top
    pub tab_bar: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tab_bar: vertical[0],
            main: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the home view
pub struct HomeLayout {
    /// Greeting and date
    pub header: Rect,
    /// Ambient state panel
    pub state_panel: Rect,
    /// Quick stats row
    pub stats: Rect,
}

impl HomeLayout {
    /// Calculate home view layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(7),    // State panel
                Constraint::Length(5), // Quick stats
            ])
            .split(area);

        Self {
            header: chunks[0],
            state_panel: chunks[1],
            stats: chunks[2],
        }
    }
}

/// Layout for the profile view
pub struct ProfileLayout {
    /// Patient info card
    pub info: Rect,
    /// Collections area (medications, faces, notes)
    pub collections: Rect,
    /// Device / full sync row
    pub device: Rect,
}

impl ProfileLayout {
    /// Calculate profile view layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8), // Info card
                Constraint::Min(9),    // Collections
                Constraint::Length(4), // Device row
            ])
            .split(area);

        Self {
            info: chunks[0],
            collections: chunks[1],
            device: chunks[2],
        }
    }

    /// Split the collections area into the three lists
    pub fn collection_columns(collections: Rect) -> (Rect, Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(38),
                Constraint::Percentage(28),
                Constraint::Percentage(34),
            ])
            .split(collections);
        (chunks[0], chunks[1], chunks[2])
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
