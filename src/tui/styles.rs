//! Front desk color palette and shared styles.

use ratatui::style::{Color, Modifier, Style};

/// Hospital front desk theme.
pub struct Theme;

impl Theme {
    /// Hospital blue, the primary accent.
    pub const PRIMARY: Color = Color::Rgb(37, 99, 235); // #2563EB

    /// Lighter blue for focus and highlights.
    pub const PRIMARY_LIGHT: Color = Color::Rgb(96, 165, 250); // #60A5FA

    /// Green for confirmations and the "Safe" status.
    pub const SUCCESS: Color = Color::Rgb(22, 163, 74); // #16A34A

    /// Amber for unconventional status labels.
    pub const WARNING: Color = Color::Rgb(217, 119, 6); // #D97706

    /// Red for failures and the "Emergency" status.
    pub const DANGER: Color = Color::Rgb(220, 38, 38); // #DC2626

    /// Primary text.
    pub const TEXT: Color = Color::Rgb(241, 245, 249); // #F1F5F9

    /// Dimmed text.
    pub const TEXT_DIM: Color = Color::Rgb(148, 163, 184); // #94A3B8

    /// Panel borders.
    pub const BORDER: Color = Color::Rgb(100, 116, 139); // #64748B

    #[must_use]
    pub fn title() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn subtitle() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    #[must_use]
    pub fn text_dim() -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    #[must_use]
    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    #[must_use]
    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    #[must_use]
    pub fn danger() -> Style {
        Style::default().fg(Self::DANGER)
    }

    #[must_use]
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    #[must_use]
    pub fn border_focused() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    #[must_use]
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_desc() -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    /// Style for a status label. Known labels get semantic colors; anything
    /// else is flagged amber since labels are free text.
    #[must_use]
    pub fn status_label(status: &str) -> Style {
        match status {
            "Safe" => Self::success(),
            "Emergency" => Self::danger(),
            _ => Self::warning(),
        }
    }
}

/// ASCII banner for the main menu.
pub const LOGO: &str = r"
╔╦╗┌─┐┌┬┐┬╔╦╗┌─┐┌─┐┬┌─
║║║├┤  │││ ║║├┤ └─┐├┴┐
╩ ╩└─┘─┴┘┴═╩╝└─┘└─┘┴ ┴
";
