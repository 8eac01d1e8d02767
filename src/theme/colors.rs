//! Color definitions for textquill themes.
//!
//! This module defines the [`ThemeColors`] struct which contains all color
//! values used in the textquill terminal UI. Colors are organized into two
//! categories: UI elements and semantic colors.

use ratatui::style::Color;

/// Defines all colors used in a textquill theme.
///
/// - **UI colors**: text area, line-number gutter, status line
/// - **Semantic colors**: mode badges, prompts and messages
///
/// # Examples
///
/// ```
/// use textquill::theme::colors::ThemeColors;
///
/// let dark = ThemeColors::default_dark();
/// println!("Background: {:?}", dark.background);
///
/// let light = ThemeColors::default_light();
/// println!("Background: {:?}", light.background);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // UI colors
    /// Main background color for the editor.
    pub background: Color,
    /// Main foreground/text color for the editor.
    pub foreground: Color,
    /// Line numbers in the gutter.
    pub line_number: Color,
    /// Line number of the line holding the cursor.
    pub current_line_number: Color,
    /// Background color for the status line.
    pub status_line_bg: Color,
    /// Foreground/text color for the status line.
    pub status_line_fg: Color,

    // Semantic colors
    /// Mode badge while inserting.
    pub mode_insert: Color,
    /// Mode badge in normal mode.
    pub mode_normal: Color,
    /// `:` and `/` prompts.
    pub prompt: Color,
    /// Color for error messages.
    pub error: Color,
    /// Color for warning messages.
    pub warning: Color,
    /// Color for informational messages.
    pub info: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    ///
    /// ANSI colors adapt to the user's terminal color scheme, so the actual RGB
    /// values displayed will depend on their terminal configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use textquill::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_dark();
    /// assert_eq!(colors.background, Color::Reset);
    /// assert_eq!(colors.status_line_bg, Color::White);
    /// ```
    pub fn default_dark() -> Self {
        Self {
            background: Color::Reset, // Use terminal's default background
            foreground: Color::Gray,
            line_number: Color::DarkGray,
            current_line_number: Color::Yellow,
            status_line_bg: Color::White,
            status_line_fg: Color::Black,

            mode_insert: Color::Green,
            mode_normal: Color::LightBlue,
            prompt: Color::Gray,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::LightBlue,
        }
    }

    /// Returns the default light color scheme.
    pub fn default_light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(56, 58, 66),
            line_number: Color::Rgb(160, 161, 167),
            current_line_number: Color::Rgb(152, 104, 1),
            status_line_bg: Color::Rgb(238, 238, 238),
            status_line_fg: Color::Rgb(56, 58, 66),

            mode_insert: Color::Rgb(80, 161, 79),
            mode_normal: Color::Rgb(1, 132, 188),
            prompt: Color::Rgb(56, 58, 66),
            error: Color::Rgb(202, 18, 67),
            warning: Color::Rgb(152, 104, 1),
            info: Color::Rgb(1, 132, 188),
        }
    }

    /// Returns the Gruvbox Dark color scheme.
    ///
    /// A retro groove color scheme with warm, earthy tones.
    /// Based on the popular Gruvbox theme by morhetz.
    pub fn gruvbox_dark() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40),          // dark bg
            foreground: Color::Rgb(235, 219, 178),       // light fg
            line_number: Color::Rgb(146, 131, 116),      // gray
            current_line_number: Color::Rgb(250, 189, 47), // yellow
            status_line_bg: Color::Rgb(60, 56, 54),      // darker bg
            status_line_fg: Color::Rgb(235, 219, 178),   // light fg

            mode_insert: Color::Rgb(184, 187, 38),  // green
            mode_normal: Color::Rgb(131, 165, 152), // aqua
            prompt: Color::Rgb(235, 219, 178),
            error: Color::Rgb(251, 73, 52),    // red
            warning: Color::Rgb(250, 189, 47), // yellow
            info: Color::Rgb(131, 165, 152),   // aqua
        }
    }

    /// Returns the Nord color scheme.
    ///
    /// An arctic, north-bluish color palette.
    /// Based on the Nord theme by Arctic Ice Studio.
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),     // polar night darkest
            foreground: Color::Rgb(216, 222, 233),  // snow storm lightest
            line_number: Color::Rgb(76, 86, 106),   // polar night gray
            current_line_number: Color::Rgb(136, 192, 208), // frost cyan
            status_line_bg: Color::Rgb(59, 66, 82), // polar night
            status_line_fg: Color::Rgb(216, 222, 233),

            mode_insert: Color::Rgb(163, 190, 140), // aurora green
            mode_normal: Color::Rgb(136, 192, 208), // frost cyan
            prompt: Color::Rgb(216, 222, 233),
            error: Color::Rgb(191, 97, 106),    // aurora red
            warning: Color::Rgb(235, 203, 139), // aurora yellow
            info: Color::Rgb(136, 192, 208),
        }
    }

    /// Returns the Dracula color scheme.
    pub fn dracula() -> Self {
        Self {
            background: Color::Rgb(40, 42, 54),
            foreground: Color::Rgb(248, 248, 242),
            line_number: Color::Rgb(98, 114, 164), // comment
            current_line_number: Color::Rgb(241, 250, 140),
            status_line_bg: Color::Rgb(68, 71, 90), // current line
            status_line_fg: Color::Rgb(248, 248, 242),

            mode_insert: Color::Rgb(80, 250, 123),  // green
            mode_normal: Color::Rgb(189, 147, 249), // purple
            prompt: Color::Rgb(248, 248, 242),
            error: Color::Rgb(255, 85, 85),
            warning: Color::Rgb(255, 184, 108),
            info: Color::Rgb(139, 233, 253),
        }
    }

    /// Returns the Solarized Dark color scheme.
    ///
    /// Based on the Solarized theme by Ethan Schoonover.
    pub fn solarized_dark() -> Self {
        Self {
            background: Color::Rgb(0, 43, 54),      // base03
            foreground: Color::Rgb(131, 148, 150),  // base0
            line_number: Color::Rgb(88, 110, 117),  // base01
            current_line_number: Color::Rgb(181, 137, 0), // yellow
            status_line_bg: Color::Rgb(7, 54, 66),  // base02
            status_line_fg: Color::Rgb(147, 161, 161), // base1

            mode_insert: Color::Rgb(133, 153, 0), // green
            mode_normal: Color::Rgb(38, 139, 210), // blue
            prompt: Color::Rgb(147, 161, 161),
            error: Color::Rgb(220, 50, 47),
            warning: Color::Rgb(203, 75, 22),
            info: Color::Rgb(42, 161, 152),
        }
    }
}
