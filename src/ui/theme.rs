use crossterm::style::Color;

pub struct Theme {
    pub border: Color,  // Grey
    pub item: Color,    // Yellow
    pub empty: Color,   // Dim grey
    pub prompt: Color,  // Blue
    pub success: Color, // Green
    pub warning: Color, // Orange
    pub error: Color,   // Red
    pub notice: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    border: Color::Rgb { r: 108, g: 112, b: 134 },
    item: Color::Rgb { r: 249, g: 226, b: 175 },
    empty: Color::Rgb { r: 69, g: 71, b: 90 },
    prompt: Color::Rgb { r: 137, g: 180, b: 250 },
    success: Color::Rgb { r: 166, g: 227, b: 161 },
    warning: Color::Rgb { r: 250, g: 179, b: 135 },
    error: Color::Rgb { r: 243, g: 139, b: 168 },
    notice: Color::Rgb { r: 245, g: 194, b: 231 }, // Pink for the sold-out notice
};
