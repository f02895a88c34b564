use std::fmt;

/// How pointer gestures are interpreted on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    /// Freehand strokes, committed as the pointer moves
    #[default]
    Line,
    /// Outlined rectangles, committed on release
    Rectangle,
}

impl DrawingMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Line => Self::Rectangle,
            Self::Rectangle => Self::Line,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Rectangle => "Rectangle",
        }
    }

    /// Text for the toggle button
    pub fn label(self) -> String {
        format!("Mode: {}", self.name())
    }
}

impl fmt::Display for DrawingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
