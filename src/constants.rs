use raylib::prelude::Color;

pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const CONTROL_BAR_HEIGHT: f32 = 56.0;     // Height of the bottom bar holding buttons and breadcrumbs
pub const BUTTON_WIDTH: f32 = 96.0;           // Width of the previous/next buttons
pub const BAR_PADDING: f32 = 8.0;             // Gap between bar elements and the window edge
pub const MARKER_GAP: f32 = 4.0;              // Gap between two breadcrumb markers
pub const FONT_SIZE: i32 = 18;
pub const SLIDE_FILL: f32 = 0.9;              // Fraction of the slide area an image may occupy

pub const BACKGROUND: Color = Color::BLACK;
pub const BAR_BACKGROUND: Color = Color::new(24, 24, 24, 255);
pub const BUTTON_ENABLED: Color = Color::new(70, 70, 70, 255);
pub const BUTTON_DISABLED: Color = Color::new(40, 40, 40, 255);
pub const MARKER_IDLE: Color = Color::new(50, 50, 50, 255);
pub const MARKER_ACTIVE: Color = Color::new(200, 120, 30, 255);
pub const TEXT_ENABLED: Color = Color::WHITE;
pub const TEXT_DISABLED: Color = Color::GRAY;
