//! Color constants used by the cube faces and the background.
//!
//! Colors are RGBA with `f32` components in the range [0.0, 1.0].

pub use rgb::Rgba;

/// The color type used throughout spincube. RGBA with f32 components in [0.0, 1.0].
pub type Color = Rgba<f32>;

/// Black (0, 0, 0)
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Red (255, 0, 0)
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Lime (0, 255, 0) - CSS "lime", pure green
pub const LIME: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Blue (0, 0, 255)
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// Yellow (255, 255, 0)
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Magenta (255, 0, 255)
pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0, 1.0);

/// Cyan (0, 255, 255)
pub const CYAN: Color = Color::new(0.0, 1.0, 1.0, 1.0);

/// Very dark gray with a transparent alpha, the default clear color.
pub const CHARCOAL: Color = Color::new(0.1, 0.1, 0.1, 0.0);
