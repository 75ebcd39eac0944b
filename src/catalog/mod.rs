//! Fixed catalogs for eduprompt.
//!
//! Defines the ten visual style presets users pick from and the four
//! downstream image-generation platforms prompts are tailored to. Both are
//! immutable, compile-time catalogs; nothing here is configurable at runtime.

pub mod platform;
pub mod style;

pub use platform::Platform;
pub use style::StylePreset;
