//! Purely decorative pieces, grouped by the section that uses them.

mod benefits;
mod header;
mod services;

pub use benefits::GradientLight;
pub use header::{BackgroundCircles, HamburgerMenu, Rings, SideLines};
pub use services::{Gradient, PhotoChatMessage, VideoBar, VideoChatMessage};
