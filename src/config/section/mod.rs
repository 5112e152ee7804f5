//! Configuration section definitions.

mod head;
mod nav;
mod sidebar;
mod theme;

pub use head::HeadTag;
pub use nav::{NavEntry, NavItem};
pub use sidebar::{Sidebar, SidebarSection};
pub use theme::{Footer, SocialLink, ThemeConfig};
