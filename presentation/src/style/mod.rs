//! Static per-agent styling: icons and accent colors

pub mod catalog;
