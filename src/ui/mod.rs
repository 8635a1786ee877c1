//! Terminal presentation: capability detection, design tokens, and the
//! blocks used to render deploy events.

pub mod blocks;
pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;

pub use context::UiContext;
