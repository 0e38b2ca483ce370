// Slide-state synchronization engine
//
// Keeps one logical "current slide" consistent across scroll position,
// navigation controls, the location fragment and keyboard input. Nothing in
// here knows about the terminal; the TUI host plugs in through `Viewport`.

pub mod controls;
pub mod coordinator;
pub mod fragment;
pub mod input;
pub mod observer;
pub mod state;

pub use coordinator::{SettleMode, SlideCoordinator, Viewport};
pub use fragment::{FragmentParser, Location};
pub use input::{classify_key, KeyDisposition, NavTrigger, StartupNavigation};
pub use observer::{Extent, ScrollObserver};
