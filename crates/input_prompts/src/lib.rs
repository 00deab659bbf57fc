//! Input prompt resolution for context-aware glyph display.
//!
//! The crate turns abstract action identifiers such as `Player/Jump` into the
//! glyph of whatever device the player used last, and rewrites tagged text
//! (`"Press [Player/Jump] to jump"`) with renderer-agnostic glyph references.
//! Action definitions and device prompt datasets are plain data loaded through
//! [`PromptSettings`]; device activity is fed in by the host through
//! [`PromptContext`].
//!
//! # Example
//!
//! ```ignore
//! use input_prompts::{Device, DeviceKind, PromptContext, PromptSettings};
//!
//! let settings = PromptSettings::load("prompts.ron")?;
//! let pad = Device::new(1, "XInputController", DeviceKind::Gamepad);
//!
//! let mut prompts = PromptContext::default();
//! prompts.initialize(Some(settings), &[], &[pad.clone()]);
//! prompts.on_button_pressed(&pad);
//!
//! let text = prompts.format("Press [Player/Jump] to jump");
//! ```

pub mod action;
pub mod binding;
pub mod catalog;
pub mod context;
pub mod dataset;
pub mod device;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod rewriter;
pub mod settings;
pub mod tracker;

// Re-export main types
pub use action::{ActionAsset, ActionBinding, ActionMap};
pub use binding::{BindingDescriptor, LogicalActionPath};
pub use catalog::BindingCatalog;
pub use context::{NOT_INITIALIZED_TEXT, PromptContext};
pub use dataset::{DeviceDataset, DevicePromptEntry, DeviceSpriteEntry, GlyphRef};
pub use device::{Device, DeviceChange, DeviceId, DeviceKind, DeviceSignal, DeviceSource, Platform};
pub use error::{ResolveError, SettingsError};
pub use registry::DevicePromptRegistry;
pub use resolver::{Diagnostic, Resolution};
pub use rewriter::{PromptTemplate, TagDelimiters};
pub use settings::{PlatformOverride, PromptSettings};
pub use tracker::{ActiveDeviceTracker, ObserverId};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
