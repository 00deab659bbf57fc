//! The prompt context: catalogs, active device and formatting in one object.
//!
//! A [`PromptContext`] is owned by whoever composes the application and is
//! passed by reference to the code that feeds device signals or formats text.
//! All calls are synchronous and expected on one thread (e.g. the frame
//! update). Re-initializing while another caller holds a [`Resolution`] is
//! prevented by the borrow checker; re-initializing between frames is the
//! caller's responsibility.

use crate::action::ActionAsset;
use crate::catalog::BindingCatalog;
use crate::dataset::{DeviceDataset, GlyphRef};
use crate::device::{Device, DeviceChange, DeviceSignal, DeviceSource, Platform};
use crate::error::ResolveError;
use crate::registry::DevicePromptRegistry;
use crate::resolver::{self, Resolution};
use crate::rewriter::{PromptTemplate, TagDelimiters};
use crate::settings::PromptSettings;
use crate::tracker::{ActiveDeviceTracker, ObserverId};
use tracing::{info, warn};

/// Returned by [`PromptContext::format`] before initialization.
pub const NOT_INITIALIZED_TEXT: &str = "INPUT PROMPTS NOT INITIALIZED";

/// Everything built from settings at initialization.
#[derive(Debug)]
struct PromptState {
    catalog: BindingCatalog,
    registry: DevicePromptRegistry,
    platform_override: Option<DeviceDataset>,
    delimiters: TagDelimiters,
    template: PromptTemplate,
}

/// Resolves action tags into glyph references for the active device.
#[derive(Debug)]
pub struct PromptContext {
    platform: Platform,
    state: Option<PromptState>,
    tracker: ActiveDeviceTracker,
}

impl Default for PromptContext {
    fn default() -> Self {
        Self::new(Platform::current())
    }
}

impl PromptContext {
    /// Create an uninitialized context for the given running platform.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            state: None,
            tracker: ActiveDeviceTracker::new(),
        }
    }

    /// (Re)build catalogs from `settings` plus `action_sources` and pick the
    /// initial device from `devices`.
    ///
    /// Every call starts from scratch; only change observers survive. Missing
    /// settings leave the context uninitialized, so formatting keeps returning
    /// [`NOT_INITIALIZED_TEXT`].
    pub fn initialize(
        &mut self,
        settings: Option<PromptSettings>,
        action_sources: &[ActionAsset],
        devices: &(impl DeviceSource + ?Sized),
    ) {
        self.state = None;
        self.tracker.reset();

        let Some(settings) = settings else {
            warn!("Input prompt settings are missing, prompts are disabled");
            return;
        };

        let catalog = BindingCatalog::build(settings.action_assets.iter().chain(action_sources));
        let delimiters = settings.delimiters();
        let template = settings.template();
        let platform_override = settings.platform_override(self.platform).cloned();
        let PromptSettings {
            device_datasets,
            default_device_priority,
            ..
        } = settings;
        let registry = DevicePromptRegistry::build(device_datasets);

        self.tracker.init(default_device_priority, devices);

        match &platform_override {
            Some(dataset) => info!(
                "Input prompts initialized: {} actions, platform {} forced to '{}'",
                catalog.len(),
                self.platform,
                dataset.sprite_sheet
            ),
            None => info!(
                "Input prompts initialized: {} actions, {} devices registered, active device {}",
                catalog.len(),
                registry.len(),
                self.tracker
                    .current()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "none".to_string())
            ),
        }

        self.state = Some(PromptState {
            catalog,
            registry,
            platform_override,
            delimiters,
            template,
        });
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// Platform used to select an override dataset.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The device considered active, ignoring any platform override.
    pub fn active_device(&self) -> Option<&Device> {
        self.tracker.current()
    }

    /// Dataset prompts are currently drawn from.
    pub fn active_dataset(&self) -> Result<&DeviceDataset, ResolveError> {
        let state = self.state.as_ref().ok_or(ResolveError::NotInitialized)?;
        resolver::active_dataset(
            state.platform_override.as_ref(),
            &state.registry,
            self.tracker.current(),
        )
    }

    /// Resolve an action path into prompt entries of the active dataset.
    pub fn resolve(&self, action_path: &str) -> Result<Resolution<'_>, ResolveError> {
        let state = self.state.as_ref().ok_or(ResolveError::NotInitialized)?;
        let dataset = self.active_dataset()?;
        let device = match (&state.platform_override, self.tracker.current()) {
            (None, Some(device)) => device.name.as_str(),
            _ => dataset.label(),
        };
        resolver::resolve(&state.catalog, dataset, device, action_path)
    }

    /// Glyph of the first prompt entry for an action.
    ///
    /// Composite bindings are not displayed as a whole here; only their first
    /// part is returned. Use [`format`](Self::format) for full composites.
    pub fn resolve_single_glyph(&self, action_path: &str) -> Option<GlyphRef> {
        self.resolve(action_path).ok()?.first_glyph()
    }

    /// Glyph named `name` in the active dataset's sprite list.
    pub fn lookup_named_glyph(&self, name: &str) -> Option<GlyphRef> {
        let dataset = self.active_dataset().ok()?;
        match dataset.sprite_named(name) {
            Some(sprite) => Some(dataset.glyph(&sprite.glyph_id)),
            None => {
                warn!("No sprite named '{name}' in '{}'", dataset.label());
                None
            }
        }
    }

    /// Distinct tags in `text`, using the configured delimiters.
    pub fn tags<'t>(&self, text: &'t str) -> Vec<&'t str> {
        match &self.state {
            Some(state) => state.delimiters.scan(text),
            None => Vec::new(),
        }
    }

    /// Replace every tag in `text` with glyph references for the active device.
    ///
    /// Tags that fail to resolve are replaced by their diagnostic token
    /// (e.g. `MISSING_ACTION Player/Fly`).
    pub fn format(&self, text: &str) -> String {
        let Some(state) = &self.state else {
            return NOT_INITIALIZED_TEXT.to_string();
        };

        state
            .delimiters
            .rewrite(text, |tag| match self.resolve(tag) {
                Ok(resolution) => state.template.render(&resolution.glyphs()),
                Err(err) => err.to_string(),
            })
    }

    /// A button was pressed on `device`. Returns `true` if the active device changed.
    pub fn on_button_pressed(&mut self, device: &Device) -> bool {
        self.tracker.on_button_pressed(device)
    }

    /// Connectivity of `device` changed. Returns `true` if the active device changed.
    pub fn on_device_change(
        &mut self,
        device: &Device,
        change: DeviceChange,
        devices: &(impl DeviceSource + ?Sized),
    ) -> bool {
        self.tracker.on_device_change(device, change, devices)
    }

    /// Dispatch a device signal to the matching handler.
    pub fn handle_signal(
        &mut self,
        signal: &DeviceSignal,
        devices: &(impl DeviceSource + ?Sized),
    ) -> bool {
        match signal {
            DeviceSignal::ButtonPressed(device) => self.on_button_pressed(device),
            DeviceSignal::Changed(device, change) => {
                self.on_device_change(device, *change, devices)
            }
        }
    }

    /// Be told about every active-device change.
    pub fn subscribe(&mut self, observer: impl FnMut(Option<&Device>) + 'static) -> ObserverId {
        self.tracker.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.tracker.unsubscribe(id)
    }
}
