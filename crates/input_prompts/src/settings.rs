//! Prompt configuration document.
//!
//! Settings are authored as JSON or RON and describe everything the context
//! builds at initialization: action documents, device datasets, default device
//! priority, tag delimiters, the reference template and per-platform overrides.

use crate::action::ActionAsset;
use crate::dataset::DeviceDataset;
use crate::device::{DeviceKind, Platform};
use crate::error::SettingsError;
use crate::rewriter::{PromptTemplate, TagDelimiters, SPRITE_TOKEN};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Dataset forced for every device while running on `platform`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformOverride {
    pub platform: Platform,
    pub dataset: DeviceDataset,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptSettings {
    /// Action documents always loaded, in addition to those passed at initialization.
    pub action_assets: Vec<ActionAsset>,
    pub device_datasets: Vec<DeviceDataset>,
    /// Device kinds tried in order when picking a device before any input.
    pub default_device_priority: Vec<DeviceKind>,
    pub open_tag: char,
    pub close_tag: char,
    /// Reference template; must contain `{SPRITE}` exactly once.
    pub prompt_template: String,
    /// Appended after every produced reference.
    pub rich_text_tags: String,
    pub platform_overrides: Vec<PlatformOverride>,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            action_assets: Vec::new(),
            device_datasets: Vec::new(),
            default_device_priority: vec![
                DeviceKind::Gamepad,
                DeviceKind::Keyboard,
                DeviceKind::Mouse,
                DeviceKind::Touchscreen,
            ],
            open_tag: '[',
            close_tag: ']',
            prompt_template: SPRITE_TOKEN.to_string(),
            rich_text_tags: String::new(),
            platform_overrides: Vec::new(),
        }
    }
}

impl PromptSettings {
    /// Load settings from a `.json` or `.ron` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Self::from_json_str(&fs::read_to_string(path)?),
            Some("ron") => Self::from_ron_str(&fs::read_to_string(path)?),
            _ => Err(SettingsError::UnsupportedFormat(extension)),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_ron_str(content: &str) -> Result<Self, SettingsError> {
        Ok(ron::from_str(content)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn delimiters(&self) -> TagDelimiters {
        TagDelimiters::new(self.open_tag, self.close_tag)
    }

    /// Validated reference template.
    pub fn template(&self) -> PromptTemplate {
        PromptTemplate::new(&self.prompt_template, &self.rich_text_tags)
    }

    /// Override dataset configured for `platform`, first match wins.
    pub fn platform_override(&self, platform: Platform) -> Option<&DeviceDataset> {
        self.platform_overrides
            .iter()
            .find(|entry| entry.platform == platform)
            .map(|entry| &entry.dataset)
    }

    pub fn with_action_asset(mut self, asset: ActionAsset) -> Self {
        self.action_assets.push(asset);
        self
    }

    pub fn with_dataset(mut self, dataset: DeviceDataset) -> Self {
        self.device_datasets.push(dataset);
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.prompt_template = template.into();
        self
    }

    pub fn with_platform_override(mut self, platform: Platform, dataset: DeviceDataset) -> Self {
        self.platform_overrides
            .push(PlatformOverride { platform, dataset });
        self
    }
}
