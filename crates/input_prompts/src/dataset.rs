//! Prompt datasets: which glyph each control of a device family shows.

use crate::binding::eq_ignore_case;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Glyph for one control path of a device family.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevicePromptEntry {
    /// Control path, matched case-insensitively against binding paths.
    pub binding_path: String,
    /// Glyph inside the dataset's sprite sheet.
    pub glyph_id: String,
}

impl DevicePromptEntry {
    pub fn new(binding_path: impl Into<String>, glyph_id: impl Into<String>) -> Self {
        Self {
            binding_path: binding_path.into(),
            glyph_id: glyph_id.into(),
        }
    }
}

/// A named glyph of the sprite sheet, looked up by name rather than by action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSpriteEntry {
    pub name: String,
    pub glyph_id: String,
}

impl DeviceSpriteEntry {
    pub fn new(name: impl Into<String>, glyph_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            glyph_id: glyph_id.into(),
        }
    }
}

/// Prompt configuration for one device family.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDataset {
    /// Device identity strings this dataset applies to.
    #[serde(default)]
    pub device_names: Vec<String>,
    /// Identity of the glyph atlas.
    pub sprite_sheet: String,
    #[serde(default)]
    pub binding_prompts: Vec<DevicePromptEntry>,
    #[serde(default)]
    pub sprites: Vec<DeviceSpriteEntry>,
}

impl DeviceDataset {
    pub fn new(sprite_sheet: impl Into<String>) -> Self {
        Self {
            sprite_sheet: sprite_sheet.into(),
            ..Self::default()
        }
    }

    /// Add a device name alias.
    pub fn with_device(mut self, name: impl Into<String>) -> Self {
        self.device_names.push(name.into());
        self
    }

    /// Add a binding prompt.
    pub fn with_prompt(
        mut self,
        binding_path: impl Into<String>,
        glyph_id: impl Into<String>,
    ) -> Self {
        self.binding_prompts.push(DevicePromptEntry::new(binding_path, glyph_id));
        self
    }

    /// Add a named sprite.
    pub fn with_sprite(mut self, name: impl Into<String>, glyph_id: impl Into<String>) -> Self {
        self.sprites.push(DeviceSpriteEntry::new(name, glyph_id));
        self
    }

    /// First prompt whose binding path equals `binding_path`, ignoring case.
    pub fn prompt_for(&self, binding_path: &str) -> Option<&DevicePromptEntry> {
        self.binding_prompts
            .iter()
            .find(|entry| eq_ignore_case(&entry.binding_path, binding_path))
    }

    /// First sprite named `name`, ignoring case.
    pub fn sprite_named(&self, name: &str) -> Option<&DeviceSpriteEntry> {
        self.sprites
            .iter()
            .find(|entry| eq_ignore_case(&entry.name, name))
    }

    /// Human-readable label used in diagnostics.
    pub fn label(&self) -> &str {
        self.device_names
            .first()
            .map(String::as_str)
            .unwrap_or(&self.sprite_sheet)
    }

    /// Reference to one of this dataset's glyphs.
    pub fn glyph(&self, glyph_id: &str) -> GlyphRef {
        GlyphRef {
            sprite_sheet: self.sprite_sheet.clone(),
            glyph_id: glyph_id.to_string(),
        }
    }
}

/// Renderer-agnostic reference to a glyph: sprite sheet plus glyph id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlyphRef {
    pub sprite_sheet: String,
    pub glyph_id: String,
}

impl fmt::Display for GlyphRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.sprite_sheet, self.glyph_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xbox() -> DeviceDataset {
        DeviceDataset::new("XboxPrompts")
            .with_device("XInputControllerWindows")
            .with_device("XboxOneGampadMacOSWireless")
            .with_prompt("<Gamepad>/buttonSouth", "xbox_a")
            .with_prompt("<Gamepad>/buttonSouth", "xbox_a_alt")
            .with_sprite("Menu", "xbox_menu")
    }

    #[test]
    fn prompt_lookup_is_case_insensitive_and_first_wins() {
        let dataset = xbox();
        let entry = dataset.prompt_for("<gamepad>/BUTTONSOUTH").unwrap();
        assert_eq!(entry.glyph_id, "xbox_a");
        assert!(dataset.prompt_for("<Gamepad>/buttonNorth").is_none());
    }

    #[test]
    fn sprite_lookup_by_name() {
        let dataset = xbox();
        assert_eq!(dataset.sprite_named("menu").unwrap().glyph_id, "xbox_menu");
        assert!(dataset.sprite_named("View").is_none());
    }

    #[test]
    fn lookups_fold_non_ascii_case() {
        let dataset = DeviceDataset::new("Tastatur")
            .with_prompt("<Keyboard>/Ä", "kb_ae")
            .with_sprite("Öffnen", "kb_open");
        assert_eq!(dataset.prompt_for("<keyboard>/ä").unwrap().glyph_id, "kb_ae");
        assert_eq!(dataset.sprite_named("öffnen").unwrap().glyph_id, "kb_open");
    }

    #[test]
    fn label_and_glyph_ref() {
        let dataset = xbox();
        assert_eq!(dataset.label(), "XInputControllerWindows");
        assert_eq!(dataset.glyph("xbox_a").to_string(), "XboxPrompts:xbox_a");
        assert_eq!(DeviceDataset::new("Touch").label(), "Touch");
    }
}
