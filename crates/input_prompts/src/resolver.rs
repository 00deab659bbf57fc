//! Tag resolution: logical action path → ordered prompt entries of the active device.
//!
//! Resolution reads the catalogs and the active device on every call; nothing
//! is cached between calls.

use crate::catalog::BindingCatalog;
use crate::dataset::{DeviceDataset, DevicePromptEntry, GlyphRef};
use crate::device::Device;
use crate::error::ResolveError;
use crate::registry::DevicePromptRegistry;
use smallvec::SmallVec;
use tracing::{debug, warn};

/// Non-fatal problem found while resolving one action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A binding of the action has no prompt in the active dataset.
    MissingPromptForBinding {
        binding_path: String,
        is_composite: bool,
    },
}

/// Successful resolution of one action.
#[derive(Clone, Debug)]
pub struct Resolution<'a> {
    /// Dataset the entries were taken from.
    pub dataset: &'a DeviceDataset,
    /// Prompt entries in binding-catalog order.
    pub entries: SmallVec<[&'a DevicePromptEntry; 4]>,
    /// Bindings that were skipped because no prompt matched.
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> Resolution<'a> {
    /// Glyph references for every entry, in order.
    pub fn glyphs(&self) -> Vec<GlyphRef> {
        self.entries
            .iter()
            .map(|entry| self.dataset.glyph(&entry.glyph_id))
            .collect()
    }

    /// Glyph of the first entry.
    ///
    /// Composites are reduced to their first part.
    pub fn first_glyph(&self) -> Option<GlyphRef> {
        self.entries
            .first()
            .map(|entry| self.dataset.glyph(&entry.glyph_id))
    }
}

/// Pick the dataset prompts are drawn from.
///
/// A platform override always wins. Otherwise the active device's name is
/// looked up in the registry.
pub fn active_dataset<'a>(
    platform_override: Option<&'a DeviceDataset>,
    registry: &'a DevicePromptRegistry,
    active_device: Option<&Device>,
) -> Result<&'a DeviceDataset, ResolveError> {
    if let Some(dataset) = platform_override {
        return Ok(dataset);
    }

    let Some(device) = active_device else {
        warn!("No active input device");
        return Err(ResolveError::NoActiveDevice);
    };

    registry.get(&device.name).ok_or_else(|| {
        warn!("No prompt dataset registered for device '{}'", device.name);
        ResolveError::UnregisteredDevice(device.name.clone())
    })
}

/// Resolve `action_path` against `dataset`.
///
/// `device` names the device the dataset was picked for; it is what
/// diagnostics report. Usage wildcard bindings (`*/{Submit}`) are skipped without a diagnostic.
/// Other bindings without a matching prompt are reported in
/// [`Resolution::diagnostics`] and skipped.
pub fn resolve<'a>(
    catalog: &BindingCatalog,
    dataset: &'a DeviceDataset,
    device: &str,
    action_path: &str,
) -> Result<Resolution<'a>, ResolveError> {
    let Some(bindings) = catalog.get(action_path) else {
        warn!("Unknown input action '{action_path}'");
        return Err(ResolveError::UnknownAction(action_path.to_string()));
    };

    let mut entries = SmallVec::new();
    let mut diagnostics = Vec::new();

    for binding in bindings {
        if binding.is_usage_wildcard() {
            debug!(
                "Skipping usage binding '{}' of '{action_path}' (usage {:?})",
                binding.binding_path,
                binding.usage()
            );
            continue;
        }

        match dataset.prompt_for(&binding.binding_path) {
            Some(entry) => entries.push(entry),
            None => {
                if binding.is_composite {
                    debug!(
                        "No prompt for composite '{}' of '{action_path}' on '{device}'",
                        binding.binding_path
                    );
                } else {
                    warn!(
                        "No prompt for binding '{}' of '{action_path}' on '{device}'",
                        binding.binding_path
                    );
                }
                diagnostics.push(Diagnostic::MissingPromptForBinding {
                    binding_path: binding.binding_path.clone(),
                    is_composite: binding.is_composite,
                });
            }
        }
    }

    if entries.is_empty() {
        return Err(ResolveError::NoPromptEntriesResolved {
            action: action_path.to_string(),
            device: device.to_string(),
        });
    }

    Ok(Resolution {
        dataset,
        entries,
        diagnostics,
    })
}
