//! Incremental mask regeneration across repeated parameter edits.

use std::collections::HashMap;

use crate::image::RgbaImage;
use crate::models::MaskDefinition;
use crate::verbose_println;

use super::classifier::generate_mask;

/// Caches generated masks between refreshes and regenerates only the
/// definitions whose values changed since the previous pass.
///
/// The cache snapshots definitions by value (deep copies), so callers are
/// free to mutate their definitions in place between refreshes. Each cache
/// instance is independent; create one per editing session.
#[derive(Debug, Default)]
pub struct MaskSetCache {
    /// Snapshot of the definitions seen by the previous refresh
    cached_masks: Vec<MaskDefinition>,

    /// Global modifier values seen by the previous refresh
    cached_desaturate: bool,
    cached_height: u32,

    /// Generated masks from the previous pass, keyed by definition name
    generated: HashMap<String, RgbaImage>,
}

impl MaskSetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Regenerate the masks whose definitions changed and return the full
    /// name-to-mask mapping.
    ///
    /// A change to either global modifier (`desaturate`, `preview_height`)
    /// invalidates everything. Otherwise each active name is compared by
    /// value against the previous snapshot: changed or new definitions are
    /// regenerated (reusing the old buffer where one exists), unchanged
    /// ones carry forward untouched, and deleted ones drop out of the
    /// result.
    pub fn refresh(
        &mut self,
        masks: &[MaskDefinition],
        desaturate: bool,
        preview_height: u32,
        source: &RgbaImage,
    ) -> Result<&HashMap<String, RgbaImage>, String> {
        // Reject malformed definitions before touching any cached state, so
        // a failed refresh never leaves partial output behind.
        for mask in masks {
            mask.validate()?;
        }

        if desaturate != self.cached_desaturate || preview_height != self.cached_height {
            verbose_println!("[maskex] Global modifiers changed, regenerating all masks");
            self.generated.clear();
            self.cached_masks.clear();
        }

        // All names to consider: previously generated entries plus active
        // current definitions, deduplicated.
        let mut names: Vec<String> = self.generated.keys().cloned().collect();
        for mask in masks {
            if mask.is_active() && !names.contains(&mask.name) {
                names.push(mask.name.clone());
            }
        }

        for name in names {
            let cached = self.cached_masks.iter().find(|m| m.name == name);
            let current = masks.iter().find(|m| m.name == name);
            let reuse = self.generated.remove(&name);

            match current {
                Some(current) => {
                    let unchanged = reuse.is_some() && cached == Some(current);
                    if unchanged {
                        if let Some(mask) = reuse {
                            self.generated.insert(name, mask);
                        }
                    } else {
                        verbose_println!("[maskex] Regenerating mask '{}'", name);
                        if let Some(mask) = generate_mask(source, reuse, current, desaturate)? {
                            self.generated.insert(name, mask);
                        }
                    }
                }
                // Definition was deleted: its entry stays removed.
                None => {
                    verbose_println!("[maskex] Dropping deleted mask '{}'", name);
                }
            }
        }

        // Snapshot current values for the next diff.
        self.cached_masks = masks.to_vec();
        self.cached_desaturate = desaturate;
        self.cached_height = preview_height;

        Ok(&self.generated)
    }

    /// The masks produced by the most recent refresh.
    pub fn generated(&self) -> &HashMap<String, RgbaImage> {
        &self.generated
    }

    /// Drop all cached state, forcing the next refresh to regenerate
    /// every mask.
    pub fn clear(&mut self) {
        self.generated.clear();
        self.cached_masks.clear();
    }
}
