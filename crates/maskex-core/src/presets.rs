//! Mask-set configuration management
//!
//! Load, save, and list mask-set YAML files.

use std::path::Path;

use crate::models::MaskSet;

/// Validate a mask name destined for use in output filenames.
/// Rejects names containing path separators, "..", or other dangerous patterns.
pub fn validate_mask_name(name: &str) -> Result<(), String> {
    if name.contains('/') || name.contains('\\') {
        return Err("Mask name cannot contain path separators".to_string());
    }

    if name.contains("..") {
        return Err("Mask name cannot contain '..'".to_string());
    }

    if name.starts_with('.') {
        return Err("Mask name cannot start with '.'".to_string());
    }

    if name.contains('\0') {
        return Err("Mask name cannot contain null bytes".to_string());
    }

    Ok(())
}

/// Load a mask set from a YAML file.
///
/// The parsed set is validated before it is returned, so malformed rules,
/// duplicate mask names, or names unsafe for filenames fail here rather
/// than mid-generation.
pub fn load_mask_set<P: AsRef<Path>>(path: P) -> Result<MaskSet, String> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read mask set file: {}", e))?;

    let set: MaskSet = serde_yaml::from_str(&contents)
        .map_err(|e| format!("Failed to parse mask set YAML: {}", e))?;

    set.validate()
        .map_err(|e| format!("Invalid mask set {}: {}", path.display(), e))?;

    for mask in set.active_masks() {
        validate_mask_name(&mask.name)
            .map_err(|e| format!("Invalid mask set {}: {}", path.display(), e))?;
    }

    Ok(set)
}

/// Save a mask set to a YAML file.
pub fn save_mask_set<P: AsRef<Path>>(set: &MaskSet, path: P) -> Result<(), String> {
    let path = path.as_ref();
    let yaml =
        serde_yaml::to_string(set).map_err(|e| format!("Failed to serialize mask set: {}", e))?;

    std::fs::write(path, yaml).map_err(|e| format!("Failed to write mask set file: {}", e))
}

/// List all mask-set files in a directory (by file stem).
pub fn list_mask_sets<P: AsRef<Path>>(dir: P) -> Result<Vec<String>, String> {
    let dir = dir.as_ref();
    let mut sets = Vec::new();

    let entries =
        std::fs::read_dir(dir).map_err(|e| format!("Failed to read mask set directory: {}", e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read directory entry: {}", e))?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) == Some("yml")
            || path.extension().and_then(|e| e.to_str()) == Some("yaml")
        {
            if let Some(name) = path.file_stem().and_then(|n| n.to_str()) {
                sets.push(name.to_string());
            }
        }
    }

    sets.sort();
    Ok(sets)
}
