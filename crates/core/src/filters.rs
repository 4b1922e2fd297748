//! Saved filter storage and retrieval functions
//!
//! List commands accept the same `--where field=value` conditions over and
//! over; a saved filter names a reusable set of them. Filters are stored
//! as `.flt` files with one condition per line.

use std::fs;
use std::path::Path;

/// Error type for saved-filter operations
#[derive(Debug)]
pub enum FilterError {
    IoError(String),
    FilterNotFound(String),
    FilterAlreadyExists(String),
    InvalidFilterName(String),
}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterError::IoError(msg) => write!(f, "IO error: {}", msg),
            FilterError::FilterNotFound(name) => write!(f, "Filter not found: {}", name),
            FilterError::FilterAlreadyExists(name) => {
                write!(
                    f,
                    "Filter already exists: {}. Use --update to overwrite.",
                    name
                )
            }
            FilterError::InvalidFilterName(name) => write!(f, "Invalid filter name: {}", name),
        }
    }
}

impl std::error::Error for FilterError {}

impl From<std::io::Error> for FilterError {
    fn from(err: std::io::Error) -> Self {
        FilterError::IoError(err.to_string())
    }
}

/// List all saved filters in the given directory
///
/// Returns a sorted vector of filter names (without the .flt extension)
pub fn list_filters(filters_dir: &Path) -> Result<Vec<String>, FilterError> {
    if !filters_dir.exists() {
        return Ok(Vec::new());
    }

    let mut filters = Vec::new();

    for entry in fs::read_dir(filters_dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("flt") {
            if let Some(name) = path.file_stem().and_then(|n| n.to_str()) {
                filters.push(name.to_string());
            }
        }
    }

    filters.sort();
    Ok(filters)
}

/// Load a filter's conditions from the filesystem
///
/// Returns the raw filter content: one `field=value` condition per line.
pub fn load_filter(filters_dir: &Path, name: &str) -> Result<String, FilterError> {
    validate_filter_name(name)?;

    let filter_path = filters_dir.join(format!("{}.flt", name));

    if !filter_path.exists() {
        return Err(FilterError::FilterNotFound(name.to_string()));
    }

    fs::read_to_string(&filter_path).map_err(FilterError::from)
}

/// Save a filter to the filesystem
///
/// # Arguments
/// * `filters_dir` - Directory to store .flt files
/// * `name` - Filter name (without the .flt extension)
/// * `conditions` - Filter content, one `field=value` condition per line
/// * `overwrite` - If true, overwrites an existing filter; if false, errors on existing
pub fn save_filter(
    filters_dir: &Path,
    name: &str,
    conditions: &str,
    overwrite: bool,
) -> Result<(), FilterError> {
    validate_filter_name(name)?;

    fs::create_dir_all(filters_dir)?;

    let filter_path = filters_dir.join(format!("{}.flt", name));

    if filter_path.exists() && !overwrite {
        return Err(FilterError::FilterAlreadyExists(name.to_string()));
    }

    fs::write(&filter_path, conditions)?;
    Ok(())
}

/// Delete a filter from the filesystem
pub fn delete_filter(filters_dir: &Path, name: &str) -> Result<(), FilterError> {
    validate_filter_name(name)?;

    let filter_path = filters_dir.join(format!("{}.flt", name));

    if !filter_path.exists() {
        return Err(FilterError::FilterNotFound(name.to_string()));
    }

    fs::remove_file(&filter_path)?;
    Ok(())
}

/// Validate filter name for security and usability
///
/// Filter names must:
/// - Not be empty
/// - Only contain alphanumeric characters, hyphens, and underscores
fn validate_filter_name(name: &str) -> Result<(), FilterError> {
    if name.is_empty() {
        return Err(FilterError::InvalidFilterName(
            "Filter name cannot be empty".to_string(),
        ));
    }

    if !name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(FilterError::InvalidFilterName(
            "Filter name can only contain alphanumeric characters, hyphens, and underscores"
                .to_string(),
        ));
    }

    Ok(())
}
