use crate::utils::error::{DevkitError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DevkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DevkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DevkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Extensions are given bare (`a26`, not `.a26`) and must stay a single path component.
pub fn validate_extension(field_name: &str, ext: &str) -> Result<()> {
    validate_non_empty_string(field_name, ext)?;

    if ext.starts_with('.') || ext.contains('/') || ext.contains('\\') {
        return Err(DevkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: ext.to_string(),
            reason: "Extension must not contain dots at the start or path separators".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(DevkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("project_name", "pong").is_ok());
        assert!(validate_path("project_name", "games/pong").is_ok());
        assert!(validate_path("project_name", "").is_err());
        assert!(validate_path("project_name", "po\0ng").is_err());
    }

    #[test]
    fn test_validate_extension() {
        assert!(validate_extension("build.rom_extension", "a26").is_ok());
        assert!(validate_extension("build.rom_extension", ".a26").is_err());
        assert!(validate_extension("build.rom_extension", "rom/a26").is_err());
        assert!(validate_extension("build.rom_extension", "  ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("assembler.output_format", 3, 1, 3).is_ok());
        assert!(validate_range("assembler.output_format", 4, 1, 3).is_err());
    }
}
