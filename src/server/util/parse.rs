use crate::server::{
    error::{internal::InternalError, AppError},
    model::profile::Role,
};

/// Parses a stored role column into a `Role`.
///
/// # Arguments
/// - `value` - The String to attempt to parse into `Role`
///
/// # Returns
/// - `Ok(Role)` - Successfully parsed role
/// - `Err(AppError::InternalErr(ParseRole))` - Value is not a known role
pub fn parse_role_from_string(value: String) -> Result<Role, AppError> {
    let role = match value.as_str() {
        "admin" => Role::Admin,
        "student" => Role::Student,
        "super_admin" => Role::SuperAdmin,
        _ => return Err(InternalError::ParseRole(value).into()),
    };

    Ok(role)
}

/// Trims `value` and rejects it when empty.
///
/// # Returns
/// - `Ok(String)` - Trimmed value
/// - `Err(AppError::BadRequest)` - Value is blank, message names `field`
pub fn require_non_blank(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }

    Ok(trimmed.to_string())
}
