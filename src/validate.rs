/// Shallow email check: true when the string contains both `@` and `.`.
///
/// Position and order are not checked, so `"@."` passes.
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}
