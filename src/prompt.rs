// std imports
use std::borrow::Cow;

// ---

/// Marker replaced with the severity label inside a prompt template.
pub const SEVERITY_MARKER: &str = "{sev}";

/// Renders a prompt template for a severity label.
///
/// Only the first occurrence of [`SEVERITY_MARKER`] is substituted, any
/// later ones are kept as is. Templates without the marker, including
/// those too short to contain it, are returned unchanged.
pub fn build_prompt<'a>(template: &'a str, label: &str) -> Cow<'a, str> {
    if template.len() < SEVERITY_MARKER.len() {
        return Cow::Borrowed(template);
    }

    match template.find(SEVERITY_MARKER) {
        Some(pos) => {
            let mut result = String::with_capacity(template.len() - SEVERITY_MARKER.len() + label.len());
            result.push_str(&template[..pos]);
            result.push_str(label);
            result.push_str(&template[pos + SEVERITY_MARKER.len()..]);
            Cow::Owned(result)
        }
        None => Cow::Borrowed(template),
    }
}
