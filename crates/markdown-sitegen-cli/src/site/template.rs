pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Fills every `{{ Title }}` and `{{ Content }}` placeholder in `template`.
///
/// The title is substituted first, so a title that happens to contain
/// `{{ Content }}` is expanded with the page body too.
pub fn render_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}
