use comrak::{Options, markdown_to_html};

/// Render model output (Markdown) to HTML.
///
/// Raw HTML inside the model output is omitted from the rendered page.
pub(crate) fn render_markdown(content: &str) -> String {
    let mut options = Options::default();

    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;

    markdown_to_html(content, &options)
}
