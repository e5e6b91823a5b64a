// Shared prompt fragments.
// Each feature that calls the model defines its own prompts.rs alongside it;
// this file holds the cross-cutting pieces.

/// Appended to every single-shot page prompt that is rendered as markdown.
pub const MARKDOWN_OUTPUT_INSTRUCTION: &str = "\
Format the output in clean Markdown. \
Use headings exactly as requested and do NOT wrap the whole answer in a code fence.";

/// Fills `{name}` placeholders in one pass over `template`.
///
/// Substituted values are never rescanned, so user text containing a
/// placeholder name comes through verbatim. Unknown `{...}` is left as is.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
