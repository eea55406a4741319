pub mod huggingface;
pub mod openai;
pub mod trait_impl;

pub use trait_impl::TextGeneration;

/// Cap a provider error body at 500 bytes without splitting a UTF-8
/// character.
pub(crate) fn truncate_error_body(text: &str) -> &str {
    if text.len() <= 500 {
        return text;
    }
    let mut cut = 500;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    &text[..cut]
}
