//! File name shown next to the avatar upload input.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use crate::consts::ELLIPSIS;

/// Text for the file-name display.
///
/// Names longer than `max_len` characters are cut to `max_len` and suffixed
/// with `...`. Lengths count characters, not bytes, so a cut never lands
/// inside a multi-byte character. With no file selected, `placeholder` is
/// shown instead.
#[must_use]
pub fn display_file_name(file_name: Option<&str>, max_len: usize, placeholder: &str) -> String {
    let Some(name) = file_name else {
        return placeholder.to_owned();
    };
    match name.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &name[..cut]),
        None => name.to_owned(),
    }
}
