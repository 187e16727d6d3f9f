use web_sys::{Document, Element, HtmlInputElement};

use super::{element_by_id, listen};
use crate::avatar::display_file_name;
use crate::config::PageConfig;
use crate::consts::{AVATAR_INPUT_ID, FILE_NAME_ID};
use crate::error::Result;

pub(super) fn install(document: &Document, config: &PageConfig) -> Result<()> {
    let input: HtmlInputElement = element_by_id(document, AVATAR_INPUT_ID)?;
    let display: Element = element_by_id(document, FILE_NAME_ID)?;

    let max_len = config.file_name_max_len;
    let placeholder = config.no_file_chosen.clone();
    let source = input.clone();
    listen(&input, "change", move |_| {
        let name = source.files().and_then(|files| files.get(0)).map(|file| file.name());
        let text = display_file_name(name.as_deref(), max_len, &placeholder);
        display.set_text_content(Some(text.as_str()));
    })?;

    log::info!("avatar file name display installed");
    Ok(())
}
