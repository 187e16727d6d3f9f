use web_sys::{Document, HtmlSelectElement};

use super::{element_by_id, js_error, listen};
use crate::config::PageConfig;
use crate::consts::GENDER_SELECT_ID;
use crate::error::Result;
use crate::gender::select_color;

fn apply(select: &HtmlSelectElement, config: &PageConfig) -> Result<()> {
    select
        .style()
        .set_property("color", select_color(&select.value(), config))
        .map_err(js_error)
}

pub(super) fn install(document: &Document, config: &PageConfig) -> Result<()> {
    let select: HtmlSelectElement = element_by_id(document, GENDER_SELECT_ID)?;

    // Initial color, before any change.
    apply(&select, config)?;

    let source = select.clone();
    let config = config.clone();
    listen(&select, "change", move |_| {
        if let Err(e) = apply(&source, &config) {
            log::warn!("gender placeholder color: {e}");
        }
    })?;

    log::info!("gender placeholder styling installed");
    Ok(())
}
