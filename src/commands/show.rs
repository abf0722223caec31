//! Show command implementation

use chrono::Local;

use super::common::CommandContext;
use crate::{
    presentation::{render_json, render_text, PopupView},
    Result,
};

/// Handle the show command: mount the popup and print its view
pub async fn handle_show(ctx: &CommandContext, as_json: bool) -> Result<PopupView> {
    let mut popup = ctx.popup();
    // tarpaulin::skip - HTTP call when a favourite is set
    popup.mount().await?;

    let view = popup.view(&Local::now());
    if as_json {
        println!("{}", render_json(&view)?); // tarpaulin::skip
    } else {
        print!("{}", render_text(&view)); // tarpaulin::skip
    }

    Ok(view)
}
