//! Send command implementation

use serde_json::Value;

use super::{common::CommandContext, refresh::print_report};
use crate::{router::Reply, Result};

/// Handle the send command: route a raw JSON message and print the reply.
///
/// For `updateLeague` the command also waits for the refresh it started so
/// the process does not exit mid-fetch.
pub async fn handle_send(ctx: &CommandContext, raw: &str) -> Result<Reply> {
    let message: Value = serde_json::from_str(raw)?;
    let (router, _task) = ctx.router();

    let response = router.send_json(message).await?;
    let reply = response.reply.clone();
    println!("{}", serde_json::to_string_pretty(&reply)?);

    if let Some(report) = response.wait_for_completion().await {
        print_report(&report);
    }

    Ok(reply)
}
