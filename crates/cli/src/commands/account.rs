//! `whoami`: the account behind the configured API key.

use anyhow::Result;
use tygenie_client::ClientManager;

use crate::cancellation::CancellationToken;
use crate::output::print_json;

pub async fn run(manager: ClientManager, pretty: bool, cancel: &CancellationToken) -> Result<()> {
    let api = manager.api();
    let resp = cancel.until_cancelled(api.get_account_info()).await??;
    print_json(&resp.data, pretty)
}
