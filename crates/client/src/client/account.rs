//! Account API methods for [`ApiFacade`].

use crate::client::ApiFacade;
use crate::error::ApiResult;
use crate::models::AccountInfoResponse;
use crate::operation::Operation;

impl ApiFacade {
    /// Get account name, user count, and plan.
    ///
    /// Also serves as a cheap credential check.
    pub async fn get_account_info(&self) -> ApiResult<AccountInfoResponse> {
        self.invoke(Operation::GetAccountInfo).await
    }
}
