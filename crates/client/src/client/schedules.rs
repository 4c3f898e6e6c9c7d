//! Schedule and on-call API methods for [`ApiFacade`].

use chrono::Utc;

use crate::client::ApiFacade;
use crate::error::ApiResult;
use crate::models::{GetOnCallsResponse, ListSchedulesResponse, OnCallParams};
use crate::operation::Operation;

impl ApiFacade {
    /// List all schedules.
    pub async fn list_schedules(&self) -> ApiResult<ListSchedulesResponse> {
        self.invoke(Operation::ListSchedules).await
    }

    /// Who is on call, for every schedule.
    ///
    /// Unset parameters default to `flat = true` and `date = now`.
    pub async fn whois_on_call(&self, params: OnCallParams) -> ApiResult<GetOnCallsResponse> {
        self.invoke(Operation::GetOnCalls(params.resolve(Utc::now())))
            .await
    }
}
