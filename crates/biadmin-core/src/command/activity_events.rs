use serde_json::Value;
use tracing::{debug, info};

use super::AdminCommand;
use super::requests::ActivityEventQuery;
use crate::error::CoreError;
use crate::facade::AdminApi;
use crate::model::ActivityEventPage;
use crate::sink::OutputSink;

/// Retrieve audit events for a time window within one UTC day.
///
/// Follows continuation tokens until the service reports the final page.
/// Each page's entities are emitted before the next page is requested.
#[derive(Debug, Clone, Default)]
pub struct GetActivityEvents {
    pub start_date_time: String,
    pub end_date_time: String,
    pub activity_type: Option<String>,
    pub user: Option<String>,
    pub filter: Option<String>,
}

impl AdminCommand for GetActivityEvents {
    const NAME: &'static str = "GetActivityEvents";
    type Output = Value;
    type Request = ActivityEventQuery;

    fn validate(&self) -> Result<ActivityEventQuery, CoreError> {
        ActivityEventQuery::new(
            &self.start_date_time,
            &self.end_date_time,
            self.activity_type.as_deref(),
            self.user.as_deref(),
            self.filter.as_deref(),
        )
    }

    async fn execute<A, S>(
        &self,
        request: ActivityEventQuery,
        api: &A,
        sink: &mut S,
    ) -> Result<(), CoreError>
    where
        A: AdminApi,
        S: OutputSink<Self::Output>,
    {
        let mut token: Option<String> = None;
        let mut pages = 0_usize;
        let mut total = 0_usize;

        loop {
            let wire = api
                .get_activity_events(
                    &request.start,
                    &request.end,
                    request.filter.as_deref(),
                    token.as_deref(),
                )
                .await?;
            let page = ActivityEventPage::from_wire(wire);
            let more = page.has_more();
            pages += 1;
            total += page.entities.len();
            debug!(page = pages, entities = page.entities.len(), "activity page");

            for entity in page.entities {
                sink.write_object(entity);
            }

            if !more {
                break;
            }
            token = page.continuation_token;
        }

        info!(pages, events = total, "activity events retrieved");
        Ok(())
    }
}
