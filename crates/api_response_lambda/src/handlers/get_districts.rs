use api_response_core::{
    BuildError, RequestContext, ResponseBuilder, ResponseEnvelope, ResponseKind, SupportedMethod,
};
use serde_json::Value;

use crate::adapters::table_store::TableLister;

use super::{log_request, resolve_outcome, StatusMessage};

const COMPONENT: &str = "get_districts";

/// Lists the storage tables backing the districts API.
///
/// A listing failure is logged together with the raw event and answered with
/// `INTERNAL_SERVER_ERROR`; the error slot then carries no body.
pub fn handle_get_districts(
    event: &Value,
    context: &RequestContext,
    tables: &impl TableLister,
) -> Result<ResponseEnvelope, BuildError> {
    let api = ResponseBuilder::for_method(SupportedMethod::Get);

    log_request(COMPONENT, event, context);

    let outcome = match tables.list_tables() {
        Ok(names) => {
            tracing::info!(
                component = COMPONENT,
                event = "tables_listed",
                request_id = %context.request_id,
                table_count = names.len(),
                tables = %names.join("\n"),
                "listed storage tables"
            );
            api.build_serialized(ResponseKind::Success, context, &StatusMessage::all_good())
        }
        Err(error) => {
            tracing::error!(
                component = COMPONENT,
                event = "list_tables_failed",
                request_id = %context.request_id,
                error = %error,
                request_event = %event,
                "failed to list storage tables"
            );
            api.build(ResponseKind::InternalServerError, context, None)
        }
    };

    resolve_outcome(&api, COMPONENT, event, context, outcome)
}
