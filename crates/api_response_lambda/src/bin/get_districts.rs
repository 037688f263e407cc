use api_response_core::ApiResponse;
use api_response_lambda::adapters::table_store::TableLister;
use api_response_lambda::config::RuntimeConfig;
use api_response_lambda::handlers::get_districts::handle_get_districts;
use api_response_lambda::observability::init_tracing;
use api_response_lambda::runtime::{complete, request_context};
use aws_config::{BehaviorVersion, Region};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

struct DynamoTableLister {
    client: aws_sdk_dynamodb::Client,
}

impl TableLister for DynamoTableLister {
    fn list_tables(&self) -> Result<Vec<String>, String> {
        let client = self.client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let mut names = Vec::new();
                let mut start_table_name: Option<String> = None;
                loop {
                    let output = client
                        .list_tables()
                        .set_exclusive_start_table_name(start_table_name.take())
                        .send()
                        .await
                        .map_err(|error| format!("failed to list dynamodb tables: {error}"))?;
                    names.extend(output.table_names().iter().cloned());
                    match output.last_evaluated_table_name() {
                        Some(name) => start_table_name = Some(name.to_string()),
                        None => break,
                    }
                }
                Ok(names)
            })
        })
    }
}

async fn handle_request(
    tables: &DynamoTableLister,
    event: LambdaEvent<Value>,
) -> Result<ApiResponse, Error> {
    let context = request_context(&event.context);
    let envelope = handle_get_districts(&event.payload, &context, tables)?;
    complete(envelope)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing()?;

    let config = RuntimeConfig::from_env();
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region));
    if let Some(endpoint_url) = config.dynamodb_endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }
    let sdk_config = loader.load().await;
    let tables = DynamoTableLister {
        client: aws_sdk_dynamodb::Client::new(&sdk_config),
    };

    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| {
        handle_request(&tables, event)
    }))
    .await
}
