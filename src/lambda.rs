use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use verification_notifier::utils::logger;
use verification_notifier::{
    LambdaConfig, LogNotifier, ProxyEvent, ProxyResponse, VerificationNotifier,
};

async fn function_handler(
    handler: &VerificationNotifier<LogNotifier>,
    event: LambdaEvent<ProxyEvent>,
) -> Result<ProxyResponse, Error> {
    tracing::debug!(request_id = %event.context.request_id, "Handling verification request");

    let response = handler.handle(event.payload.into_request()).await;
    Ok(ProxyResponse::from(response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = LambdaConfig::from_env()?;
    logger::init_lambda_logger(config.log_format);

    let handler = VerificationNotifier::new(LogNotifier::new());
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<ProxyEvent>| async move {
        function_handler(handler, event).await
    }))
    .await
}
