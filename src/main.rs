use fetch_lambda::Fetcher;
use lambda_runtime::{Error, service_fn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fetch_lambda=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let fetcher = Fetcher::default();

    lambda_runtime::run(service_fn(move |event| {
        let fetcher = fetcher.clone();
        async move { fetcher.handle(event).await.map_err(Error::from) }
    }))
    .await
}
