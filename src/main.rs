use {
    std::sync::Arc,
    tps_console::{
        adapters::http_transport::HttpTransport,
        config::Config,
        domain::activity::ActivityResource,
        services::resource_client::ResourceClient,
        ui::{
            activity_page::{ActivityPage, dialog_selector, table_selector},
            document::StaticDocument,
            page::Page,
        },
    },
    tracing_subscriber::EnvFilter,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("invalid configuration");

    let transport =
        HttpTransport::with_timeout(&config.base_url, config.timeout).expect("invalid TPS_URL");
    let client = ResourceClient::new(ActivityResource, Arc::new(transport));

    // No browser here: the page is mounted in a document that has exactly
    // the elements it expects.
    let document = StaticDocument::new([dialog_selector(), table_selector()]);
    let mut view = ActivityPage::new(config.page_size).load(&document);

    if let Err(e) = view.table.refresh(&client).await {
        tracing::error!(error = %e, "failed to fetch activities");
        std::process::exit(1);
    }

    println!("{}", view.table.headers().join("\t"));
    for row in view.table.rows() {
        println!("{}", row.join("\t"));
    }
    if let Some(total) = view.table.collection().total() {
        tracing::info!(shown = view.table.collection().len(), total, "done");
    }
}
