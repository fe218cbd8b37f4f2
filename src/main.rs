use guweb_service::api;
use guweb_service::common::init;
use guweb_service::settings::AppSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = AppSettings::get();
    init::initialize_logging(settings);
    api::serve(settings).await
}
