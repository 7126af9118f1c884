mod telemetry;

use calenduh_api::Application;
use calenduh_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};
use tracing::error;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("calenduh_server".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context().await.map_err(|e| {
        error!("Unable to set up the application context: {:?}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    let app = Application::new(context).await?;
    app.start().await
}
