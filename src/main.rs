use sanctuary_site::startup::Application;
use sanctuary_site::{configuration, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber =
        telemetry::get_subscriber("sanctuary-site".into(), "info".into(), std::io::stdout);
    telemetry::init_subscriber(subscriber);

    // Panic if we can't read configuration
    let configuration =
        configuration::get_configuration().expect("Failed to read configuration.");
    let application = Application::build(configuration).await?;
    tracing::info!("Serving on http://127.0.0.1:{}", application.port());
    application.run_until_stopped().await?;

    Ok(())
}
