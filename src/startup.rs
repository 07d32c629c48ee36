use crate::configuration::{DeliveryMode, Settings};
use crate::domain::HorseCatalog;
use crate::email_client::EmailClient;
use crate::notifications::{
    EmailTransport, NotificationDispatcher, NotificationRecipients, SenderIdentity,
};
use crate::payments::MockPaymentClient;
use crate::routes;
use actix_web::{dev::Server, web, App, HttpServer};
use anyhow::Context;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Assemble every capability from configuration and bind the listener. Binding to port 0
    /// picks a random free port, which the test suite relies on.
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let catalog = HorseCatalog::load(&configuration.application.horse_data)?;

        let sender = SenderIdentity {
            name: configuration.email_client.sender_name.clone(),
            email: configuration
                .email_client
                .sender()
                .expect("Invalid sender email address."),
        };
        let transport = match configuration.email_client.delivery {
            DeliveryMode::Api => {
                let timeout = configuration.email_client.timeout();
                let email_client = EmailClient::new(
                    configuration.email_client.base_url.clone(),
                    configuration.email_client.authorization_token.clone(),
                    timeout,
                )
                .context("Failed to build the email client")?;
                EmailTransport::Api(email_client)
            }
            DeliveryMode::Console => EmailTransport::Console,
        };
        let dispatcher = NotificationDispatcher::new(transport, sender);

        let recipients = NotificationRecipients {
            operations: configuration
                .notifications
                .operations()
                .expect("Invalid operations recipient address."),
            volunteers: configuration
                .notifications
                .volunteers()
                .expect("Invalid volunteers recipient address."),
        };

        let payment_client = MockPaymentClient::new(configuration.payment.simulated_delay());

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener =
            TcpListener::bind(&address).with_context(|| format!("Failed to bind {address}"))?;
        // Retrieve the port assigned to us by the OS
        let port = listener.local_addr().unwrap().port();
        let server = run(listener, dispatcher, recipients, payment_client, catalog)?;

        // We "save" the bound port in one of `Application`'s fields.
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// A more expressive name that makes it clear that this function only returns when the
    /// application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    dispatcher: NotificationDispatcher,
    recipients: NotificationRecipients,
    payment_client: MockPaymentClient,
    catalog: HorseCatalog,
) -> Result<Server, std::io::Error> {
    // Wrap each capability in a smart pointer so every worker shares one instance
    let dispatcher = web::Data::new(dispatcher);
    let recipients = web::Data::new(recipients);
    let payment_client = web::Data::new(payment_client);
    let catalog = web::Data::new(catalog);

    let server = HttpServer::new(move || {
        App::new()
            // Middlewares are added using the `wrap` method on `App`
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(routes::health_check))
            .route("/horses", web::get().to(routes::list_horses))
            .route("/book", web::post().to(routes::book))
            .route("/contact", web::post().to(routes::contact))
            .route("/join", web::post().to(routes::join))
            // Register the capabilities as part of the application state
            .app_data(dispatcher.clone())
            .app_data(recipients.clone())
            .app_data(payment_client.clone())
            .app_data(catalog.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
