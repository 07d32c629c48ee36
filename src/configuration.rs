use crate::domain::EmailAddress;
use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub notifications: NotificationSettings,
    pub payment: PaymentSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    // The port is often injected as an environment variable, i.e. as a string; `serde_aux` takes
    // care of the conversion.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
    /// Path to the JSON file holding the horse records served on the adoption pages.
    pub horse_data: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_name: String,
    pub sender_email: String,
    pub authorization_token: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
    pub delivery: DeliveryMode,
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<EmailAddress, String> {
        EmailAddress::parse(self.sender_email.clone())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

/// Which email transport gets injected at startup.
///
/// `Api` talks to the delivery provider over HTTP; `Console` logs the would-be message and reports
/// success, so form handlers can be exercised without any email infrastructure.
#[derive(serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    Api,
    Console,
}

/// Fixed recipient addresses for the notification emails, one per audience.
#[derive(serde::Deserialize, Clone)]
pub struct NotificationSettings {
    pub operations_email: String,
    pub volunteers_email: String,
}

impl NotificationSettings {
    pub fn operations(&self) -> Result<EmailAddress, String> {
        EmailAddress::parse(self.operations_email.clone())
    }

    pub fn volunteers(&self) -> Result<EmailAddress, String> {
        EmailAddress::parse(self.volunteers_email.clone())
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct PaymentSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub simulated_delay_milliseconds: u64,
}

impl PaymentSettings {
    pub fn simulated_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.simulated_delay_milliseconds)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment. Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // Add in settings from environment variables (with a prefix of APP and '__' as separator),
        // e.g. `APP_EMAIL_CLIENT__DELIVERY=api` would set `Settings.email_client.delivery`.
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// The possible runtime environments for our application.
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}
