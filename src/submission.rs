use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config::{ConfigError, EmailJsConfig, CONTACT_INFO};
use crate::models::BookingRequest;

pub const SEND_FAILED_MESSAGE: &str =
    "Une erreur est survenue lors de l'envoi. Veuillez vérifier votre connexion ou nous appeler.";

const ADMIN_RECIPIENT: &str = "Admin Altea";
const NOT_APPLICABLE: &str = "N/A";
const NO_COMMENT_RECORD: &str = "Aucun";
const NO_COMMENT_FIELD: &str = "Aucun commentaire";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("could not encode request: {0}")]
    Encode(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("email provider answered {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("booking form is not configured: {0}")]
    Config(#[from] ConfigError),

    #[error("email send failed: {0}")]
    Transport(#[from] TransportError),
}

impl SubmitError {
    /// Text shown above the submit button.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Config(_) => format!(
                "Le formulaire de réservation est temporairement indisponible. Appelez-nous au {}.",
                CONTACT_INFO.phone
            ),
            SubmitError::Transport(_) => SEND_FAILED_MESSAGE.to_string(),
        }
    }
}

/// Template variables expected by the EmailJS templates. Key names are part
/// of the template contract and must not change.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TemplateParams {
    pub to_name: String,
    pub client_name: String,
    pub client_email: String,
    pub email: String,
    pub client_phone: String,
    pub client_address: String,
    pub lawn_type_display: String,
    pub service_type_display: String,
    pub excel_lines: String,
    pub is_duo: String,
    pub is_duo_bool: bool,
    #[serde(rename = "v_nom")]
    pub referral_name: String,
    #[serde(rename = "v_adr")]
    pub referral_address: String,
    #[serde(rename = "v_tel")]
    pub referral_phone: String,
    #[serde(rename = "v_mail")]
    pub referral_email: String,
    #[serde(rename = "commentaire")]
    pub comment: String,
}

/// Replaces line breaks so a comment fits on one spreadsheet row.
pub fn sanitize_comment(comment: &str) -> String {
    comment
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', " | ")
}

fn or_not_applicable(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        NOT_APPLICABLE.to_string()
    } else {
        record_field(value)
    }
}

/// Keeps free text from adding columns to a flat record.
fn record_field(value: &str) -> String {
    value.trim().replace(';', ",")
}

/// One `;`-separated line per party: the client, then the neighbour when
/// the duo promotion is selected.
pub fn flat_records(request: &BookingRequest) -> Vec<String> {
    let property = request.property_type.label();
    let plan = request.service_plan.label();
    let comment = if request.comment.trim().is_empty() {
        NO_COMMENT_RECORD.to_string()
    } else {
        record_field(&sanitize_comment(request.comment.trim()))
    };
    let duo = if request.referral_opt_in { "OUI (Client 1)" } else { "NON" };

    let mut lines = vec![[
        record_field(&request.name).as_str(),
        record_field(&request.phone).as_str(),
        record_field(&request.email).as_str(),
        record_field(&request.address).as_str(),
        property,
        plan,
        duo,
        comment.as_str(),
    ]
    .join(";")];

    if request.referral_opt_in {
        let referral = &request.referral;
        lines.push(
            [
                or_not_applicable(&referral.name).as_str(),
                or_not_applicable(&referral.phone).as_str(),
                or_not_applicable(&referral.email).as_str(),
                or_not_applicable(&referral.address).as_str(),
                property,
                plan,
                "OUI (Client 2)",
                comment.as_str(),
            ]
            .join(";"),
        );
    }
    lines
}

pub fn template_params(request: &BookingRequest) -> TemplateParams {
    let referral_field = |value: &str| {
        if request.referral_opt_in {
            value.trim().to_string()
        } else {
            NOT_APPLICABLE.to_string()
        }
    };
    let comment = request.comment.trim();

    TemplateParams {
        to_name: ADMIN_RECIPIENT.to_string(),
        client_name: request.name.trim().to_string(),
        client_email: request.email.trim().to_string(),
        email: request.email.trim().to_string(),
        client_phone: request.phone.clone(),
        client_address: request.address.clone(),
        lawn_type_display: request.property_type.label().to_string(),
        service_type_display: request.service_plan.label().to_string(),
        excel_lines: flat_records(request).join("\n"),
        is_duo: if request.referral_opt_in { "OUI" } else { "NON" }.to_string(),
        is_duo_bool: request.referral_opt_in,
        referral_name: referral_field(&request.referral.name),
        referral_address: referral_field(&request.referral.address),
        referral_phone: referral_field(&request.referral.phone),
        referral_email: referral_field(&request.referral.email),
        comment: if comment.is_empty() {
            NO_COMMENT_FIELD.to_string()
        } else {
            comment.to_string()
        },
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

#[async_trait(?Send)]
pub trait EmailTransport {
    async fn send(
        &self,
        config: &EmailJsConfig,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<(), TransportError>;
}

/// Talks to the EmailJS REST endpoint from the browser.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmailJsTransport;

#[async_trait(?Send)]
impl EmailTransport for EmailJsTransport {
    async fn send(
        &self,
        config: &EmailJsConfig,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<(), TransportError> {
        let body = SendEmailRequest {
            service_id: &config.service_id,
            template_id,
            user_id: &config.public_key,
            template_params: params,
        };
        let request = Request::post(&config.api_url)
            .json(&body)
            .map_err(|e| TransportError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(TransportError::Rejected { status, body })
    }
}

/// Turns a validated booking into EmailJS calls: the admin notification,
/// then the client confirmation when that template is configured.
pub struct SubmissionAdapter<T: EmailTransport> {
    config: EmailJsConfig,
    transport: T,
}

impl<T: EmailTransport> SubmissionAdapter<T> {
    pub fn new(config: EmailJsConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub async fn submit(&self, request: &BookingRequest) -> Result<(), SubmitError> {
        self.config.validate()?;

        let params = template_params(request);
        log::info!(
            "sending booking for {} ({} / {})",
            params.client_name,
            params.lawn_type_display,
            params.service_type_display
        );

        self.transport
            .send(&self.config, &self.config.admin_template_id, &params)
            .await?;

        if let Some(client_template_id) = &self.config.client_template_id {
            self.transport
                .send(&self.config, client_template_id, &params)
                .await?;
        }

        log::info!("booking sent");
        Ok(())
    }
}

impl SubmissionAdapter<EmailJsTransport> {
    pub fn from_env() -> Self {
        Self::new(EmailJsConfig::from_env(), EmailJsTransport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EMAILJS_API_URL;
    use crate::models::{PropertyType, ReferralContact, ServicePlan};
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct RecordingTransport {
        calls: RefCell<Vec<(String, TemplateParams)>>,
        failures: RefCell<VecDeque<TransportError>>,
    }

    impl RecordingTransport {
        fn failing_once(error: TransportError) -> Self {
            let transport = Self::default();
            transport.failures.borrow_mut().push_back(error);
            transport
        }
    }

    #[async_trait(?Send)]
    impl EmailTransport for RecordingTransport {
        async fn send(
            &self,
            _config: &EmailJsConfig,
            template_id: &str,
            params: &TemplateParams,
        ) -> Result<(), TransportError> {
            self.calls
                .borrow_mut()
                .push((template_id.to_string(), params.clone()));
            match self.failures.borrow_mut().pop_front() {
                Some(error) => Err(error),
                None => Ok(()),
            }
        }
    }

    fn config() -> EmailJsConfig {
        EmailJsConfig {
            api_url: EMAILJS_API_URL.to_string(),
            service_id: "service_altea".to_string(),
            admin_template_id: "template_admin".to_string(),
            client_template_id: None,
            public_key: "pk_123".to_string(),
        }
    }

    fn booking() -> BookingRequest {
        BookingRequest {
            name: "Jean Tremblay".into(),
            address: "123 Rue des Érables, Québec".into(),
            email: "jean@example.com".into(),
            phone: "(418) 555-0123".into(),
            property_type: PropertyType::Detache,
            service_plan: ServicePlan::MowingAndLeaves,
            referral_opt_in: false,
            referral: ReferralContact::default(),
            comment: String::new(),
        }
    }

    fn duo_booking() -> BookingRequest {
        BookingRequest {
            referral_opt_in: true,
            referral: ReferralContact {
                name: "Marie Gagnon".into(),
                address: "125 Rue des Érables, Québec".into(),
                phone: "(418) 555-0199".into(),
                email: "marie@example.com".into(),
            },
            comment: "Piscine\nChien gentil".into(),
            ..booking()
        }
    }

    #[test]
    fn single_record_without_referral() {
        let records = flat_records(&booking());
        assert_eq!(
            records,
            vec![
                "Jean Tremblay;(418) 555-0123;jean@example.com;123 Rue des Érables, Québec;\
                 Maison Détachée;Entretien régulier + Nettoyage des feuilles;NON;Aucun"
                    .to_string()
            ]
        );
    }

    #[test]
    fn duo_produces_two_records_sharing_plan_and_comment() {
        let records = flat_records(&duo_booking());
        assert_eq!(records.len(), 2);

        let first: Vec<&str> = records[0].split(';').collect();
        let second: Vec<&str> = records[1].split(';').collect();
        assert_eq!(first.len(), 8);
        assert_eq!(second.len(), 8);
        assert_eq!(first[4..6], second[4..6]);
        assert_eq!(first[7], "Piscine | Chien gentil");
        assert_eq!(first[7], second[7]);
        assert_eq!(first[6], "OUI (Client 1)");
        assert_eq!(second[6], "OUI (Client 2)");
        assert_eq!(second[..4], ["Marie Gagnon", "(418) 555-0199", "marie@example.com", "125 Rue des Érables, Québec"]);
    }

    #[test]
    fn separators_in_free_text_keep_eight_columns() {
        let request = BookingRequest {
            name: "Tremblay; Jean".into(),
            address: "123 Rue A; app. 4".into(),
            comment: "a;b\nc".into(),
            ..duo_booking()
        };
        for record in flat_records(&request) {
            assert_eq!(record.split(';').count(), 8, "{record}");
        }
        let first = &flat_records(&request)[0];
        assert!(first.starts_with("Tremblay, Jean;"));
        assert!(first.ends_with(";a,b | c"));
    }

    #[test]
    fn comment_line_breaks_become_separators() {
        assert_eq!(sanitize_comment("a\r\nb\nc\rd"), "a | b | c | d");
        assert_eq!(sanitize_comment("rien"), "rien");
    }

    #[test]
    fn params_use_sentinels_without_referral() {
        let params = template_params(&booking());
        assert_eq!(params.is_duo, "NON");
        assert!(!params.is_duo_bool);
        assert_eq!(params.referral_name, "N/A");
        assert_eq!(params.referral_email, "N/A");
        assert_eq!(params.comment, "Aucun commentaire");
        assert_eq!(params.to_name, "Admin Altea");
    }

    #[test]
    fn params_serialize_with_template_keys() {
        let value = serde_json::to_value(template_params(&duo_booking())).unwrap();
        assert_eq!(value["v_nom"], "Marie Gagnon");
        assert_eq!(value["v_tel"], "(418) 555-0199");
        assert_eq!(value["is_duo"], "OUI");
        assert_eq!(value["is_duo_bool"], true);
        assert_eq!(value["commentaire"], "Piscine\nChien gentil");
        assert_eq!(value["lawn_type_display"], "Maison Détachée");
        assert!(value["excel_lines"].as_str().unwrap().contains('\n'));
    }

    #[test]
    fn submit_sends_admin_template_once() {
        let adapter = SubmissionAdapter::new(config(), RecordingTransport::default());
        block_on(adapter.submit(&booking())).unwrap();

        let calls = adapter.transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "template_admin");
        assert_eq!(calls[0].1.client_name, "Jean Tremblay");
    }

    #[test]
    fn client_confirmation_follows_admin_notification() {
        let config = EmailJsConfig {
            client_template_id: Some("template_client".to_string()),
            ..config()
        };
        let adapter = SubmissionAdapter::new(config, RecordingTransport::default());
        block_on(adapter.submit(&booking())).unwrap();

        let templates: Vec<String> = adapter
            .transport
            .calls
            .borrow()
            .iter()
            .map(|(template, _)| template.clone())
            .collect();
        assert_eq!(templates, vec!["template_admin", "template_client"]);
    }

    #[test]
    fn failed_admin_send_skips_confirmation_and_maps_message() {
        let config = EmailJsConfig {
            client_template_id: Some("template_client".to_string()),
            ..config()
        };
        let transport = RecordingTransport::failing_once(TransportError::Network("offline".into()));
        let adapter = SubmissionAdapter::new(config, transport);

        let error = block_on(adapter.submit(&booking())).unwrap_err();
        assert_eq!(error, SubmitError::Transport(TransportError::Network("offline".into())));
        assert_eq!(error.user_message(), SEND_FAILED_MESSAGE);
        assert_eq!(adapter.transport.calls.borrow().len(), 1);

        // no automatic retry; a manual re-submit goes through
        block_on(adapter.submit(&booking())).unwrap();
        assert_eq!(adapter.transport.calls.borrow().len(), 3);
    }

    #[test]
    fn misconfigured_adapter_never_calls_transport() {
        let config = EmailJsConfig {
            admin_template_id: String::new(),
            ..config()
        };
        let adapter = SubmissionAdapter::new(config, RecordingTransport::default());

        let error = block_on(adapter.submit(&booking())).unwrap_err();
        assert!(matches!(error, SubmitError::Config(ConfigError::Missing("admin_template_id"))));
        assert!(error.user_message().contains(CONTACT_INFO.phone));
        assert!(adapter.transport.calls.borrow().is_empty());
    }

    #[test]
    fn rejected_status_is_reported() {
        let transport = RecordingTransport::failing_once(TransportError::Rejected {
            status: 400,
            body: "The template ID is invalid".into(),
        });
        let adapter = SubmissionAdapter::new(config(), transport);
        let error = block_on(adapter.submit(&booking())).unwrap_err();
        assert_eq!(
            error.to_string(),
            "email send failed: email provider answered 400: The template ID is invalid"
        );
    }
}
