use std::rc::Rc;

use yew::Reducible;

use crate::models::{BookingRequest, PropertyType, ReferralContact, ServicePlan};

pub const PHONE_LENGTH_ERROR: &str = "Le numéro doit contenir 10 chiffres.";
pub const ADDRESS_PRECISION_ERROR: &str = "Veuillez entrer une adresse plus précise.";
pub const REQUIRED_ERROR: &str = "Ce champ est requis.";
pub const EMAIL_ERROR: &str = "Veuillez entrer un courriel valide.";
pub const REFERRAL_INCOMPLETE_ERROR: &str = "Veuillez remplir toutes les informations du voisin.";
pub const REFERRAL_PHONE_ERROR: &str = "Le numéro du voisin doit contenir 10 chiffres.";

const PHONE_DIGITS: usize = 10;
const MIN_ADDRESS_CHARS: usize = 5;

pub fn phone_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Reformats whatever the visitor typed as `(XXX) XXX-XXXX`, progressively.
/// A leading country code `1` on an 11-digit number is dropped; digits past
/// the tenth are ignored.
pub fn format_phone(value: &str) -> String {
    let mut digits = phone_digits(value);
    if digits.len() == PHONE_DIGITS + 1 && digits.starts_with('1') {
        digits.remove(0);
    }
    digits.truncate(PHONE_DIGITS);

    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

/// Collapses whitespace runs into single spaces and trims both ends.
pub fn clean_address(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Error shown when the visitor leaves a partially typed phone number.
pub fn phone_blur_error(phone: &str) -> Option<&'static str> {
    let count = phone_digits(phone).len();
    (count > 0 && count < PHONE_DIGITS).then_some(PHONE_LENGTH_ERROR)
}

/// Expects an already cleaned address.
pub fn address_blur_error(address: &str) -> Option<&'static str> {
    let count = address.chars().count();
    (count > 0 && count < MIN_ADDRESS_CHARS).then_some(ADDRESS_PRECISION_ERROR)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub address: Option<&'static str>,
    pub email: Option<&'static str>,
    pub referral: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.email.is_none()
            && self.referral.is_none()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormPhase {
    /// `error` holds the message from the last failed send, if any.
    Editing { error: Option<String> },
    Submitting,
    Submitted,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Field {
    Name,
    Address,
    Email,
    Phone,
    Comment,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReferralField {
    Name,
    Address,
    Phone,
    Email,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    Edit(Field, String),
    Blur(Field),
    EditReferral(ReferralField, String),
    BlurReferral(ReferralField),
    SetReferralOptIn(bool),
    SelectProperty(PropertyType),
    SelectPlan(ServicePlan),
    /// Plan picked from the pricing section.
    Preselect(PropertyType, ServicePlan),
    SubmitRequested,
    SubmitFinished(Result<(), String>),
    Reset,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingForm {
    pub request: BookingRequest,
    pub errors: FieldErrors,
    pub phase: FormPhase,
    /// Bumped every time the form enters `Submitting`; the view keys its send effect on it.
    pub attempts: u32,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new(PropertyType::Jumele, ServicePlan::Mowing)
    }
}

impl BookingForm {
    pub fn new(property_type: PropertyType, service_plan: ServicePlan) -> Self {
        Self {
            request: BookingRequest::new(property_type, service_plan),
            errors: FieldErrors::default(),
            phase: FormPhase::Editing { error: None },
            attempts: 0,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn submission_error(&self) -> Option<&str> {
        match &self.phase {
            FormPhase::Editing { error } => error.as_deref(),
            _ => None,
        }
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Edit(field, value) => self.edit(field, value),
            FormAction::Blur(field) => self.blur(field),
            FormAction::EditReferral(field, value) => self.edit_referral(field, value),
            FormAction::BlurReferral(field) => {
                if field == ReferralField::Address {
                    self.request.referral.address = clean_address(&self.request.referral.address);
                }
            }
            FormAction::SetReferralOptIn(opt_in) => {
                self.request.referral_opt_in = opt_in;
                if !opt_in {
                    self.errors.referral = None;
                }
            }
            FormAction::SelectProperty(property_type) => self.request.property_type = property_type,
            FormAction::SelectPlan(plan) => self.request.service_plan = plan,
            FormAction::Preselect(property_type, plan) => {
                self.request.property_type = property_type;
                self.request.service_plan = plan;
            }
            FormAction::SubmitRequested => self.request_submit(),
            FormAction::SubmitFinished(result) => self.finish(result),
            FormAction::Reset => self.reset(),
        }
    }

    fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Name => {
                self.request.name = value;
                self.errors.name = None;
            }
            Field::Address => {
                self.request.address = value;
                self.errors.address = None;
            }
            Field::Email => {
                self.request.email = value;
                self.errors.email = None;
            }
            Field::Phone => {
                self.request.phone = format_phone(&value);
                self.errors.phone = None;
            }
            Field::Comment => self.request.comment = value,
        }
    }

    fn blur(&mut self, field: Field) {
        match field {
            Field::Phone => {
                if let Some(error) = phone_blur_error(&self.request.phone) {
                    self.errors.phone = Some(error);
                }
            }
            Field::Address => {
                self.request.address = clean_address(&self.request.address);
                self.errors.address = address_blur_error(&self.request.address);
            }
            Field::Name | Field::Email | Field::Comment => {}
        }
    }

    fn edit_referral(&mut self, field: ReferralField, value: String) {
        let referral = &mut self.request.referral;
        match field {
            ReferralField::Name => referral.name = value,
            ReferralField::Address => referral.address = value,
            ReferralField::Phone => referral.phone = format_phone(&value),
            ReferralField::Email => referral.email = value,
        }
        self.errors.referral = None;
    }

    /// Runs every submit-time check, recording field errors. Address
    /// precision blocks submission just like the phone length does.
    pub fn validate(&mut self) -> bool {
        let request = &mut self.request;
        request.address = clean_address(&request.address);

        let mut errors = FieldErrors::default();
        if request.name.trim().is_empty() {
            errors.name = Some(REQUIRED_ERROR);
        }
        if phone_digits(&request.phone).len() != PHONE_DIGITS {
            errors.phone = Some(PHONE_LENGTH_ERROR);
        }
        errors.address = if request.address.is_empty() {
            Some(REQUIRED_ERROR)
        } else {
            address_blur_error(&request.address)
        };
        if !looks_like_email(&request.email) {
            errors.email = Some(EMAIL_ERROR);
        }
        if request.referral_opt_in {
            request.referral.address = clean_address(&request.referral.address);
            errors.referral = referral_error(&request.referral);
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    fn request_submit(&mut self) {
        if !matches!(self.phase, FormPhase::Editing { .. }) {
            log::debug!("submit ignored while {:?}", self.phase);
            return;
        }
        if !self.validate() {
            log::info!("booking rejected by validation: {:?}", self.errors);
            return;
        }
        self.phase = FormPhase::Submitting;
        self.attempts += 1;
    }

    fn finish(&mut self, result: Result<(), String>) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        self.phase = match result {
            Ok(()) => FormPhase::Submitted,
            Err(message) => FormPhase::Editing { error: Some(message) },
        };
    }

    fn reset(&mut self) {
        let property_type = self.request.property_type;
        let plan = self.request.service_plan;
        let attempts = self.attempts;
        *self = Self::new(property_type, plan);
        self.attempts = attempts;
    }
}

impl Reducible for BookingForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

fn looks_like_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

fn referral_error(referral: &ReferralContact) -> Option<&'static str> {
    if !referral.is_complete() {
        Some(REFERRAL_INCOMPLETE_ERROR)
    } else if phone_digits(&referral.phone).len() != PHONE_DIGITS {
        Some(REFERRAL_PHONE_ERROR)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn filled_form() -> BookingForm {
        let mut form = BookingForm::new(PropertyType::Detache, ServicePlan::MowingAndLeaves);
        form.apply(FormAction::Edit(Field::Name, "Jean Tremblay".into()));
        form.apply(FormAction::Edit(Field::Phone, "418-555-0123".into()));
        form.apply(FormAction::Edit(Field::Address, "123 Rue des Érables, Québec".into()));
        form.apply(FormAction::Edit(Field::Email, "jean@example.com".into()));
        form
    }

    #[rstest]
    #[case("", "")]
    #[case("4", "4")]
    #[case("418", "418")]
    #[case("4185", "(418) 5")]
    #[case("418555", "(418) 555")]
    #[case("4185550", "(418) 555-0")]
    #[case("418-555-0123", "(418) 555-0123")]
    #[case("1 (418) 555-0123", "(418) 555-0123")]
    #[case("41855501234", "(418) 555-0123")]
    #[case("(418) 555-01234", "(418) 555-0123")]
    #[case("abc", "")]
    fn phone_is_formatted_progressively(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(format_phone(raw), expected);
    }

    #[rstest]
    #[case("  123   Rue\tdes  Pins \n", "123 Rue des Pins")]
    #[case("   ", "")]
    #[case("12 A", "12 A")]
    fn address_is_cleaned(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(clean_address(raw), expected);
    }

    #[test]
    fn short_phone_on_blur_shows_error_and_blocks_submit() {
        let mut form = filled_form();
        form.apply(FormAction::Edit(Field::Phone, "555-1234".into()));
        form.apply(FormAction::Blur(Field::Phone));
        assert_eq!(form.errors.phone, Some(PHONE_LENGTH_ERROR));

        form.apply(FormAction::SubmitRequested);
        assert_eq!(form.phase, FormPhase::Editing { error: None });
        assert_eq!(form.attempts, 0);
    }

    #[test]
    fn empty_phone_blur_is_silent_but_submit_rejects() {
        let mut form = filled_form();
        form.apply(FormAction::Edit(Field::Phone, String::new()));
        form.apply(FormAction::Blur(Field::Phone));
        assert_eq!(form.errors.phone, None);

        form.apply(FormAction::SubmitRequested);
        assert_eq!(form.errors.phone, Some(PHONE_LENGTH_ERROR));
        assert!(!form.is_submitting());
    }

    #[test]
    fn editing_phone_clears_its_error() {
        let mut form = filled_form();
        form.apply(FormAction::Edit(Field::Phone, "555".into()));
        form.apply(FormAction::Blur(Field::Phone));
        assert!(form.errors.phone.is_some());
        form.apply(FormAction::Edit(Field::Phone, "5551".into()));
        assert_eq!(form.errors.phone, None);
    }

    #[test]
    fn address_blur_cleans_and_flags_short_values() {
        let mut form = filled_form();
        form.apply(FormAction::Edit(Field::Address, "  12   b ".into()));
        form.apply(FormAction::Blur(Field::Address));
        assert_eq!(form.request.address, "12 b");
        assert_eq!(form.errors.address, Some(ADDRESS_PRECISION_ERROR));

        form.apply(FormAction::Edit(Field::Address, "12 rue Principale".into()));
        assert_eq!(form.errors.address, None);
        form.apply(FormAction::Blur(Field::Address));
        assert_eq!(form.errors.address, None);
    }

    #[test]
    fn short_address_blocks_submit() {
        let mut form = filled_form();
        form.apply(FormAction::Edit(Field::Address, "12 b".into()));
        form.apply(FormAction::SubmitRequested);
        assert_eq!(form.errors.address, Some(ADDRESS_PRECISION_ERROR));
        assert!(!form.is_submitting());
    }

    #[test]
    fn missing_name_and_bad_email_are_reported() {
        let mut form = filled_form();
        form.apply(FormAction::Edit(Field::Name, "  ".into()));
        form.apply(FormAction::Edit(Field::Email, "jean.example.com".into()));
        assert!(!form.validate());
        assert_eq!(form.errors.name, Some(REQUIRED_ERROR));
        assert_eq!(form.errors.email, Some(EMAIL_ERROR));
    }

    #[test]
    fn referral_opt_in_requires_every_field() {
        let mut form = filled_form();
        form.apply(FormAction::SetReferralOptIn(true));
        form.apply(FormAction::EditReferral(ReferralField::Name, "Marie Gagnon".into()));
        form.apply(FormAction::EditReferral(ReferralField::Address, "125 Rue des Érables".into()));
        form.apply(FormAction::EditReferral(ReferralField::Phone, "4185550199".into()));

        form.apply(FormAction::SubmitRequested);
        assert_eq!(form.errors.referral, Some(REFERRAL_INCOMPLETE_ERROR));
        assert_eq!(form.attempts, 0);

        form.apply(FormAction::EditReferral(ReferralField::Email, "marie@example.com".into()));
        assert_eq!(form.errors.referral, None);
        form.apply(FormAction::SubmitRequested);
        assert_eq!(form.phase, FormPhase::Submitting);
        assert_eq!(form.request.referral.phone, "(418) 555-0199");
    }

    #[test]
    fn referral_fields_are_ignored_without_opt_in() {
        let mut form = filled_form();
        form.apply(FormAction::EditReferral(ReferralField::Name, "Marie".into()));
        form.apply(FormAction::SubmitRequested);
        assert_eq!(form.phase, FormPhase::Submitting);
    }

    #[test]
    fn short_referral_phone_blocks_submit() {
        let mut form = filled_form();
        form.apply(FormAction::SetReferralOptIn(true));
        form.apply(FormAction::EditReferral(ReferralField::Name, "Marie Gagnon".into()));
        form.apply(FormAction::EditReferral(ReferralField::Address, "125 Rue des Érables".into()));
        form.apply(FormAction::EditReferral(ReferralField::Phone, "418555".into()));
        form.apply(FormAction::EditReferral(ReferralField::Email, "marie@example.com".into()));

        form.apply(FormAction::SubmitRequested);
        assert_eq!(form.errors.referral, Some(REFERRAL_PHONE_ERROR));
        assert_eq!(form.phase, FormPhase::Editing { error: None });
        assert_eq!(form.attempts, 0);
    }

    #[test]
    fn referral_address_is_cleaned_on_blur() {
        let mut form = filled_form();
        form.apply(FormAction::SetReferralOptIn(true));
        form.apply(FormAction::EditReferral(ReferralField::Address, "  12   Rue  Y ".into()));
        form.apply(FormAction::BlurReferral(ReferralField::Address));
        assert_eq!(form.request.referral.address, "12 Rue Y");

        // other referral fields are left as typed
        form.apply(FormAction::EditReferral(ReferralField::Name, " Marie ".into()));
        form.apply(FormAction::BlurReferral(ReferralField::Name));
        assert_eq!(form.request.referral.name, " Marie ");
    }

    #[test]
    fn full_lifecycle_with_failure_retry_and_reset() {
        let mut form = filled_form();
        form.apply(FormAction::Edit(Field::Comment, "Chien dans la cour".into()));

        form.apply(FormAction::SubmitRequested);
        assert_eq!(form.phase, FormPhase::Submitting);
        assert_eq!(form.attempts, 1);

        // a second click while sending changes nothing
        form.apply(FormAction::SubmitRequested);
        assert_eq!(form.attempts, 1);

        let before_failure = form.request.clone();
        form.apply(FormAction::SubmitFinished(Err("réseau".into())));
        assert_eq!(form.submission_error(), Some("réseau"));
        assert_eq!(form.request, before_failure);

        form.apply(FormAction::SubmitRequested);
        assert_eq!(form.attempts, 2);
        form.apply(FormAction::SubmitFinished(Ok(())));
        assert_eq!(form.phase, FormPhase::Submitted);

        form.apply(FormAction::Reset);
        assert_eq!(form.phase, FormPhase::Editing { error: None });
        assert_eq!(form.request, BookingRequest::new(PropertyType::Detache, ServicePlan::MowingAndLeaves));
        assert!(form.errors.is_empty());
    }

    #[test]
    fn late_result_outside_submitting_is_ignored() {
        let mut form = filled_form();
        form.apply(FormAction::SubmitFinished(Ok(())));
        assert_eq!(form.phase, FormPhase::Editing { error: None });
    }

    #[test]
    fn preselect_updates_plan_and_property() {
        let mut form = BookingForm::default();
        form.apply(FormAction::Preselect(PropertyType::Detache, ServicePlan::LeavesOnly));
        assert_eq!(form.request.property_type, PropertyType::Detache);
        assert_eq!(form.request.service_plan, ServicePlan::LeavesOnly);
    }

    #[test]
    fn reducer_returns_new_state() {
        let form = Rc::new(filled_form());
        let next = form.clone().reduce(FormAction::SubmitRequested);
        assert_eq!(form.phase, FormPhase::Editing { error: None });
        assert_eq!(next.phase, FormPhase::Submitting);
    }

    proptest! {
        #[test]
        fn ten_digits_always_format_fully(
            digits in "[2-9][0-9]{9}",
            noise in proptest::collection::vec("[ ()./a-z+-]{0,3}", 10),
        ) {
            let raw: String = digits
                .chars()
                .zip(noise.iter())
                .map(|(d, n)| format!("{n}{d}"))
                .collect();
            let formatted = format_phone(&raw);
            let expected = format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]);
            prop_assert_eq!(formatted, expected);
        }

        #[test]
        fn formatting_is_stable(raw in ".{0,20}") {
            let once = format_phone(&raw);
            prop_assert_eq!(format_phone(&once), once.clone());
        }

        #[test]
        fn address_cleaning_is_idempotent(raw in "\\PC{0,40}") {
            let once = clean_address(&raw);
            prop_assert_eq!(clean_address(&once), once.clone());
        }
    }
}
