//! Contact form: field rules and the submission state machine.
//!
//! ```text
//! Idle ──submit──> Validating ──ok──> Submitting ──delivered──> Submitted ──reset──> Idle
//!                      │                   │
//!                      └──field errors──> Idle <──delivery failed──┘
//! ```

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;

// local part may not start or end with a dot; domain needs at least one dot and an alphabetic TLD
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$").unwrap()
});

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_PHONE_DIGITS: usize = 10;
pub const MIN_REQUIREMENTS_CHARS: usize = 10;

pub const DELIVERY_FAILED: &str = "Error sending message. Please try again or contact us directly.";

/// `true` when `email` looks like a deliverable address.
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_REGEX.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Budget {
    From5kTo15k,
    From15kTo50k,
    From50kTo100k,
    Over100k,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeline {
    Asap,
    OneToThreeMonths,
    ThreeToSixMonths,
    OverSixMonths,
}

impl Budget {
    pub const ALL: [Budget; 4] = [
        Budget::From5kTo15k,
        Budget::From15kTo50k,
        Budget::From50kTo100k,
        Budget::Over100k,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Budget::From5kTo15k => "5k-15k",
            Budget::From15kTo50k => "15k-50k",
            Budget::From50kTo100k => "50k-100k",
            Budget::Over100k => "100k+",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Budget::From5kTo15k => "$5K - $15K",
            Budget::From15kTo50k => "$15K - $50K",
            Budget::From50kTo100k => "$50K - $100K",
            Budget::Over100k => "$100K+",
        }
    }
}

impl Timeline {
    pub const ALL: [Timeline; 4] = [
        Timeline::Asap,
        Timeline::OneToThreeMonths,
        Timeline::ThreeToSixMonths,
        Timeline::OverSixMonths,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Timeline::Asap => "asap",
            Timeline::OneToThreeMonths => "1-3months",
            Timeline::ThreeToSixMonths => "3-6months",
            Timeline::OverSixMonths => "6months+",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Timeline::Asap => "ASAP",
            Timeline::OneToThreeMonths => "1-3 Months",
            Timeline::ThreeToSixMonths => "3-6 Months",
            Timeline::OverSixMonths => "6+ Months",
        }
    }
}

impl FromStr for Budget {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Budget::ALL.into_iter().find(|b| b.value() == s).ok_or(())
    }
}

impl FromStr for Timeline {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Timeline::ALL.into_iter().find(|t| t.value() == s).ok_or(())
    }
}

/// Raw form input, exactly as typed. Select values hold the option's wire value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub requirements: String,
    pub budget: String,
    pub timeline: String,
}

impl ContactFormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Company => &self.company,
            Field::Requirements => &self.requirements,
            Field::Budget => &self.budget,
            Field::Timeline => &self.timeline,
        }
    }
}

/// Form input that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub requirements: String,
    pub budget: Budget,
    pub timeline: Timeline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Requirements,
    Budget,
    Timeline,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Company => "company",
            Field::Requirements => "requirements",
            Field::Budget => "budget",
            Field::Timeline => "timeline",
        };
        f.write_str(name)
    }
}

/// Per-field validation messages, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(Field, &'static str)>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, msg)| *msg)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.iter().map(|(f, _)| *f)
    }

    pub fn clear(&mut self, field: Field) {
        self.0.retain(|(f, _)| *f != field);
    }

    /// Replace the message for `field`, keeping field order. `None` clears it.
    pub fn set(&mut self, field: Field, message: Option<&'static str>) {
        self.clear(field);
        if let Some(message) = message {
            let at = self.0.partition_point(|(f, _)| *f < field);
            self.0.insert(at, (field, message));
        }
    }

    fn push(&mut self, field: Field, message: &'static str) {
        self.0.push((field, message));
    }
}

/// Check one field. `None` means it passes.
pub fn check_field(field: Field, data: &ContactFormData) -> Option<&'static str> {
    match field {
        Field::Name => (data.name.chars().count() < MIN_NAME_CHARS)
            .then_some("Name must be at least 2 characters"),
        Field::Email => (!is_valid_email(&data.email)).then_some("Invalid email address"),
        Field::Phone => {
            let digits = data.phone.chars().filter(char::is_ascii_digit).count();
            (digits < MIN_PHONE_DIGITS).then_some("Phone number must be at least 10 digits")
        }
        Field::Company => None,
        Field::Requirements => (data.requirements.chars().count() < MIN_REQUIREMENTS_CHARS)
            .then_some("Please describe your project requirements"),
        Field::Budget => data
            .budget
            .parse::<Budget>()
            .is_err()
            .then_some("Please select a budget range"),
        Field::Timeline => data
            .timeline
            .parse::<Timeline>()
            .is_err()
            .then_some("Please select a timeline"),
    }
}

const FIELDS: [Field; 7] = [
    Field::Name,
    Field::Email,
    Field::Phone,
    Field::Company,
    Field::Requirements,
    Field::Budget,
    Field::Timeline,
];

/// Validate every field; on success the typed request is returned.
pub fn validate(data: &ContactFormData) -> std::result::Result<ContactRequest, FieldErrors> {
    let mut errors = FieldErrors::default();
    for field in FIELDS {
        if let Some(message) = check_field(field, data) {
            errors.push(field, message);
        }
    }

    match (data.budget.parse::<Budget>(), data.timeline.parse::<Timeline>()) {
        (Ok(budget), Ok(timeline)) if errors.is_empty() => Ok(ContactRequest {
            name: data.name.clone(),
            email: data.email.clone(),
            phone: data.phone.clone(),
            company: Some(data.company.trim())
                .filter(|c| !c.is_empty())
                .map(str::to_owned),
            requirements: data.requirements.clone(),
            budget,
            timeline,
        }),
        _ => Err(errors),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Submitted,
}

/// Contact form state owned by the contact section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFlow {
    phase: FormPhase,
    pub data: ContactFormData,
    errors: FieldErrors,
    failure: Option<&'static str>,
    /// Set once a submit was rejected; edits then revalidate as you type.
    revalidate: bool,
}

impl ContactFlow {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Form-level message shown when delivery failed.
    pub fn failure(&self) -> Option<&'static str> {
        self.failure
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    /// Submit control is enabled only while idle.
    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Idle
    }

    /// Update one input. Before the first rejected submit this only drops the
    /// field's stale error; afterwards the field is rechecked on every edit.
    pub fn edit(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.data.name,
            Field::Email => &mut self.data.email,
            Field::Phone => &mut self.data.phone,
            Field::Company => &mut self.data.company,
            Field::Requirements => &mut self.data.requirements,
            Field::Budget => &mut self.data.budget,
            Field::Timeline => &mut self.data.timeline,
        };
        *slot = value;
        if self.revalidate {
            let message = check_field(field, &self.data);
            self.errors.set(field, message);
        } else {
            self.errors.clear(field);
        }
    }

    /// Run validation and, if it passes, enter `Submitting`.
    ///
    /// Returns the request to deliver, or `None` when the form stays idle
    /// (invalid input, or a submission is already in flight).
    pub fn submit(&mut self) -> Option<ContactRequest> {
        if !self.can_submit() {
            return None;
        }
        self.phase = FormPhase::Validating;
        self.failure = None;
        match validate(&self.data) {
            Ok(request) => {
                self.errors = FieldErrors::default();
                self.revalidate = false;
                self.phase = FormPhase::Submitting;
                Some(request)
            }
            Err(errors) => {
                tracing::debug!(fields = errors.len(), "contact form rejected");
                self.errors = errors;
                self.revalidate = true;
                self.phase = FormPhase::Idle;
                None
            }
        }
    }

    /// Finish a submission. Success clears the form and shows the thank-you panel.
    pub fn delivered(&mut self, outcome: Result<()>) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        match outcome {
            Ok(()) => {
                self.data = ContactFormData::default();
                self.phase = FormPhase::Submitted;
            }
            Err(e) => {
                tracing::warn!("{e}");
                self.failure = Some(DELIVERY_FAILED);
                self.phase = FormPhase::Idle;
            }
        }
    }

    /// Leave the thank-you panel after the success timeout.
    pub fn reset(&mut self) {
        if self.phase == FormPhase::Submitted {
            self.phase = FormPhase::Idle;
        }
    }
}

/// Stand-in for the delivery backend: there is none, so every message is
/// accepted. Failures only reach [`ContactFlow::delivered`] from a real backend.
pub fn deliver(request: &ContactRequest) -> Result<()> {
    tracing::info!(
        budget = request.budget.value(),
        timeline = request.timeline.value(),
        company = request.company.as_deref().unwrap_or("-"),
        "contact request from {}",
        request.name
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;
    use pretty_assertions::assert_eq;

    fn valid_form() -> ContactFormData {
        ContactFormData {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "+1 (555) 123-4567".into(),
            company: String::new(),
            requirements: "Inventory system for three warehouses".into(),
            budget: "15k-50k".into(),
            timeline: "1-3months".into(),
        }
    }

    #[test]
    fn name_needs_two_characters() {
        let mut form = valid_form();
        form.name = "Al".into();
        assert_eq!(check_field(Field::Name, &form), None);
        form.name = "A".into();
        assert_eq!(
            check_field(Field::Name, &form),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a..b@example.com"));
        assert!(!is_valid_email(".ada@example.com"));
        assert!(!is_valid_email(""));

        let mut form = valid_form();
        form.email = "not-an-email".into();
        assert_eq!(check_field(Field::Email, &form), Some("Invalid email address"));
    }

    #[test]
    fn phone_counts_digits_only() {
        let mut form = valid_form();
        form.phone = "555-123-456".into();
        assert_eq!(
            check_field(Field::Phone, &form),
            Some("Phone number must be at least 10 digits")
        );
        form.phone = "5551234567".into();
        assert_eq!(check_field(Field::Phone, &form), None);
    }

    #[test]
    fn selects_must_use_known_values() {
        let mut form = valid_form();
        form.budget = String::new();
        form.timeline = "someday".into();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.get(Field::Budget), Some("Please select a budget range"));
        assert_eq!(errors.get(Field::Timeline), Some("Please select a timeline"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn wire_values_parse_back() {
        for budget in Budget::ALL {
            assert_eq!(budget.value().parse::<Budget>(), Ok(budget));
        }
        for timeline in Timeline::ALL {
            assert_eq!(timeline.value().parse::<Timeline>(), Ok(timeline));
        }
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = validate(&ContactFormData::default()).unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![
                Field::Name,
                Field::Email,
                Field::Phone,
                Field::Requirements,
                Field::Budget,
                Field::Timeline
            ]
        );
    }

    #[test]
    fn blank_company_becomes_none() {
        let request = validate(&valid_form()).unwrap();
        assert_eq!(request.company, None);

        let mut form = valid_form();
        form.company = "  Analytical Engines Ltd ".into();
        let request = validate(&form).unwrap();
        assert_eq!(request.company.as_deref(), Some("Analytical Engines Ltd"));
    }

    #[test]
    fn invalid_submit_returns_to_idle_with_errors() {
        let mut flow = ContactFlow::default();
        flow.edit(Field::Name, "A".into());
        assert_eq!(flow.submit(), None);
        assert_eq!(flow.phase(), FormPhase::Idle);
        assert_eq!(
            flow.errors().get(Field::Name),
            Some("Name must be at least 2 characters")
        );

        flow.edit(Field::Name, "Al".into());
        assert_eq!(flow.errors().get(Field::Name), None);
    }

    #[test]
    fn edits_revalidate_after_rejected_submit() {
        let mut flow = ContactFlow::default();
        // before any submit, typing never shows errors
        flow.edit(Field::Email, "nope".into());
        assert!(flow.errors().is_empty());

        flow.submit();
        flow.edit(Field::Email, "still-nope".into());
        assert_eq!(flow.errors().get(Field::Email), Some("Invalid email address"));

        flow.edit(Field::Email, "ada@example.com".into());
        assert_eq!(flow.errors().get(Field::Email), None);

        // a fixed field that breaks again gets its message back, in field order
        flow.edit(Field::Name, "Ada".into());
        flow.edit(Field::Name, "A".into());
        let fields: Vec<_> = flow.errors().fields().collect();
        assert_eq!(fields.first(), Some(&Field::Name));
    }

    #[test]
    fn simulated_delivery_always_succeeds() {
        let request = validate(&valid_form()).unwrap();
        assert!(deliver(&request).is_ok());
    }

    #[test]
    fn valid_submit_walks_the_happy_path() {
        let mut flow = ContactFlow {
            data: valid_form(),
            ..Default::default()
        };
        let request = flow.submit().unwrap();
        assert_eq!(flow.phase(), FormPhase::Submitting);
        assert!(!flow.can_submit());

        // second click while in flight is ignored
        assert_eq!(flow.submit(), None);

        flow.delivered(deliver(&request));
        assert_eq!(flow.phase(), FormPhase::Submitted);
        assert_eq!(flow.data, ContactFormData::default());

        flow.reset();
        assert_eq!(flow.phase(), FormPhase::Idle);
        assert!(flow.can_submit());
    }

    #[test]
    fn failed_delivery_keeps_input() {
        let mut flow = ContactFlow {
            data: valid_form(),
            ..Default::default()
        };
        flow.submit().unwrap();
        flow.delivered(Err(SiteError::Delivery("offline".into())));
        assert_eq!(flow.phase(), FormPhase::Idle);
        assert_eq!(flow.failure(), Some(DELIVERY_FAILED));
        assert_eq!(flow.data, valid_form());
    }

    #[test]
    fn stray_delivery_is_ignored() {
        let mut flow = ContactFlow::default();
        flow.delivered(Ok(()));
        assert_eq!(flow.phase(), FormPhase::Idle);
    }
}
