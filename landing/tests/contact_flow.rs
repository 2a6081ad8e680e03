use pretty_assertions::assert_eq;
use xperts_landing::SiteError;
use xperts_landing::contact::{self, Budget, ContactFlow, DELIVERY_FAILED, Field, FormPhase, Timeline};
use xperts_landing::newsletter::{NewsletterFlow, SignupPhase};

fn fill(flow: &mut ContactFlow) {
    flow.edit(Field::Name, "Ada Lovelace".into());
    flow.edit(Field::Email, "ada@example.com".into());
    flow.edit(Field::Phone, "+1 (555) 123-4567".into());
    flow.edit(Field::Requirements, "A billing portal for our clinics".into());
    flow.edit(Field::Budget, Budget::From15kTo50k.value().into());
    flow.edit(Field::Timeline, Timeline::OneToThreeMonths.value().into());
}

#[test]
fn empty_submit_flags_every_required_field() {
    let mut flow = ContactFlow::default();
    assert_eq!(flow.submit(), None);
    assert_eq!(flow.phase(), FormPhase::Idle);

    let flagged: Vec<Field> = flow.errors().fields().collect();
    assert_eq!(
        flagged,
        vec![
            Field::Name,
            Field::Email,
            Field::Phone,
            Field::Requirements,
            Field::Budget,
            Field::Timeline,
        ]
    );
    assert_eq!(flow.errors().get(Field::Company), None);
}

#[test]
fn full_round_trip_returns_to_idle_with_blank_form() {
    let mut flow = ContactFlow::default();
    fill(&mut flow);

    let request = flow.submit().expect("valid form should submit");
    assert!(flow.is_submitting());
    assert!(!flow.can_submit());
    assert_eq!(request.company, None);
    assert_eq!(request.budget, Budget::From15kTo50k);
    assert_eq!(request.timeline, Timeline::OneToThreeMonths);

    // a second click while in flight is ignored
    assert_eq!(flow.submit(), None);

    flow.delivered(contact::deliver(&request));
    assert!(flow.is_submitted());
    assert_eq!(flow.data.name, "");
    assert_eq!(flow.data.budget, "");

    flow.reset();
    assert_eq!(flow.phase(), FormPhase::Idle);
    assert!(flow.errors().is_empty());
}

#[test]
fn failed_delivery_keeps_input_and_shows_message() {
    let mut flow = ContactFlow::default();
    fill(&mut flow);
    flow.edit(Field::Company, "Analytical Engines Ltd".into());

    let request = flow.submit().expect("valid form should submit");
    assert_eq!(request.company.as_deref(), Some("Analytical Engines Ltd"));

    flow.delivered(Err(SiteError::Delivery("backend offline".into())));
    assert_eq!(flow.phase(), FormPhase::Idle);
    assert_eq!(flow.failure(), Some(DELIVERY_FAILED));
    assert_eq!(flow.data.name, "Ada Lovelace");

    // retry clears the banner
    assert!(flow.submit().is_some());
    assert_eq!(flow.failure(), None);
}

#[test]
fn fixing_a_field_clears_only_its_error() {
    let mut flow = ContactFlow::default();
    flow.submit();
    let before = flow.errors().len();

    flow.edit(Field::Email, "ada@example.com".into());
    assert_eq!(flow.errors().get(Field::Email), None);
    assert_eq!(flow.errors().len(), before - 1);
    assert_eq!(flow.errors().get(Field::Name), Some("Name must be at least 2 characters"));
}

#[test]
fn still_invalid_edit_keeps_its_error() {
    let mut flow = ContactFlow::default();
    flow.submit();

    flow.edit(Field::Phone, "555-0100".into());
    assert_eq!(flow.errors().get(Field::Phone), Some("Phone number must be at least 10 digits"));

    flow.edit(Field::Email, ".ada@example.com".into());
    assert_eq!(flow.errors().get(Field::Email), Some("Invalid email address"));
}

#[test]
fn newsletter_signup_cycle() {
    let mut flow = NewsletterFlow::default();
    flow.set_email("  reader@example.org ".into());

    assert_eq!(flow.submit().as_deref(), Some("reader@example.org"));
    assert_eq!(flow.phase(), SignupPhase::Submitting);

    flow.subscribed();
    assert_eq!(flow.phase(), SignupPhase::Subscribed);
    assert_eq!(flow.email, "");

    flow.reset();
    assert_eq!(flow.phase(), SignupPhase::Idle);
}
