use folio_contact::{Contact, ContactError, ContactForm, ContactInner, init};
use folio_domain::config::ContactConfig;
use folio_domain::contact::{ContactDraft, ContactPhase};
use folio_kernel::SAFE_ALPHABET;
use std::time::Duration;
use tokio::time::Instant;

fn draft() -> ContactDraft {
    ContactDraft {
        name: "Grace Hopper".into(),
        email: "grace@example.com".into(),
        subject: "Compilers".into(),
        message: "Shall we talk about COBOL?".into(),
    }
}

#[tokio::test(start_paused = true)]
async fn submission_waits_the_configured_delay() {
    let contact = Contact::new(ContactInner::new(Duration::from_millis(1000)));
    let mut form = ContactForm::new();

    let started = Instant::now();
    let receipt = contact.submit(&mut form, draft()).await.expect("submit");

    assert!(started.elapsed() >= Duration::from_millis(1000));
    assert_eq!(receipt.id.len(), 12);
    assert!(receipt.id.chars().all(|c| SAFE_ALPHABET.contains(&c)));
    assert!(receipt.submitted_at > 0);
    assert_eq!(form.phase(), &ContactPhase::Submitted { receipt });
    assert_eq!(contact.submissions(), 1);
}

#[tokio::test(start_paused = true)]
async fn invalid_submission_returns_immediately() {
    let contact = Contact::new(ContactInner::new(Duration::from_secs(1)));
    let mut form = ContactForm::new();

    let started = Instant::now();
    let err = contact
        .submit(&mut form, ContactDraft { name: String::new(), ..draft() })
        .await
        .expect_err("missing name");

    assert!(matches!(err, ContactError::Validation { .. }));
    assert_eq!(started.elapsed(), Duration::ZERO);
    assert_eq!(form.phase(), &ContactPhase::Editing);
    assert_eq!(contact.submissions(), 0);
}

#[tokio::test(start_paused = true)]
async fn each_submission_confirms_exactly_once() {
    let contact = Contact::new(ContactInner::new(Duration::from_millis(10)));
    let mut form = ContactForm::new();

    contact.submit(&mut form, draft()).await.expect("first");
    let again = contact.submit(&mut form, draft()).await;
    assert!(matches!(again, Err(ContactError::InvalidTransition { .. })));

    form.reset().expect("reset");
    contact.submit(&mut form, draft()).await.expect("second");
    assert_eq!(contact.submissions(), 2);
}

#[tokio::test(start_paused = true)]
async fn concurrent_visitors_do_not_interfere() {
    let contact = Contact::new(ContactInner::new(Duration::from_millis(500)));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let contact = contact.clone();
        handles.push(tokio::spawn(async move {
            let mut form = ContactForm::new();
            contact.submit(&mut form, draft()).await.map(|receipt| receipt.id)
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.expect("join").expect("submit"));
    }
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 8);
    assert_eq!(contact.submissions(), 8);
}

#[test]
fn init_rejects_excessive_delay() {
    let err = init(&ContactConfig { submit_delay_ms: 60_000 }).expect_err("too slow");
    assert!(matches!(err, ContactError::Config { .. }));

    let slice = init(&ContactConfig::default()).expect("default config");
    let contact = slice.state.as_any().downcast_ref::<Contact>().expect("contact slice");
    assert_eq!(contact.delay, Duration::from_secs(1));
}
