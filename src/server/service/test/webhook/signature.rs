use super::*;

const PAYLOAD: &str = r#"{"id":"evt_1","type":"ping","data":{"object":{}}}"#;

/// Tests a correctly signed, fresh payload.
///
/// Expected: Ok
#[test]
fn accepts_valid_signature() {
    let now = Utc::now();
    let header = stripe::signature_header(stripe::TEST_WEBHOOK_SECRET, PAYLOAD, now.timestamp());

    assert!(verify_signature(
        PAYLOAD.as_bytes(),
        Some(header.as_str()),
        stripe::TEST_WEBHOOK_SECRET,
        now
    )
    .is_ok());
}

/// Tests that one matching `v1` entry among several is enough.
///
/// Expected: Ok
#[test]
fn accepts_any_matching_v1_entry() {
    let now = Utc::now();
    let valid = stripe::signature_header(stripe::TEST_WEBHOOK_SECRET, PAYLOAD, now.timestamp());
    let header = format!("{},v1={}", valid, "00".repeat(32));

    assert!(verify_signature(
        PAYLOAD.as_bytes(),
        Some(header.as_str()),
        stripe::TEST_WEBHOOK_SECRET,
        now
    )
    .is_ok());
}

/// Tests rejected signatures.
///
/// Expected: Err(AppError::BadRequest) for missing, malformed, tampered, wrong-secret
/// and stale signatures
#[test]
fn rejects_bad_signatures() {
    let now = Utc::now();
    let secret = stripe::TEST_WEBHOOK_SECRET;
    let valid = stripe::signature_header(secret, PAYLOAD, now.timestamp());
    let foreign = stripe::signature_header("whsec_other", PAYLOAD, now.timestamp());
    let stale = stripe::signature_header(
        secret,
        PAYLOAD,
        (now - Duration::seconds(301)).timestamp(),
    );
    let tampered = PAYLOAD.replace("ping", "pong");

    let cases: [(&[u8], Option<&str>); 5] = [
        (PAYLOAD.as_bytes(), None),
        (PAYLOAD.as_bytes(), Some("garbage")),
        (tampered.as_bytes(), Some(valid.as_str())),
        (PAYLOAD.as_bytes(), Some(foreign.as_str())),
        (PAYLOAD.as_bytes(), Some(stale.as_str())),
    ];

    for (payload, header) in cases {
        assert!(matches!(
            verify_signature(payload, header, secret, now),
            Err(AppError::BadRequest(_))
        ));
    }
}

/// Tests timestamps at the edges of the integer range and far in the future.
///
/// Expected: Err(AppError::BadRequest) without overflowing
#[test]
fn rejects_out_of_range_timestamps() {
    let now = Utc::now();
    let future = format!("t={},v1={}", now.timestamp() + 301, "00".repeat(32));
    let headers = [
        format!("t={},v1=00", i64::MIN),
        format!("t={},v1=00", i64::MAX),
        future,
    ];

    for header in &headers {
        assert!(matches!(
            verify_signature(
                PAYLOAD.as_bytes(),
                Some(header.as_str()),
                stripe::TEST_WEBHOOK_SECRET,
                now
            ),
            Err(AppError::BadRequest(_))
        ));
    }
}
