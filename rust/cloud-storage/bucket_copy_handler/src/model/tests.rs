use super::*;
use cool_asserts::assert_matches;

fn object_ref(bucket: &str, key: &str) -> ObjectRef {
    ObjectRef {
        bucket: BucketName::parse(bucket).unwrap(),
        key: ObjectKey::parse(key).unwrap(),
    }
}

#[test]
fn accepts_valid_bucket_names() {
    for name in [
        "source-bucket",
        "destination-bucket",
        "abc",
        "my.bucket.2024",
        "0-numeric-start",
    ] {
        assert_eq!(BucketName::parse(name).unwrap().as_str(), name);
    }
}

#[test]
fn rejects_invalid_bucket_names() {
    let long = "a".repeat(64);
    for name in [
        "",
        "ab",
        long.as_str(),
        "Upper-Case",
        "under_score",
        "-leading-hyphen",
        "trailing-hyphen-",
        "double..dot",
        "192.168.5.4",
        "space bucket",
    ] {
        assert_matches!(
            BucketName::parse(name),
            Err(ValidationErr::InvalidBucketName { name: rejected, .. }) => {
                assert_eq!(rejected, name);
            }
        );
    }
}

#[test]
fn object_keys_must_be_non_empty_and_bounded() {
    assert!(ObjectKey::parse("src/design.png").is_ok());
    assert!(ObjectKey::parse("k".repeat(1024)).is_ok());
    assert_matches!(
        ObjectKey::parse(""),
        Err(ValidationErr::InvalidObjectKey { .. })
    );
    assert_matches!(
        ObjectKey::parse("k".repeat(1025)),
        Err(ValidationErr::InvalidObjectKey { .. })
    );
}

#[test]
fn empty_request_deserializes() {
    let request: CopyRequest = serde_json::from_str("{}").unwrap();
    assert!(request.source_object.is_none());
    assert!(request.destination_object.is_none());
}

#[test]
fn unrelated_trigger_payloads_deserialize() {
    let request: CopyRequest = serde_json::from_value(serde_json::json!({
        "version": "0",
        "id": "53dc4d37-cffa-4f76-80c9-8b7d4a4d2eaa",
        "detail-type": "Scheduled Event",
        "source": "aws.events",
        "region": "us-east-1",
        "resources": ["arn:aws:events:us-east-1:123456789012:rule/my-schedule"],
        "detail": {}
    }))
    .unwrap();
    assert!(request.source_object.is_none());
    assert!(request.destination_object.is_none());
}

#[test]
fn non_object_payloads_carry_no_overrides() {
    for payload in ["null", "\"ping\"", "42", "[]", "true"] {
        let request: CopyRequest = serde_json::from_str(payload).unwrap();
        assert!(request.source_object.is_none(), "{payload}");
        assert!(request.destination_object.is_none(), "{payload}");
    }
}

#[test]
fn request_overrides_are_validated() {
    let ok: CopyRequest = serde_json::from_value(serde_json::json!({
        "sourceObject": { "bucket": "other-source", "key": "a/b.png" }
    }))
    .unwrap();
    assert_eq!(ok.source_object, Some(object_ref("other-source", "a/b.png")));

    let err = serde_json::from_value::<CopyRequest>(serde_json::json!({
        "destinationObject": { "bucket": "Bad_Bucket", "key": "a/b.png" }
    }))
    .unwrap_err();
    assert!(err.to_string().contains("Bad_Bucket"), "{err}");
}

#[test]
fn plan_prefers_request_over_config() {
    let config = Config::from_lookup(|_| Err(std::env::VarError::NotPresent)).unwrap();
    let request = CopyRequest {
        source_object: None,
        destination_object: Some(object_ref("elsewhere", "copy.png")),
    };

    let plan = CopyPlan::resolve(&config, request);

    assert_eq!(plan.source, config.source);
    assert_eq!(plan.destination, object_ref("elsewhere", "copy.png"));
}

#[test]
fn outcome_serializes_in_camel_case() {
    let outcome = CopyOutcome {
        source: object_ref("source-bucket", "src/design.png"),
        destination: object_ref("destination-bucket", "dest/dest.png"),
        created_buckets: vec![BucketName::parse("destination-bucket").unwrap()],
    };

    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        serde_json::json!({
            "source": { "bucket": "source-bucket", "key": "src/design.png" },
            "destination": { "bucket": "destination-bucket", "key": "dest/dest.png" },
            "createdBuckets": ["destination-bucket"],
        })
    );
}

#[test]
fn object_ref_displays_as_s3_uri() {
    assert_eq!(
        object_ref("source-bucket", "src/design.png").to_string(),
        "s3://source-bucket/src/design.png"
    );
}
