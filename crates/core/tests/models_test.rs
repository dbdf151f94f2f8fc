use chrono::{TimeZone, Utc};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, json, to_string};
use serde_test::{assert_tokens, Token};
use uuid::Uuid;

use slotbook_core::models::record::{CreateRecordRequest, Record, RecordStatus};
use slotbook_core::models::service::{CreateServiceRequest, Service};
use slotbook_core::models::slot::Slot;
use slotbook_core::models::user::{PublicProfile, User};

#[test]
fn test_slot_serialization() {
    let start_time = Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).unwrap();
    let slot = Slot {
        id: 7,
        master_id: Uuid::new_v4(),
        service_id: Some(10),
        start_time: Some(start_time),
        end_time: Some(start_time + chrono::Duration::hours(1)),
        is_booked: false,
        service_name: Some("Стрижка".to_string()),
        master_name: Some(FirstName().fake()),
        master_surname: Some(LastName().fake()),
        master_telegram_id: Some(123456789),
        master_phone: None,
        master_timezone: Some("Europe/Moscow".to_string()),
    };

    let json = to_string(&slot).expect("Failed to serialize slot");
    let deserialized: Slot = from_str(&json).expect("Failed to deserialize slot");

    assert_eq!(deserialized.id, slot.id);
    assert_eq!(deserialized.master_id, slot.master_id);
    assert_eq!(deserialized.service_id, slot.service_id);
    assert_eq!(deserialized.start_time, slot.start_time);
    assert_eq!(deserialized.end_time, slot.end_time);
    assert_eq!(deserialized.is_booked, slot.is_booked);
    assert_eq!(deserialized.service_name, slot.service_name);
    assert_eq!(deserialized.master_name, slot.master_name);
}

#[test]
fn test_bare_slot_deserializes_without_optional_fields() {
    // A bare slot row carries none of the joined display fields and may
    // miss the timestamps entirely.
    let payload = json!({
        "id": 3,
        "master_id": "a1b2c3d4-e5f6-4890-abcd-ef1234567890"
    });

    let slot: Slot = serde_json::from_value(payload).expect("Failed to deserialize bare slot");

    assert_eq!(slot.id, 3);
    assert_eq!(slot.service_id, None);
    assert_eq!(slot.start_time, None);
    assert_eq!(slot.end_time, None);
    assert!(!slot.is_booked);
    assert_eq!(slot.service_name, None);
}

#[test]
fn test_record_serialization() {
    let record = Record {
        id: 11,
        slot_id: 7,
        client_id: Uuid::new_v4(),
        status: RecordStatus::Pending,
        created_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
    };

    let json = to_string(&record).expect("Failed to serialize record");
    let deserialized: Record = from_str(&json).expect("Failed to deserialize record");

    assert_eq!(deserialized.id, record.id);
    assert_eq!(deserialized.slot_id, record.slot_id);
    assert_eq!(deserialized.client_id, record.client_id);
    assert_eq!(deserialized.status, record.status);
    assert_eq!(deserialized.created_at, record.created_at);
}

#[rstest]
#[case(RecordStatus::Pending, "\"pending\"")]
#[case(RecordStatus::Confirm, "\"confirm\"")]
#[case(RecordStatus::Reject, "\"reject\"")]
fn test_record_status_wire_names(#[case] status: RecordStatus, #[case] wire: &'static str) {
    assert_eq!(to_string(&status).expect("Failed to serialize status"), wire);
    let parsed: RecordStatus = from_str(wire).expect("Failed to deserialize status");
    assert_eq!(parsed, status);
}

#[test]
fn test_unread_count_wire_shape() {
    assert_tokens(
        &slotbook_core::models::notification::UnreadCount { count: 5 },
        &[
            Token::Struct {
                name: "UnreadCount",
                len: 1,
            },
            Token::Str("count"),
            Token::U64(5),
            Token::StructEnd,
        ],
    );
}

#[test]
fn test_record_status_tolerates_foreign_values() {
    // A status this client does not know must not poison a list fetch.
    let status: RecordStatus = from_str("\"cancelled\"").expect("Failed to deserialize status");
    assert_eq!(status, RecordStatus::Unknown);
}

#[test]
fn test_create_record_request_serialization() {
    let request = CreateRecordRequest {
        slot_id: 7,
        client_id: Uuid::new_v4(),
    };

    let json = to_string(&request).expect("Failed to serialize create record request");
    let deserialized: CreateRecordRequest =
        from_str(&json).expect("Failed to deserialize create record request");

    assert_eq!(deserialized.slot_id, request.slot_id);
    assert_eq!(deserialized.client_id, request.client_id);
}

#[test]
fn test_service_serialization() {
    let service = Service {
        id: 10,
        master_id: Uuid::new_v4(),
        name: "Маникюр".to_string(),
        description: String::new(),
        price: 1500.0,
        duration: 60,
    };

    let json = to_string(&service).expect("Failed to serialize service");
    let deserialized: Service = from_str(&json).expect("Failed to deserialize service");

    assert_eq!(deserialized.id, service.id);
    assert_eq!(deserialized.name, service.name);
    assert_eq!(deserialized.price, service.price);
    assert_eq!(deserialized.duration, service.duration);
}

#[rstest]
#[case("Стрижка", 0.0, 15, true)]
#[case("Стрижка", 1_000_000.0, 360, true)]
#[case("Стрижка", -1.0, 60, false)]
#[case("Стрижка", 1_000_001.0, 60, false)]
#[case("Стрижка", 100.0, 14, false)]
#[case("Стрижка", 100.0, 361, false)]
#[case("", 100.0, 60, false)]
#[case("   ", 100.0, 60, false)]
fn test_service_request_validation(
    #[case] name: &str,
    #[case] price: f64,
    #[case] duration: i32,
    #[case] valid: bool,
) {
    let request = CreateServiceRequest {
        name: name.to_string(),
        description: String::new(),
        price,
        duration,
    };

    assert_eq!(request.validate().is_ok(), valid);
}

#[test]
fn test_user_serialization() {
    let user = User {
        id: Uuid::new_v4(),
        phone: "+79990001122".to_string(),
        telegram_id: 987654321,
        first_name: FirstName().fake(),
        surname: LastName().fake(),
        timezone: "Europe/Moscow".to_string(),
        active: true,
    };

    let json = to_string(&user).expect("Failed to serialize user");
    let deserialized: User = from_str(&json).expect("Failed to deserialize user");

    assert_eq!(deserialized.id, user.id);
    assert_eq!(deserialized.phone, user.phone);
    assert_eq!(deserialized.telegram_id, user.telegram_id);
    assert_eq!(deserialized.first_name, user.first_name);
    assert_eq!(deserialized.surname, user.surname);
}

#[test]
fn test_public_profile_from_slot_join_fields() {
    let master_id = Uuid::new_v4();
    let slot = Slot {
        id: 1,
        master_id,
        service_id: None,
        start_time: None,
        end_time: None,
        is_booked: false,
        service_name: None,
        master_name: Some("Анна".to_string()),
        master_surname: Some("Иванова".to_string()),
        master_telegram_id: Some(42),
        master_phone: None,
        master_timezone: None,
    };

    let profile = PublicProfile::from_slot(&slot);

    assert_eq!(profile.id, master_id);
    assert_eq!(profile.first_name.as_deref(), Some("Анна"));
    assert_eq!(profile.surname.as_deref(), Some("Иванова"));
    assert_eq!(profile.telegram_id, Some(42));
}
