// Wire model deserialization and the slot → field-name table.

use jamaat::api::models::{PrayerRecord, ScheduleBlock, Slot};

// ── Helpers ──────────────────────────────────────────────────────────────────

const SAMPLE: &str = r#"[
    {
        "name": "Baitul Aman",
        "address": "2 Shortt St, Scarborough, ON",
        "latitude": 43.7102,
        "longitude": -79.2903,
        "website": "https://example.org/baitul-aman",
        "prayer_times": {
            "mosque_name": "Baitul Aman",
            "date": "2025-06-01",
            "fajr_start": "05:00:00",
            "fajr_iqamah": "05:30:00",
            "zuhr_start": "13:00:00",
            "zuhr_iqamah": "13:30:00",
            "asr_start": "17:00:00",
            "asr_iqamah": "17:30:00",
            "maghrib_start": "20:15:00",
            "maghrib_iqamah": "20:20:00",
            "isha_start": "21:30:00",
            "isha_iqamah": "22:00:00",
            "jummah1_start": "13:15:00",
            "jummah1_iqamah": "13:30:00",
            "jummah2_start": null,
            "jummah2_iqamah": null,
            "jummah3_start": null,
            "jummah3_iqamah": null,
            "updated_at": "2025-06-01T08:12:45.123456"
        }
    }
]"#;

// ── Slots ────────────────────────────────────────────────────────────────────

#[test]
fn test_slots_are_in_display_order() {
    let names: Vec<&str> = Slot::all().map(Slot::as_str).collect();
    assert_eq!(
        names,
        ["fajr", "zuhr", "asr", "maghrib", "isha", "jummah1", "jummah2", "jummah3"]
    );
}

#[test]
fn test_slot_labels_are_capitalized() {
    let labels: Vec<&str> = Slot::all().map(Slot::label).collect();
    assert_eq!(
        labels,
        ["Fajr", "Zuhr", "Asr", "Maghrib", "Isha", "Jummah1", "Jummah2", "Jummah3"]
    );
}

#[test]
fn test_slot_fields_follow_naming_convention() {
    for slot in Slot::all() {
        let fields = slot.fields();
        assert_eq!(fields.start, format!("{}_start", slot.as_str()));
        assert_eq!(fields.iqamah, format!("{}_iqamah", slot.as_str()));
    }
}

#[test]
fn test_slot_fields_match_serialized_block() {
    let value = serde_json::to_value(ScheduleBlock::default()).unwrap();
    let object = value.as_object().unwrap();
    for slot in Slot::all() {
        let fields = slot.fields();
        assert!(object.contains_key(fields.start), "missing {}", fields.start);
        assert!(object.contains_key(fields.iqamah), "missing {}", fields.iqamah);
    }
    // Eight slots × two times, plus mosque_name, date and updated_at.
    assert_eq!(object.len(), 19);
}

#[test]
fn test_accessors_read_the_field_named_by_the_table() {
    let records: Vec<PrayerRecord> = serde_json::from_str(SAMPLE).unwrap();
    let block = &records[0].prayer_times;
    let raw = serde_json::to_value(block).unwrap();

    for slot in Slot::all() {
        let fields = slot.fields();
        assert_eq!(block.start(slot), raw[fields.start].as_str());
        assert_eq!(block.iqamah(slot), raw[fields.iqamah].as_str());
    }
}

// ── Deserialization ──────────────────────────────────────────────────────────

#[test]
fn test_prayer_record_deserializes() {
    let records: Vec<PrayerRecord> =
        serde_json::from_str(SAMPLE).expect("should deserialize prayer records");
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.name, "Baitul Aman");
    assert_eq!(record.address, "2 Shortt St, Scarborough, ON");
    assert!((record.latitude - 43.7102).abs() < 1e-9);
    assert_eq!(record.website, "https://example.org/baitul-aman");

    let block = &record.prayer_times;
    assert_eq!(block.iqamah(Slot::Fajr), Some("05:30:00"));
    assert_eq!(block.start(Slot::Maghrib), Some("20:15:00"));
    assert_eq!(block.iqamah(Slot::Jummah1), Some("13:30:00"));
    assert_eq!(block.start(Slot::Jummah2), None);
    assert_eq!(block.iqamah(Slot::Jummah3), None);
    assert_eq!(block.updated_at.as_deref(), Some("2025-06-01T08:12:45.123456"));
}

#[test]
fn test_missing_optional_fields_are_absent() {
    let json = r#"{
        "name": "Masjid Minimal",
        "prayer_times": { "fajr_iqamah": "05:45:00" }
    }"#;
    let record: PrayerRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.address, "");
    assert_eq!(record.prayer_times.iqamah(Slot::Fajr), Some("05:45:00"));
    assert_eq!(record.prayer_times.start(Slot::Fajr), None);
    assert_eq!(record.prayer_times.updated_at, None);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let json = r#"{
        "name": "Masjid Extra",
        "phone": "555-0100",
        "prayer_times": { "tahajjud_start": "03:00:00" }
    }"#;
    let record: PrayerRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.name, "Masjid Extra");
    assert!(Slot::all().all(|s| record.prayer_times.start(s).is_none()));
}

#[test]
fn test_empty_list_deserializes() {
    let records: Vec<PrayerRecord> = serde_json::from_str("[]").unwrap();
    assert!(records.is_empty());
}
