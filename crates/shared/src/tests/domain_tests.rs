use super::*;

fn decode(raw: &str) -> Result<ActivityCollection, serde_json::Error> {
    serde_json::from_str(raw)
}

#[test]
fn keeps_server_key_order() {
    let collection = decode(
        r#"{
            "Programming Class": {"description": "d", "schedule": "s", "max_participants": 20, "participants": []},
            "Art Club": {"description": "d", "schedule": "s", "max_participants": 15, "participants": []},
            "Chess Club": {"description": "d", "schedule": "s", "max_participants": 12, "participants": []}
        }"#,
    )
    .expect("decode");

    let names: Vec<&str> = collection.names().collect();
    assert_eq!(names, ["Programming Class", "Art Club", "Chess Club"]);
}

#[test]
fn repeated_key_keeps_first_position_and_last_value() {
    let collection = decode(
        r#"{
            "Chess Club": {"description": "old", "schedule": "s", "max_participants": 1, "participants": []},
            "Art Club": {"description": "d", "schedule": "s", "max_participants": 1, "participants": []},
            "Chess Club": {"description": "new", "schedule": "s", "max_participants": 1, "participants": []}
        }"#,
    )
    .expect("decode");

    assert_eq!(collection.len(), 2);
    let first = collection.iter().next().expect("first");
    assert_eq!(first.name, "Chess Club");
    assert_eq!(first.description, "new");
}

#[test]
fn rejects_shape_deviations() {
    assert!(decode("[]").is_err());
    assert!(decode(r#"{"Chess Club": {"description": "d"}}"#).is_err());
    assert!(decode(
        r#"{"Chess Club": {"description": "d", "schedule": "s", "max_participants": -1, "participants": []}}"#
    )
    .is_err());
    assert!(decode(
        r#"{"Chess Club": {"description": "d", "schedule": "s", "max_participants": 3, "participants": [1, 2]}}"#
    )
    .is_err());
}

#[test]
fn spots_left_saturates_at_zero() {
    let open = Activity::new("Chess Club", "d", "s", 12).with_participants(["a@x", "b@x"]);
    assert_eq!(open.spots_left(), 10);

    let overfull = Activity::new("Chess Club", "d", "s", 1).with_participants(["a@x", "b@x"]);
    assert_eq!(overfull.spots_left(), 0);
}

#[test]
fn serializes_back_to_name_keyed_object() {
    let collection: ActivityCollection = [
        Activity::new("Gym Class", "Fitness", "Mondays", 30).with_participants(["john@x"]),
        Activity::new("Art Club", "Painting", "Thursdays", 15),
    ]
    .into_iter()
    .collect();

    let value = serde_json::to_value(&collection).expect("encode");
    assert_eq!(value["Gym Class"]["participants"][0], "john@x");
    assert_eq!(value["Art Club"]["max_participants"], 15);

    let decoded: ActivityCollection = serde_json::from_value(value).expect("decode");
    assert_eq!(decoded.get("Gym Class"), collection.get("Gym Class"));
}
