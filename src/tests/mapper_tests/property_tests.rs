// src/tests/mapper_tests/property_tests.rs
use crate::mapper;
use crate::tests::utils::{sample_property, without};
use crate::{DepositAmount, MappingError, NumericRange};
use serde_json::json;

#[test]
fn maps_a_complete_listing() -> Result<(), Box<dyn std::error::Error>> {
    let property = mapper::property(&sample_property())?;

    assert_eq!(property.id, "PROP-1001");
    assert_eq!(property.name, "Riverside Flats");
    assert_eq!(property.website.as_deref(), Some("https://riverside.example.com"));

    let amenities = property.amenities.as_ref().expect("amenities present");
    assert_eq!(amenities.len(), 1);
    assert_eq!(amenities[0].description.as_deref(), Some("Rooftop deck"));

    assert_eq!(property.units.len(), 1);
    let unit = &property.units[0];
    assert_eq!(unit.name.as_deref(), Some("1A"));
    assert_eq!(unit.rent, Some(1295.0));
    assert_eq!(unit.sqft, NumericRange::new(640, 710));

    assert_eq!(property.deposit.amount, DepositAmount::Exact(500.0));
    assert_eq!(property.deposit.percent_refundable, Some(100.0));

    let fees = &property.fees;
    assert_eq!(fees.admin_fee, Some(150.0));
    assert_eq!(fees.application_fee, Some(45.5));
    assert_eq!(fees.broker_fee, Some(0.0));
    assert_eq!(fees.late_fee_per_day, Some(10.0));
    assert_eq!(fees.late_min_fee, Some(50.0));
    assert_eq!(fees.late_percent, Some(5.0));
    assert_eq!(fees.late_type.as_deref(), Some("Percent"));
    assert_eq!(fees.non_refundable_hold_fee, Some(200.0));
    assert_eq!(fees.prorate_type.as_deref(), Some("Daily"));

    Ok(())
}

#[test]
fn pet_policy_is_mapped_only_on_request() -> Result<(), Box<dyn std::error::Error>> {
    let property = mapper::property(&sample_property())?;

    let raw = property.pet_policy.clone().expect("raw pet node kept");
    assert_eq!(raw["Allowed"], json!("true"));

    let policy = property.typed_pet_policy()?.expect("policy present");
    assert_eq!(policy, mapper::pet_policy(&raw)?);
    assert!(policy.allowed);
    assert_eq!(policy.deposit, Some(250.0));
    assert_eq!(policy.pets.len(), 1);
    assert_eq!(policy.pets[0].count, 2);

    Ok(())
}

#[test]
fn absent_amenity_tag_is_not_an_empty_list() -> Result<(), Box<dyn std::error::Error>> {
    let property = mapper::property(&without(sample_property(), &["ILS_Unit"], "Amenity"))?;
    assert_eq!(property.amenities, None);

    let mut node = sample_property();
    node["ILS_Unit"]["Amenity"] = json!([]);
    let property = mapper::property(&node)?;
    assert_eq!(property.amenities, Some(vec![]));

    Ok(())
}

#[test]
fn amenity_normalization_is_transparent() -> Result<(), Box<dyn std::error::Error>> {
    let node = json!({ "Description": "Gym", "AmenityType": "Fitness" });

    assert_eq!(
        mapper::amenities(Some(&node))?,
        mapper::amenities(Some(&json!([node])))?
    );
    assert_eq!(mapper::amenities(None)?, None);
    assert_eq!(mapper::amenities(Some(&json!(null)))?, None);
    assert_eq!(mapper::amenities(Some(&json!([])))?, Some(vec![]));

    Ok(())
}

#[test]
fn several_units_keep_feed_order() -> Result<(), Box<dyn std::error::Error>> {
    let mut node = sample_property();
    node["ILS_Unit"]["Units"]["Unit"] = json!([
        { "MarketingName": "Studio", "MinSquareFeet": "400", "MaxSquareFeet": "450" },
        { "MarketingName": "Loft", "MinSquareFeet": "1200", "MaxSquareFeet": "900" }
    ]);

    let property = mapper::property(&node)?;
    let names: Vec<_> = property.units.iter().map(|u| u.name.as_deref()).collect();
    assert_eq!(names, vec![Some("Studio"), Some("Loft")]);

    // inverted as listed
    assert_eq!(property.units[1].sqft, NumericRange::new(1200, 900));
    assert_eq!(property.units[1].bedrooms, None);

    Ok(())
}

#[test]
fn required_containers_are_structural() {
    let cases: &[(&[&str], &str, &str, &str)] = &[
        (&[], "IDValue", "Property", "IDValue"),
        (&[], "PropertyID", "Property", "PropertyID"),
        (&[], "ILS_Unit", "Property", "ILS_Unit"),
        (&[], "Deposit", "Property", "Deposit"),
        (&[], "Fee", "Property", "Fee"),
        (&[], "Policy", "Property", "Policy"),
        (&["PropertyID"], "MarketingName", "Property", "PropertyID.MarketingName"),
        (&["ILS_Unit"], "Units", "Property", "ILS_Unit.Units"),
        (&["ILS_Unit", "Units"], "Unit", "Property", "ILS_Unit.Units.Unit"),
        (&["Deposit"], "Amount", "Deposit", "Amount"),
        (&["Deposit", "Amount"], "ValueRange", "Deposit", "Amount.ValueRange"),
    ];

    for (path, key, expected_entity, expected_field) in cases {
        let node = without(sample_property(), path, key);

        match mapper::property(&node) {
            Err(MappingError::StructuralAbsence { entity, field }) => {
                assert_eq!(entity, *expected_entity);
                assert_eq!(field, *expected_field);
            }
            other => panic!("removing {key} should be structural, got {other:?}"),
        }
    }
}

#[test]
fn null_containers_are_structural() {
    for key in ["PropertyID", "ILS_Unit", "Deposit", "Fee", "Policy"] {
        let mut node = sample_property();
        node[key] = json!(null);

        match mapper::property(&node) {
            Err(MappingError::StructuralAbsence { entity, field }) => {
                assert_eq!(entity, "Property");
                assert_eq!(field, key);
            }
            other => panic!("null {key} should be structural, got {other:?}"),
        }
    }

    let mut node = sample_property();
    node["ILS_Unit"]["Units"]["Unit"] = json!(null);
    assert!(matches!(
        mapper::property(&node),
        Err(MappingError::StructuralAbsence { field: "ILS_Unit.Units.Unit", .. })
    ));
}

#[test]
fn out_of_range_numbers_are_coercion_failures() {
    let mut node = sample_property();
    node["ILS_Unit"]["Units"]["Unit"]["MinSquareFeet"] = json!("1e30");
    assert!(matches!(
        mapper::property(&node),
        Err(MappingError::Coercion { field: "MinSquareFeet", .. })
    ));

    let mut node = sample_property();
    node["Fee"]["LateFeePerDay"] = json!("inf");
    assert!(matches!(
        mapper::property(&node),
        Err(MappingError::Coercion { field: "LateFeePerDay", .. })
    ));
}

#[test]
fn bad_leaf_inside_a_unit_list_keeps_its_message() {
    let mut node = sample_property();
    node["ILS_Unit"]["Units"]["Unit"] = json!([{ "MarketingName": "A" }, { "UnitRent": 1200 }]);

    match mapper::property(&node) {
        Err(err @ MappingError::Malformed { .. }) => {
            assert!(err.to_string().contains("expected a string"), "{err}");
        }
        other => panic!("expected malformed unit, got {other:?}"),
    }
}

#[test]
fn optional_leaves_may_all_be_missing() -> Result<(), Box<dyn std::error::Error>> {
    let property = mapper::property(&json!({
        "IDValue": "P",
        "PropertyID": { "MarketingName": "Bare" },
        "ILS_Unit": { "Units": { "Unit": {} } },
        "Deposit": { "Amount": { "ValueRange": { "Min": "100", "Max": "300" } } },
        "Fee": {},
        "Policy": {}
    }))?;

    assert_eq!(
        property.deposit.amount,
        DepositAmount::Range(NumericRange::new(100.0, 300.0))
    );
    assert_eq!(property.units[0].sqft, NumericRange::new(0, 0));
    assert_eq!(property.fees.admin_fee, None);
    assert_eq!(property.pet_policy, None);

    Ok(())
}

#[test]
fn unparsable_fee_fails_the_whole_property() {
    let mut node = sample_property();
    node["Fee"]["AdminFee"] = json!("N/A");

    assert!(matches!(
        mapper::property(&node),
        Err(MappingError::Coercion { field: "AdminFee", .. })
    ));
}

#[test]
fn unknown_tags_are_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let mut node = sample_property();
    node["Floorplan"] = json!({ "Name": "A" });
    node["Fee"]["ParkingFee"] = json!("75");

    let property = mapper::property(&node)?;
    assert_eq!(property.id, "PROP-1001");

    Ok(())
}

#[test]
fn batch_accepts_one_or_many_properties() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(mapper::properties(sample_property())?.len(), 1);

    let mut second = sample_property();
    second["IDValue"] = json!("PROP-1002");
    let batch = mapper::properties(json!([sample_property(), second]))?;
    let ids: Vec<_> = batch.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["PROP-1001", "PROP-1002"]);

    assert!(mapper::properties(json!([sample_property(), {}])).is_err());

    Ok(())
}

#[test]
fn entities_serialize_for_downstream_use() -> Result<(), Box<dyn std::error::Error>> {
    let property = mapper::property(&sample_property())?;
    let out = serde_json::to_value(&property)?;

    assert_eq!(out["deposit"]["amount"], json!(500.0));
    assert_eq!(out["units"][0]["sqft"], json!({ "min": 640, "max": 710 }));

    Ok(())
}
