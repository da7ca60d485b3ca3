use clx_core::error::CoreError;
use clx_core::models::entity::{ComponentField, EntityType, UwaComponents};
use clx_core::models::scorecard::{Pillar, PillarScores};
use serde_json::json;

#[test]
fn entity_type_parses_aliases() {
    assert_eq!("virtual_machine".parse::<EntityType>().unwrap(), EntityType::VirtualMachine);
    assert_eq!("VM".parse::<EntityType>().unwrap(), EntityType::VirtualMachine);
    assert_eq!("business-owner".parse::<EntityType>().unwrap(), EntityType::BusinessOwner);
    assert!(matches!(
        "toaster".parse::<EntityType>(),
        Err(CoreError::InvalidEntityType(s)) if s == "toaster"
    ));
}

#[test]
fn entity_type_round_trips_through_display() {
    for ty in EntityType::ALL {
        assert_eq!(ty.to_string().parse::<EntityType>().unwrap(), ty);
    }
}

#[test]
fn component_fields_parse_snake_and_camel_case() {
    for field in ComponentField::ALL {
        assert_eq!(field.as_str().parse::<ComponentField>().unwrap(), field);
    }
    assert_eq!("instanceUuid".parse::<ComponentField>().unwrap(), ComponentField::InstanceUuid);
    assert!("favouriteColour".parse::<ComponentField>().is_err());
}

#[test]
fn blank_components_read_as_absent() {
    let c = UwaComponents::default()
        .with(ComponentField::OsName, "  Ubuntu  ")
        .with(ComponentField::Address, "   ");
    assert_eq!(c.get(ComponentField::OsName), Some("Ubuntu"));
    assert_eq!(c.get(ComponentField::Address), None);
    assert_eq!(c.get(ComponentField::TaxId), None);
}

#[test]
fn components_use_camel_case_json_and_skip_absent_fields() {
    let c = UwaComponents::default().with(ComponentField::InstanceUuid, "abc");
    assert_eq!(serde_json::to_value(&c).unwrap(), json!({ "instanceUuid": "abc" }));

    let parsed: UwaComponents = serde_json::from_value(json!({ "osName": "Ubuntu22" })).unwrap();
    assert_eq!(parsed.get(ComponentField::OsName), Some("Ubuntu22"));
}

#[test]
fn pillar_scores_index_by_pillar() {
    let mut scores = PillarScores::from([1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(scores.get(Pillar::CostBenefit), 3.0);
    scores.set(Pillar::Architecture, 50.0);
    assert_eq!(scores.architecture, 50.0);
    assert_eq!("cost-benefit".parse::<Pillar>().unwrap(), Pillar::CostBenefit);
    assert!("security".parse::<Pillar>().is_err());
}
