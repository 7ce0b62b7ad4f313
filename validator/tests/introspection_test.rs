//! Constraint introspection and engine resource limits

use iso20022_core::{
    Constraint, FieldDescriptor, FieldView, Iso20022Error, Record, RecordDescriptor, TypeTag,
};
use iso20022_messages::pacs008::{ACTIVE_CURRENCY_AND_AMOUNT, GROUP_HEADER, PAYMENT_IDENTIFICATION};
use iso20022_validator::{field_constraints, ValidationEngine};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn constraint_map_exposes_declared_rules_without_validating() {
    let map = field_constraints(&PAYMENT_IDENTIFICATION);
    assert_eq!(
        map.keys().copied().collect::<Vec<_>>(),
        vec!["instr_id", "end_to_end_id", "tx_id", "uetr"]
    );

    let e2e = &map["end_to_end_id"];
    assert_eq!(e2e.field_type, "text");
    assert!(!e2e.multivalued);
    assert_eq!(e2e.xml_name, Some("EndToEndId"));
    assert_eq!(e2e.constraints["required"], json!(true));
    assert_eq!(e2e.constraints["min_length"], json!(1));
    assert_eq!(e2e.constraints["max_length"], json!(35));

    let uetr = &map["uetr"];
    assert!(uetr.constraints["pattern"]
        .as_str()
        .expect("pattern is textual")
        .starts_with("[a-f0-9]{8}"));
}

#[test]
fn constraint_map_carries_decimal_facets_and_code_sets() {
    let amount = field_constraints(&ACTIVE_CURRENCY_AND_AMOUNT);
    assert_eq!(amount["value"].field_type, "decimal");
    assert_eq!(amount["value"].constraints["min_inclusive"], json!("0"));
    assert_eq!(amount["value"].constraints["total_digits"], json!(18));
    assert_eq!(amount["value"].constraints["fraction_digits"], json!(5));

    let header = field_constraints(&GROUP_HEADER);
    let sttlm_inf = &header["sttlm_inf"];
    assert_eq!(sttlm_inf.field_type, "SettlementInstruction");
    assert_eq!(header["cre_dt_tm"].field_type, "datetime");
}

#[test]
fn constraint_map_serializes_for_tooling() {
    let map = field_constraints(&ACTIVE_CURRENCY_AND_AMOUNT);
    let rendered = serde_json::to_string_pretty(&map).expect("serializes");
    assert!(rendered.contains("\"min_inclusive\": \"0\""));
    assert!(rendered.contains("\"Ccy\""));
}

/// A deliberately self-recursive record type, only for the depth guard.
struct Chain {
    child: Option<Box<Chain>>,
}

static CHAIN: RecordDescriptor = RecordDescriptor {
    name: "Chain",
    fields: &[FieldDescriptor {
        name: "child",
        xml_name: None,
        type_tag: TypeTag::Record("Chain"),
        multivalued: false,
        constraints: &[Constraint::Required(false)],
        default: None,
    }],
};

impl Record for Chain {
    fn descriptor(&self) -> &'static RecordDescriptor {
        &CHAIN
    }

    fn field(&self, index: usize) -> FieldView<'_> {
        match index {
            0 => match &self.child {
                Some(child) => FieldView::Record(child.as_ref()),
                None => FieldView::Absent,
            },
            _ => unreachable!("field index out of range for Chain"),
        }
    }
}

fn chain_of(depth: usize) -> Chain {
    let mut node = Chain { child: None };
    for _ in 1..depth {
        node = Chain {
            child: Some(Box::new(node)),
        };
    }
    node
}

#[test]
fn depth_guard_rejects_pathologically_deep_graphs() {
    let engine = ValidationEngine::with_max_depth(8);

    let shallow = chain_of(8);
    let report = engine
        .validate_message(&shallow, false)
        .expect("within the bound");
    assert!(report.is_valid());

    let deep = chain_of(9);
    match engine.validate_message(&deep, false) {
        Err(Iso20022Error::DepthExceeded { limit }) => assert_eq!(limit, 8),
        other => panic!("expected DepthExceeded, got {other:?}"),
    }
}
