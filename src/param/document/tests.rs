use crate::param::{ParamDocument, ParamError, ParseOptions, Parameter};

const DOC: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ParameterSet>
  <Parameter parameterCode="P1">
    <ParameterValue>
      <Struct>
        <Element><Scalar>2</Scalar><Name><Identifier>x</Identifier></Name></Element>
        <Element>
          <Array>
            <Element><Scalar>0</Scalar></Element>
            <Element><Scalar>3</Scalar></Element>
          </Array>
          <Name><Identifier>y</Identifier></Name>
        </Element>
      </Struct>
    </ParameterValue>
  </Parameter>
  <Parameter parameterCode="P2">
    <ParameterValue><Boolean>false</Boolean></ParameterValue>
  </Parameter>
</ParameterSet>
"#;

#[test]
fn indexes_parameters_in_document_order() {
	let doc = ParamDocument::from_xml_str(DOC).expect("document indexes");
	assert_eq!(doc.len(), 2);
	assert_eq!(doc.codes().collect::<Vec<_>>(), ["P1", "P2"]);
	assert_eq!(doc.get("P1").map(|entry| entry.value.label()), Some("Struct"));
	assert!(doc.get("P3").is_none());
}

#[test]
fn parse_all_builds_typed_values() {
	let doc = ParamDocument::from_xml_str(DOC).expect("document indexes");
	let parsed = doc.parse_all(&ParseOptions::default()).expect("all parameters parse");

	assert_eq!(parsed.len(), 2);
	assert_eq!(parsed[1], (Box::<str>::from("P2"), Parameter::boolean("false")));
	let Parameter::Struct(fields) = &parsed[0].1 else {
		panic!("expected struct");
	};
	assert_eq!(fields.get("x"), Some(&Parameter::scalar("2")));
}

#[test]
fn parse_errors_name_the_parameter() {
	let xml = r#"<Set><Parameter parameterCode="BAD"><V><Float>1</Float></V></Parameter></Set>"#;
	let doc = ParamDocument::from_xml_str(xml).expect("document indexes");
	let err = doc.parse_all(&ParseOptions::default()).expect_err("unknown tag");

	let ParamError::InParameter { code, source } = &err else {
		panic!("expected parameter context, got {err}");
	};
	assert_eq!(code, "BAD");
	assert!(matches!(**source, ParamError::UnknownTag { .. }));
	assert_eq!(err.to_string(), "Error parsing parameter BAD: Cannot parse a node with name: Float");
}

#[test]
fn duplicate_codes_keep_last_value_in_first_position() {
	let xml = r#"<Set>
		<Parameter parameterCode="A"><V><Scalar>1</Scalar></V></Parameter>
		<Parameter parameterCode="B"><V><Scalar>2</Scalar></V></Parameter>
		<Parameter parameterCode="A"><V><Scalar>3</Scalar></V></Parameter>
	</Set>"#;
	let doc = ParamDocument::from_xml_str(xml).expect("document indexes");

	assert_eq!(doc.codes().collect::<Vec<_>>(), ["A", "B"]);
	let value = doc.require("A").and_then(|entry| entry.parse(&ParseOptions::default())).expect("A parses");
	assert_eq!(value, Parameter::scalar("3"));
}

#[test]
fn missing_code_and_value_are_reported() {
	let err = ParamDocument::from_xml_str("<Set><Parameter><V><Scalar>1</Scalar></V></Parameter></Set>").err();
	assert!(matches!(err, Some(ParamError::MissingParameterCode)));

	let err = ParamDocument::from_xml_str(r#"<Set><Parameter parameterCode="E"><V/></Parameter></Set>"#).err();
	assert!(matches!(err, Some(ParamError::MissingValueNode { ref code }) if code == "E"));

	let doc = ParamDocument::from_xml_str("<Set/>").expect("empty set indexes");
	assert!(doc.is_empty());
	assert!(matches!(doc.require("X"), Err(ParamError::ParameterNotFound { .. })));
}

#[test]
fn malformed_xml_is_reported() {
	let err = ParamDocument::from_xml_str("<Set><Parameter>").err();
	assert!(matches!(err, Some(ParamError::Xml(_))));
}

#[test]
fn raw_bytes_skip_byte_order_mark() {
	let mut raw = vec![0xEF, 0xBB, 0xBF];
	raw.extend_from_slice(DOC.as_bytes());
	let doc = ParamDocument::from_bytes(raw).expect("bom document indexes");
	assert_eq!(doc.codes().collect::<Vec<_>>(), ["P1", "P2"]);
}

#[test]
fn non_utf8_bytes_are_rejected() {
	let err = ParamDocument::from_bytes(vec![b'<', 0xFF, 0xFE, b'>']).err();
	assert!(matches!(err, Some(ParamError::Utf8(_))));
}
