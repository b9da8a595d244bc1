use crate::param::{IndexPath, ParamError, PathStep};

#[test]
fn parse_mixed_segments() {
	let path = IndexPath::parse("gains, 2,k").expect("path parses");
	assert_eq!(path.steps(), &[PathStep::Key("gains".into()), PathStep::Index(2), PathStep::Key("k".into())]);
}

#[test]
fn parse_rejects_empty_segments() {
	for input in ["", " ", "a,,b", "a,", ",1"] {
		let err = IndexPath::parse(input).expect_err("path should fail");
		assert!(matches!(err, ParamError::InvalidPath { .. }), "unexpected error for {input:?}: {err}");
	}
}

#[test]
fn display_joins_with_commas() {
	let path: IndexPath = [PathStep::from("a"), PathStep::from(0_usize), PathStep::from(3_usize)].into_iter().collect();
	assert_eq!(path.to_string(), "a,0,3");
	assert_eq!(IndexPath::default().to_string(), "");
}

#[test]
fn serializes_as_heterogeneous_array() {
	let path = IndexPath::parse("y,1").expect("path parses");
	let json = serde_json::to_value(&path).expect("path serializes");
	assert_eq!(json, serde_json::json!(["y", 1]));
}
