use super::{parse_options, parse_param_codes};

#[test]
fn param_codes_skip_blank_lines_and_trim() {
	let codes = parse_param_codes("  P1 \n\n\tP2\r\n   \nP3");
	assert_eq!(codes, ["P1", "P2", "P3"]);
	assert!(parse_param_codes("").is_empty());
}

#[test]
fn depth_override_applies() {
	assert_eq!(parse_options(Some(3)).max_depth, 3);
	assert_eq!(parse_options(None).max_depth, 256);
}
