use paramdoc::param::{MatrixParam, Parameter};

use super::{format_table, table_rows};

fn cells(rows: &[&[&str]]) -> Vec<Vec<String>> {
	rows.iter().map(|row| row.iter().map(|cell| (*cell).to_owned()).collect()).collect()
}

fn array(items: Vec<Parameter>) -> Parameter {
	Parameter::Matrix(MatrixParam::new(items).expect("array is rectangular"))
}

#[test]
fn columns_pad_to_widest_cell_plus_two() {
	let rendered = format_table(&cells(&[&["1", "0", "12.5"], &["0", "100", "-3"]]));
	assert_eq!(rendered, "1  0    12.5  \n0  100  -3    ");
}

#[test]
fn cells_beyond_shortest_row_are_unpadded() {
	let rendered = format_table(&cells(&[&["a", "bb", "c"], &["ddd"]]));
	assert_eq!(rendered, "a    bbc\nddd  ");
}

#[test]
fn empty_input_renders_empty() {
	assert_eq!(format_table(&[]), "");
}

#[test]
fn rows_require_array_of_leaf_arrays() {
	let grid = array(vec![array(vec![Parameter::scalar("1")]), array(vec![Parameter::scalar("2")])]);
	assert_eq!(table_rows(&grid), Some(vec![vec!["1".to_owned()], vec!["2".to_owned()]]));

	assert_eq!(table_rows(&array(vec![Parameter::scalar("1")])), None);
	assert_eq!(table_rows(&Parameter::scalar("1")), None);

	let cube = array(vec![array(vec![array(vec![Parameter::scalar("1")])])]);
	assert_eq!(table_rows(&cube), None);
}
