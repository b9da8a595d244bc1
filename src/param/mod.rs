mod document;
mod error;
mod node;
mod parse;
mod path;
mod report;
mod traverse;
mod value;

/// Parameter document loading and indexing.
pub use document::{ParamDocument, ParameterEntry};
/// Error and result aliases.
pub use error::{ParamError, Result};
/// Normalized document node types.
pub use node::{ElementNode, Node};
/// Value-tree parser entry points and options.
pub use parse::{ParseOptions, parse_parameter, parse_parameter_with};
/// Index path types.
pub use path::{IndexPath, PathStep};
/// Display line construction.
pub use report::{ReportLine, ShowOptions, report_parameter};
/// Lazy leaf traversal.
pub use traverse::Leaves;
/// Typed parameter value types.
pub use value::{BooleanParam, ContainerRef, EnumParam, MatrixParam, Parameter, PrimitiveKind, PrimitiveParam, ScalarParam, StructParam};
