//! Schema-driven form engine: declarative field configs rendered against
//! a JSON-backed [`FormState`], with path-addressed values and errors.

mod autocomplete;
mod fields;
mod schema;
mod state;

pub use autocomplete::AutocompleteInput;
pub use fields::{render_field, FormFields};
pub use schema::{group_rows, FieldConfig, FieldKind, GridCols, Rules};
pub use state::{parse_path, set_at, value_at, FormState, PathSegment};
