//! Model and state machine behind the user grid.
//!
//! Everything in here is UI-agnostic: records and columns, the comparator,
//! the derived-view pipeline, the interactive table state and the one-shot
//! users fetch. Rendering lives in `usergrid-ui`.

mod column;
pub mod comparator;
mod config;
mod error;
mod fetch;
mod limit;
mod record;
mod sort;
mod table_state;
pub mod view;

pub use column::{ColumnDef, ColumnId, ID_COLUMN, RenderFn};
pub use config::BusinessConfig;
pub use error::{ConfigError, FetchError, LimitError, RecordError};
pub use fetch::{EhttpFetcher, FetchService, FetchUsersResult, OnDone, fetch_users, parse_users};
pub use limit::Limit;
pub use record::{FieldValue, Record, RecordId};
pub use sort::SortSpec;
pub use table_state::{CellCoord, TableAction, TableState};
