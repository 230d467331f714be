use csv::StringRecord;
use idlocator_core::{Attributes, Record};

use super::error::LoadError;

const ID_COLUMNS: [&str; 2] = ["id", "id_number"];
const NAME_COLUMN: &str = "name";
const FIRST_NAME_COLUMN: &str = "first_name";
const LAST_NAME_COLUMN: &str = "last_name";

/// Where a row's name comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameColumns {
    Single(usize),
    Split { first: usize, last: usize },
}

/// Column layout of a roster, resolved once from its header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Schema {
    id: usize,
    name: NameColumns,
    attributes: Vec<(usize, String)>,
}

impl Schema {
    /// Resolve identity and pass-through columns from `headers`.
    ///
    /// Header names are matched case-insensitively. `id_number` is accepted in
    /// place of `id`, and a `first_name`/`last_name` pair in place of `name`.
    pub(crate) fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |wanted: &str| names.iter().position(|name| name == wanted);

        let id = ID_COLUMNS
            .iter()
            .find_map(|column| find(*column))
            .ok_or(LoadError::MissingColumn { column: "id" })?;

        let name = match (find(NAME_COLUMN), find(FIRST_NAME_COLUMN), find(LAST_NAME_COLUMN)) {
            (Some(index), _, _) => NameColumns::Single(index),
            (None, Some(first), Some(last)) => NameColumns::Split { first, last },
            _ => {
                return Err(LoadError::MissingColumn {
                    column: "name (or first_name and last_name)",
                });
            }
        };

        let consumed = |index: usize| {
            index == id
                || match name {
                    NameColumns::Single(column) => index == column,
                    NameColumns::Split { first, last } => index == first || index == last,
                }
        };
        let attributes = headers
            .iter()
            .enumerate()
            .filter(|(index, _)| !consumed(*index))
            .map(|(index, header)| (index, clean_header(header).to_string()))
            .collect();

        Ok(Self {
            id,
            name,
            attributes,
        })
    }

    /// Build a record from one data row.
    pub(crate) fn record(&self, row: &StringRecord) -> Record {
        let field = |index: usize| row.get(index).unwrap_or_default().trim();

        let name = match self.name {
            NameColumns::Single(index) => field(index).to_string(),
            NameColumns::Split { first, last } => {
                format!("{} {}", field(first), field(last)).trim().to_string()
            }
        };
        let attributes: Attributes = self
            .attributes
            .iter()
            .map(|(index, header)| (header.clone(), field(*index).to_string()))
            .collect();

        Record::new(field(self.id), name).with_attributes(attributes)
    }
}

fn clean_header(header: &str) -> &str {
    header.trim_start_matches('\u{feff}').trim()
}

fn normalize_header(header: &str) -> String {
    clean_header(header).to_ascii_lowercase()
}
