//! Input validation and normalization.
//!
//! The [`Normalizer`] is the single boundary where column names are checked.
//! It resolves every template [`Field`] to a column index once, so later
//! stages read records by field instead of by header text.

mod filter;

pub use filter::{filter_text, CharacterFilter};

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::model::Table;
use crate::template::{Field, Template};

/// Options for normalizing a loaded table.
#[derive(Debug, Clone, Default)]
pub struct NormalizeOptions {
    /// Pass every cell through the [`CharacterFilter`]
    pub sanitize: bool,
}

impl NormalizeOptions {
    /// Create new normalize options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the character filter.
    pub fn with_sanitize(mut self, sanitize: bool) -> Self {
        self.sanitize = sanitize;
        self
    }

    /// Enable the character filter.
    pub fn sanitized(mut self) -> Self {
        self.sanitize = true;
        self
    }
}

/// Verify that every required column name is present in the table.
///
/// The check is exact and case-sensitive. On failure the error carries the
/// whole required list, not only the missing names.
pub fn check_columns(table: &Table, required: &[&str]) -> Result<()> {
    let missing: Vec<String> = required
        .iter()
        .filter(|column| !table.has_column(column))
        .map(|column| column.to_string())
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    log::debug!("missing columns: {:?}", missing);
    Err(Error::MissingColumns {
        required: required.iter().map(|column| column.to_string()).collect(),
        missing,
    })
}

/// Validates tables against a template and optionally sanitizes them.
#[derive(Debug, Clone)]
pub struct Normalizer {
    template: Template,
    options: NormalizeOptions,
    filter: CharacterFilter,
}

impl Normalizer {
    /// Create a normalizer for a template.
    pub fn new(template: Template, options: NormalizeOptions) -> Self {
        Self {
            template,
            options,
            filter: CharacterFilter::new(),
        }
    }

    /// The template tables are validated against.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Validate the table and produce its normalized form.
    ///
    /// The input table is never modified. Without sanitizing the returned
    /// table is an identical copy; with sanitizing every cell has been
    /// filtered. Row count and order are preserved either way.
    pub fn normalize(&self, table: &Table) -> Result<NormalizedTable> {
        check_columns(table, &self.template.required_columns())?;

        let mut fields = BTreeMap::new();
        for field in self.template.fields() {
            if let Some(index) = table.column_index(field.column_name()) {
                fields.insert(field, index);
            }
        }

        let table = if self.options.sanitize {
            let mut changed = 0usize;
            let sanitized = table.map_cells(|cell| {
                let filtered = self.filter.apply(cell);
                if filtered != cell {
                    changed += 1;
                }
                filtered.into_owned()
            });
            if changed > 0 {
                log::info!("character filter rewrote {} cell(s)", changed);
            }
            sanitized
        } else {
            table.clone()
        };

        log::debug!(
            "normalized {} row(s) across {} column(s)",
            table.row_count(),
            table.column_count()
        );

        Ok(NormalizedTable {
            table,
            template: self.template.clone(),
            fields,
        })
    }
}

/// A table that passed validation for one template.
#[derive(Debug, Clone)]
pub struct NormalizedTable {
    table: Table,
    template: Template,
    fields: BTreeMap<Field, usize>,
}

impl NormalizedTable {
    /// The normalized cells, all columns included.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The template this table was validated against.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    /// Column index resolved for a field.
    pub fn column_of(&self, field: Field) -> Option<usize> {
        self.fields.get(&field).copied()
    }

    /// Iterate over the rows as typed records.
    pub fn records(&self) -> impl Iterator<Item = LabelRecord<'_>> + '_ {
        (0..self.table.row_count()).map(move |index| LabelRecord { table: self, index })
    }

    /// Consume the wrapper and return the normalized table.
    pub fn into_table(self) -> Table {
        self.table
    }
}

/// One row of a [`NormalizedTable`], read by [`Field`].
#[derive(Debug, Clone, Copy)]
pub struct LabelRecord<'a> {
    table: &'a NormalizedTable,
    index: usize,
}

impl<'a> LabelRecord<'a> {
    /// Position of the row in the source table (0-indexed).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Value of a field; empty for fields the template does not use.
    pub fn value(&self, field: Field) -> &'a str {
        self.table
            .column_of(field)
            .and_then(|column| self.table.table.cell(self.index, column))
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Variant;

    fn contact_table() -> Table {
        Table::new([
            "Contact Number",
            "Name",
            "Name of School",
            "Coordinator Name",
            "Address",
        ])
        .with_row(["111", "José Ñ", "Green Valley", "Ravi", "1 Main St"])
        .with_row(["222", "Meera", "Hill Top", "Anita", "2 Lake Rd"])
    }

    #[test]
    fn test_check_columns_ok() {
        let table = contact_table();
        assert!(check_columns(&table, &["Name", "Address"]).is_ok());
        assert!(check_columns(&table, &[]).is_ok());
    }

    #[test]
    fn test_check_columns_reports_full_required_set() {
        let table = Table::new(["Name", "Address"]);
        let err = check_columns(&table, &["Name", "Address", "Contact Number"]).unwrap_err();

        match err {
            Error::MissingColumns { required, missing } => {
                assert_eq!(required, ["Name", "Address", "Contact Number"]);
                assert_eq!(missing, ["Contact Number"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_column_check_is_case_sensitive() {
        let table = Table::new(["name", "Name of School", "Coordinator Name", "Address", "Contact Number"]);
        let normalizer = Normalizer::new(Variant::Contact.template(), NormalizeOptions::new());
        assert!(matches!(
            normalizer.normalize(&table),
            Err(Error::MissingColumns { .. })
        ));
    }

    #[test]
    fn test_normalize_without_sanitizing_keeps_values() {
        let table = contact_table();
        let normalizer = Normalizer::new(Variant::Contact.template(), NormalizeOptions::new());
        let normalized = normalizer.normalize(&table).unwrap();

        assert_eq!(normalized.table(), &table);
        let first = normalized.records().next().unwrap();
        assert_eq!(first.value(Field::Name), "José Ñ");
        assert_eq!(first.value(Field::Contact), "111");
    }

    #[test]
    fn test_normalize_with_sanitizing() {
        let table = contact_table();
        let normalizer = Normalizer::new(
            Variant::Contact.template(),
            NormalizeOptions::new().sanitized(),
        );
        let normalized = normalizer.normalize(&table).unwrap();

        let names: Vec<_> = normalized.records().map(|r| r.value(Field::Name)).collect();
        assert_eq!(names, ["Jos   ", "Meera"]);
        // Source table is untouched
        assert_eq!(table.cell(0, 1), Some("José Ñ"));
    }

    #[test]
    fn test_fields_resolved_by_name_not_position() {
        let normalizer = Normalizer::new(Variant::Contact.template(), NormalizeOptions::new());
        let normalized = normalizer.normalize(&contact_table()).unwrap();

        assert_eq!(normalized.column_of(Field::Contact), Some(0));
        assert_eq!(normalized.column_of(Field::Name), Some(1));
        assert_eq!(normalized.column_of(Field::Principal), None);

        let record = normalized.records().nth(1).unwrap();
        assert_eq!(record.value(Field::Principal), "");
        assert_eq!(record.index(), 1);
    }
}
