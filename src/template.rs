//! Label templates.
//!
//! A [`Template`] is an ordered list of `label → field` mappings plus the
//! alignment used for every field line. The two built-in layouts are
//! available through [`Variant`]; custom templates can be assembled with
//! [`Template::new`] and [`Template::with_line`].

use serde::{Deserialize, Serialize};

use crate::model::{Alignment, Table};

/// The closed set of fields a label can print.
///
/// Each field is bound to exactly one spreadsheet column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    Name,
    Principal,
    School,
    Coordinator,
    Address,
    Contact,
    Participants,
}

impl Field {
    /// The header text this field is read from (case-sensitive).
    pub fn column_name(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Principal => "Name of Principal",
            Field::School => "Name of School",
            Field::Coordinator => "Coordinator Name",
            Field::Address => "Address",
            Field::Contact => "Contact Number",
            Field::Participants => "Total Number of Participants",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column_name())
    }
}

/// One `label: value` line of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateLine {
    /// Caption printed before the value, without the colon
    pub label: String,

    /// Field whose value follows the caption
    pub field: Field,
}

impl TemplateLine {
    /// Create a template line.
    pub fn new(label: impl Into<String>, field: Field) -> Self {
        Self {
            label: label.into(),
            field,
        }
    }

    /// Format the line for a value, e.g. `Name: Asha`.
    pub fn format(&self, value: &str) -> String {
        format!("{}: {}", self.label, value)
    }
}

/// A fixed block layout: one line per entry, all with the same alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Lines in print order
    pub lines: Vec<TemplateLine>,

    /// Alignment of the field lines
    pub align: Alignment,
}

impl Template {
    /// Create an empty template with the given alignment.
    pub fn new(align: Alignment) -> Self {
        Self {
            lines: Vec::new(),
            align,
        }
    }

    /// Append a line.
    pub fn with_line(mut self, label: impl Into<String>, field: Field) -> Self {
        self.lines.push(TemplateLine::new(label, field));
        self
    }

    /// Fields used by the template, in print order, without duplicates.
    pub fn fields(&self) -> Vec<Field> {
        let mut fields = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            if !fields.contains(&line.field) {
                fields.push(line.field);
            }
        }
        fields
    }

    /// Column names a table must provide for this template.
    pub fn required_columns(&self) -> Vec<&'static str> {
        self.fields().iter().map(Field::column_name).collect()
    }

    /// Check whether a table carries every required column.
    pub fn matches(&self, table: &Table) -> bool {
        self.required_columns()
            .iter()
            .all(|column| table.has_column(column))
    }

    /// Number of printed lines per block, spacer included.
    pub fn block_height(&self) -> usize {
        self.lines.len() + 1
    }
}

impl From<Variant> for Template {
    fn from(variant: Variant) -> Self {
        variant.template()
    }
}

/// The built-in label layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Name, school, coordinator, address and contact; centered.
    #[default]
    Contact,
    /// Principal, school, coordinator, address, contact and participant
    /// count; left aligned.
    Principal,
}

impl Variant {
    /// All built-in variants in detection order.
    pub const ALL: [Variant; 2] = [Variant::Contact, Variant::Principal];

    /// Build the template for this variant.
    pub fn template(&self) -> Template {
        match self {
            Variant::Contact => Template::new(Alignment::Center)
                .with_line("Name", Field::Name)
                .with_line("School", Field::School)
                .with_line("Coordinator", Field::Coordinator)
                .with_line("Address", Field::Address)
                .with_line("Contact", Field::Contact),
            Variant::Principal => Template::new(Alignment::Left)
                .with_line("Principal", Field::Principal)
                .with_line("School", Field::School)
                .with_line("Coordinator", Field::Coordinator)
                .with_line("Address", Field::Address)
                .with_line("Contact", Field::Contact)
                .with_line("Participants", Field::Participants),
        }
    }

    /// Pick the first variant whose columns are all present in the table.
    pub fn detect(table: &Table) -> Option<Variant> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.template().matches(table))
    }

    /// Short lowercase name, as used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Contact => "contact",
            Variant::Principal => "principal",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
