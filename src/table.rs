use crate::models::Record;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Stable identity of a row. Never reused within one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Activity,
    Duration,
    Frequency,
    Output,
    Remarks,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Activity,
        Field::Duration,
        Field::Frequency,
        Field::Output,
        Field::Remarks,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Activity => "activity",
            Field::Duration => "duration",
            Field::Frequency => "frequency",
            Field::Output => "output",
            Field::Remarks => "remarks",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Activity => "Activity",
            Field::Duration => "Duration",
            Field::Frequency => "Frequency",
            Field::Output => "Output",
            Field::Remarks => "Remarks",
        }
    }
}

impl FromStr for Field {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| TableError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("no row with id {0}")]
    UnknownRow(RowId),
    #[error("unknown field '{0}'")]
    UnknownField(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: RowId,
    /// Display sequence number, fixed when the row is appended. Seeded
    /// rows keep the text they were rendered with.
    pub no: String,
    pub activity: String,
    pub duration: String,
    pub frequency: String,
    pub output: String,
    pub remarks: String,
}

impl Row {
    fn blank(id: RowId, no: String) -> Self {
        Self {
            id,
            no,
            activity: String::new(),
            duration: String::new(),
            frequency: String::new(),
            output: String::new(),
            remarks: String::new(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Activity => &self.activity,
            Field::Duration => &self.duration,
            Field::Frequency => &self.frequency,
            Field::Output => &self.output,
            Field::Remarks => &self.remarks,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Activity => &mut self.activity,
            Field::Duration => &mut self.duration,
            Field::Frequency => &mut self.frequency,
            Field::Output => &mut self.output,
            Field::Remarks => &mut self.remarks,
        }
    }

    pub fn to_record(&self) -> Record {
        Record {
            no: self.no.clone(),
            activity: self.activity.clone(),
            duration: self.duration.clone(),
            frequency: self.frequency.clone(),
            output: self.output.clone(),
            remarks: self.remarks.clone(),
        }
    }
}

/// Ordered rows of the editor. Insertion order is display order is
/// submission order.
///
/// Sequence numbers are assigned on append as `len + 1` and are not
/// recomputed when rows are removed, so they can repeat or skip.
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Row>,
    next_id: u64,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the table with rows rendered by the template layer.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut table = Self::new();
        for record in records {
            let id = table.allocate_id();
            table.rows.push(Row {
                id,
                no: record.no,
                activity: record.activity,
                duration: record.duration,
                frequency: record.frequency,
                output: record.output,
                remarks: record.remarks,
            });
        }
        table
    }

    pub fn append(&mut self) -> RowId {
        let id = self.allocate_id();
        let no = (self.rows.len() + 1).to_string();
        self.rows.push(Row::blank(id, no));
        id
    }

    pub fn remove(&mut self, id: RowId) -> Result<Row, TableError> {
        let index = self.position(id)?;
        Ok(self.rows.remove(index))
    }

    /// Replaces one editable cell. The value is stored as given.
    pub fn edit(&mut self, id: RowId, field: Field, value: impl Into<String>) -> Result<(), TableError> {
        let index = self.position(id)?;
        *self.rows[index].slot(field) = value.into();
        Ok(())
    }

    pub fn get(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn records(&self) -> Vec<Record> {
        self.rows.iter().map(Row::to_record).collect()
    }

    fn position(&self, id: RowId) -> Result<usize, TableError> {
        self.rows
            .iter()
            .position(|row| row.id == id)
            .ok_or(TableError::UnknownRow(id))
    }

    fn allocate_id(&mut self) -> RowId {
        self.next_id += 1;
        RowId(self.next_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_numbers_rows_from_one() {
        let mut table = Table::new();
        table.append();
        table.append();
        let numbers: Vec<&str> = table.rows().iter().map(|row| row.no.as_str()).collect();
        assert_eq!(numbers, vec!["1", "2"]);
        assert!(table.rows().iter().all(|row| row.activity.is_empty() && row.remarks.is_empty()));
    }

    #[test]
    fn length_tracks_appends_minus_removes() {
        let mut table = Table::new();
        let ids: Vec<RowId> = (0..5).map(|_| table.append()).collect();
        table.remove(ids[1]).unwrap();
        table.remove(ids[3]).unwrap();
        assert_eq!(table.len(), 3);
        let remaining: Vec<RowId> = table.rows().iter().map(|row| row.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2], ids[4]]);
    }

    #[test]
    fn append_then_remove_leaves_empty_table() {
        let mut table = Table::new();
        let id = table.append();
        table.remove(id).unwrap();
        assert!(table.is_empty());
        assert!(table.records().is_empty());
    }

    #[test]
    fn remove_does_not_renumber() {
        let mut table = Table::new();
        let first = table.append();
        table.append();
        table.append();
        table.remove(first).unwrap();
        let numbers: Vec<&str> = table.rows().iter().map(|row| row.no.as_str()).collect();
        assert_eq!(numbers, vec!["2", "3"]);

        table.append();
        let numbers: Vec<&str> = table.rows().iter().map(|row| row.no.as_str()).collect();
        assert_eq!(numbers, vec!["2", "3", "3"]);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut table = Table::new();
        let first = table.append();
        table.remove(first).unwrap();
        let second = table.append();
        assert_ne!(first, second);
    }

    #[test]
    fn remove_unknown_row_fails() {
        let mut table = Table::new();
        table.append();
        assert_eq!(table.remove(RowId(99)), Err(TableError::UnknownRow(RowId(99))));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn edit_keeps_whitespace() {
        let mut table = Table::new();
        let id = table.append();
        table.edit(id, Field::Activity, "  Meeting ").unwrap();
        assert_eq!(table.get(id).unwrap().activity, "  Meeting ");
        assert_eq!(
            table.edit(RowId(42), Field::Output, "x"),
            Err(TableError::UnknownRow(RowId(42)))
        );
    }

    #[test]
    fn records_follow_display_order() {
        let mut table = Table::new();
        let id = table.append();
        table.edit(id, Field::Activity, "Meeting").unwrap();
        table.edit(id, Field::Duration, "1h").unwrap();
        table.edit(id, Field::Frequency, "Daily").unwrap();
        table.edit(id, Field::Output, "Notes sent").unwrap();
        let records = table.records();
        assert_eq!(
            records,
            vec![Record {
                no: "1".into(),
                activity: "Meeting".into(),
                duration: "1h".into(),
                frequency: "Daily".into(),
                output: "Notes sent".into(),
                remarks: String::new(),
            }]
        );
    }

    #[test]
    fn from_records_keeps_number_text_verbatim() {
        let mut table = Table::from_records(vec![
            Record { no: "7".into(), activity: "Audit".into(), ..Record::default() },
            Record { no: "n/a".into(), ..Record::default() },
            Record { no: " 3 ".into(), ..Record::default() },
        ]);
        let numbers: Vec<String> = table.records().into_iter().map(|record| record.no).collect();
        assert_eq!(numbers, vec!["7", "n/a", " 3 "]);
        assert_eq!(table.rows()[0].activity, "Audit");

        table.append();
        assert_eq!(table.rows()[3].no, "4");
    }

    #[test]
    fn field_parses_lowercase_names() {
        assert_eq!("remarks".parse::<Field>(), Ok(Field::Remarks));
        assert_eq!(
            "Remarks".parse::<Field>(),
            Err(TableError::UnknownField("Remarks".into()))
        );
    }
}
