use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::error::{Error, Result};
use crate::table::GraphTable;

/// Write a pivoted table to a CSV file.
///
/// The header is `x_value` followed by one column per series; absent
/// (series, label) cells are written as empty fields.
pub fn write_table_csv<P: AsRef<Path>>(table: &GraphTable, path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(Error::Io)?;
    let mut wtr = Writer::from_writer(file);

    // ヘッダー行を書き込む
    let mut header = Vec::with_capacity(table.column_count() + 1);
    header.push("x_value".to_string());
    header.extend(table.column_names().iter().cloned());
    wtr.write_record(&header).map_err(Error::Csv)?;

    // 各行を書き込む
    for (row, label) in table.labels().iter().enumerate() {
        let mut record = Vec::with_capacity(table.column_count() + 1);
        record.push(label.clone());
        for column in 0..table.column_count() {
            match table.get(row, column) {
                Some(value) => record.push(value.to_string()),
                None => record.push(String::new()),
            }
        }
        wtr.write_record(&record).map_err(Error::Csv)?;
    }

    wtr.flush().map_err(Error::Io)?;
    Ok(())
}
