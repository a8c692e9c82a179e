//! Хранилище истории задач в CSV
//!
//! Формат: заголовок `date,task,duration_minutes`, дата как month/day/year.
//! Блокировок нет: один писатель на файл, за этим следит вызывающая сторона.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::error::{PredictorError, Result};
use crate::preprocessing::{format_record_date, parse_record_date};
use crate::types::{HistoricalRecord, TaskLog};

pub const CSV_HEADERS: [&str; 3] = ["date", "task", "duration_minutes"];

#[derive(Debug, Clone)]
pub struct TaskLogStore {
    path: PathBuf,
}

impl TaskLogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Загрузка всей истории. Нет файла — пустая история.
    pub fn load_data(&self) -> Result<Vec<HistoricalRecord>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No history at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(PredictorError::io(&self.path, e)),
        };
        let content = String::from_utf8_lossy(&bytes);

        let rows = split_rows(&content);
        let total = rows.len().saturating_sub(1);

        // Первая строка — заголовок, всегда пропускается
        let records: Vec<HistoricalRecord> =
            rows.iter().skip(1).filter_map(|fields| parse_row(fields)).collect();

        if records.len() < total {
            tracing::debug!(
                "Skipped {} malformed rows in {}",
                total - records.len(),
                self.path.display()
            );
        }
        tracing::debug!("Loaded {} records", records.len());

        Ok(records)
    }

    /// Дозапись логов с сегодняшней датой по умолчанию
    pub fn append_records(&self, logs: &[TaskLog]) -> Result<usize> {
        self.append_records_on(logs, Local::now().date_naive())
    }

    /// Дозапись логов; `today` подставляется вместо отсутствующих и битых дат
    pub fn append_records_on(&self, logs: &[TaskLog], today: NaiveDate) -> Result<usize> {
        if let Some(folder) = self.path.parent() {
            if !folder.as_os_str().is_empty() {
                fs::create_dir_all(folder).map_err(|e| PredictorError::io(folder, e))?;
            }
        }

        let need_header = !self.path.is_file();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| PredictorError::io(&self.path, e))?;

        let mut buffer = String::new();
        if need_header {
            buffer.push_str(&CSV_HEADERS.join(","));
            buffer.push('\n');
        }

        let today_str = format_record_date(today);
        for log in logs {
            let date = match log.date.as_deref() {
                Some(date) if parse_record_date(date).is_some() => date,
                Some(date) => {
                    tracing::warn!("Invalid log date '{}', using {}", date, today_str);
                    today_str.as_str()
                }
                None => today_str.as_str(),
            };
            buffer.push_str(&format_row(date, &log.task, log.duration));
            buffer.push('\n');
        }

        file.write_all(buffer.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| PredictorError::io(&self.path, e))?;

        tracing::info!("Appended {} task logs to {}", logs.len(), self.path.display());
        Ok(logs.len())
    }
}

/// Разбор одной строки; None — строка битая и отбрасывается
fn parse_row(fields: &[String]) -> Option<HistoricalRecord> {
    if fields.len() < 3 {
        return None;
    }

    let duration = fields[2].trim().parse::<f64>().ok().filter(|d| d.is_finite())?;
    let date = parse_record_date(fields[0].trim())?;

    Some(HistoricalRecord {
        date,
        task: fields[1].trim().to_string(),
        duration,
    })
}

fn format_row(date: &str, task: &str, duration: f64) -> String {
    [
        escape_field(date),
        escape_field(task),
        escape_field(&duration.to_string()),
    ]
    .join(",")
}

/// Поле с запятой, кавычкой или переводом строки берётся в кавычки
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Разбиение CSV на строки и поля с учётом кавычек.
/// Пустая строка остаётся строкой с одним пустым полем.
fn split_rows(content: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fields(row: &[&str]) -> Vec<String> {
        row.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn splits_quoted_fields() {
        let rows = split_rows("date,task,duration_minutes\r\n1/1/2024,\"write, edit\",30\n\n1/2/2024,\"say \"\"hi\"\"\",5");
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1], fields(&["1/1/2024", "write, edit", "30"]));
        assert_eq!(rows[2], fields(&[""]));
        assert_eq!(rows[3], fields(&["1/2/2024", "say \"hi\"", "5"]));
    }

    #[test]
    fn leading_blank_line_is_the_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.csv");
        fs::write(&path, "\n1/1/2024,write,30\n\n1/2/2024,write,60\n").unwrap();

        let records = TaskLogStore::new(&path).load_data().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].duration, 30.0);
        assert_eq!(records[1].duration, 60.0);
    }

    #[test]
    fn quoted_newline_stays_in_field() {
        let rows = split_rows("h\n1/1/2024,\"two\nlines\",3\n");
        assert_eq!(rows[1], fields(&["1/1/2024", "two\nlines", "3"]));
    }

    #[test]
    fn row_parsing_drops_malformed() {
        assert!(parse_row(&fields(&["1/1/2024", "write"])).is_none());
        assert!(parse_row(&fields(&["1/1/2024", "write", "abc"])).is_none());
        assert!(parse_row(&fields(&["1/1/2024", "write", "inf"])).is_none());
        assert!(parse_row(&fields(&["2024-01-01", "write", "30"])).is_none());

        let record = parse_row(&fields(&[" 01/05/2024 ", " write ", " 12.5 ", "extra"])).unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(record.task, "write");
        assert_eq!(record.duration, 12.5);
    }

    #[test]
    fn escapes_only_when_needed() {
        assert_eq!(escape_field("write"), "write");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn missing_file_is_empty_history() {
        let dir = TempDir::new().unwrap();
        let store = TaskLogStore::new(dir.path().join("nope.csv"));
        assert!(store.load_data().unwrap().is_empty());
    }

    #[test]
    fn header_written_once_and_folder_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("task_data.csv");
        let store = TaskLogStore::new(&path);
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        store.append_records_on(&[TaskLog::new("write", 30.0)], today).unwrap();
        store.append_records_on(&[TaskLog::new("write", 30.0)], today).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "date,task,duration_minutes\n06/01/2024,write,30\n06/01/2024,write,30\n"
        );
    }

    #[test]
    fn invalid_date_replaced_by_today() {
        let dir = TempDir::new().unwrap();
        let store = TaskLogStore::new(dir.path().join("log.csv"));
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        store
            .append_records_on(
                &[
                    TaskLog::new("a", 1.0).on("not a date"),
                    TaskLog::new("b", 2.0).on("3/14/2024"),
                ],
                today,
            )
            .unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("06/01/2024,a,1\n"));
        assert!(content.contains("3/14/2024,b,2\n"));
    }

    #[test]
    fn short_year_and_padded_dates_replaced_by_today() {
        let dir = TempDir::new().unwrap();
        let store = TaskLogStore::new(dir.path().join("log.csv"));
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        store
            .append_records_on(
                &[TaskLog::new("a", 1.0).on("3/14/24"), TaskLog::new("b", 2.0).on(" 3/14/2024")],
                today,
            )
            .unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            content,
            "date,task,duration_minutes\n06/01/2024,a,1\n06/01/2024,b,2\n"
        );
        let records = store.load_data().unwrap();
        assert!(records.iter().all(|r| r.date == today));
    }

    #[test]
    fn short_year_rows_are_dropped_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.csv");
        fs::write(&path, "date,task,duration_minutes\n3/14/24,write,30\n 3/15/2024 ,write,60\n").unwrap();

        let records = TaskLogStore::new(&path).load_data().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn header_row_is_never_data() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.csv");
        fs::write(&path, "1/1/2024,write,30\n1/2/2024,write,60\n").unwrap();

        let records = TaskLogStore::new(&path).load_data().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].duration, 60.0);
    }

    #[test]
    fn unwritable_location_is_an_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let store = TaskLogStore::new(blocker.join("log.csv"));
        let err = store.append_records(&[TaskLog::new("a", 1.0)]).unwrap_err();
        assert!(matches!(err, PredictorError::Io { .. }));
    }
}
