use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::models::machine::Machine;

/// Where an exported file ends up. Injected into the machines page so the
/// CSV formatting stays testable without touching the filesystem.
pub trait ExportSink {
    fn save(&mut self, filename: &str, contents: &str) -> io::Result<()>;
}

/// Writes exports into a directory, creating it if needed.
pub struct FileExportSink {
    dir: PathBuf,
}

impl FileExportSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ExportSink for FileExportSink {
    fn save(&mut self, filename: &str, contents: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        fs::write(&path, contents)?;
        tracing::info!("Exported {}", path.display());
        Ok(())
    }
}

pub fn export_filename(date: NaiveDate) -> String {
    format!("machines-export-{}.csv", date.format("%Y-%m-%d"))
}

/// Machines as CSV: fixed column order, every field double-quoted, absent
/// values as "N/A", dates at day granularity.
pub fn machines_to_csv<'a, I>(machines: I) -> String
where
    I: IntoIterator<Item = &'a Machine>,
{
    let mut out = String::from("Name,Model,Serial Number,Location,Status,Installation Date\n");
    for machine in machines {
        let location = machine.location.as_deref().filter(|l| !l.is_empty());
        let date = machine
            .installation_date
            .map(|d| d.format("%Y-%m-%d").to_string());
        let row = [
            machine.name.as_str(),
            machine.model.as_str(),
            machine.serial_number.as_str(),
            location.unwrap_or("N/A"),
            machine.status.as_str(),
            date.as_deref().unwrap_or("N/A"),
        ];
        let quoted: Vec<String> = row.iter().map(|field| quote(field)).collect();
        out.push_str(&quoted.join(","));
        out.push('\n');
    }
    out
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
