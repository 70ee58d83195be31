//! Export helpers for CSV and JSON artifacts.

pub mod table {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const HEADER: &str =
        "design,stage_count,total_mass_kg,total_cost,is_best,requirements,achieved_dv_m_s,min_acceleration_m_s2,min_twr";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard result-table CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row for one design. Composite fields (`design`, `requirements`,
    /// `achieved_dv_m_s`) use comma-free separators so the row stays a
    /// plain CSV record; any commas smuggled in through part names are
    /// rewritten to spaces on output.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub design: &'a str,
        pub stage_count: usize,
        pub total_mass_kg: f64,
        pub total_cost: f64,
        pub is_best: bool,
        pub requirements: &'a str,
        pub achieved_dv_m_s: &'a str,
        pub min_acceleration_m_s2: f64,
        pub min_twr: f64,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{},{:.3},{:.2},{},{},{},{:.3},{:.3}",
                sanitize(self.design),
                self.stage_count,
                self.total_mass_kg,
                self.total_cost,
                if self.is_best { "true" } else { "false" },
                sanitize(self.requirements),
                sanitize(self.achieved_dv_m_s),
                self.min_acceleration_m_s2,
                self.min_twr,
            )
        }
    }

    fn sanitize(field: &str) -> String {
        field.replace(',', " ")
    }
}

pub mod summary {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// One stage of a design in the JSON sidecar.
    #[derive(Debug, Clone, Serialize)]
    pub struct StageSummary {
        pub engine: String,
        pub engine_count: u32,
        pub radial_size: String,
        pub propellant_kg: f64,
        pub dry_mass_kg: f64,
        pub gimbal_deg: f64,
        pub cost: f64,
    }

    /// One requirement verdict in the JSON sidecar.
    #[derive(Debug, Clone, Serialize)]
    pub struct RequirementSummary {
        pub delta_v_m_s: f64,
        pub pressure_atm: f64,
        pub achieved_dv_m_s: f64,
        pub min_acceleration_m_s2: f64,
        pub min_twr: f64,
    }

    /// Full design entry in the JSON sidecar.
    #[derive(Debug, Clone, Serialize)]
    pub struct DesignSummary {
        pub stages: Vec<StageSummary>,
        pub total_mass_kg: f64,
        pub total_cost: f64,
        pub is_best: bool,
        pub requirements: Vec<RequirementSummary>,
    }

    /// Write a `{stem}.json` sidecar next to the CSV output path.
    pub fn write_sidecar(output: &Path, designs: &[DesignSummary]) -> io::Result<()> {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("designs");
        let json_path = if parent.as_os_str().is_empty() {
            Path::new(".").join(format!("{}.json", stem))
        } else {
            parent.join(format!("{}.json", stem))
        };
        to_writer_pretty(File::create(json_path)?, &designs)?;
        Ok(())
    }
}
