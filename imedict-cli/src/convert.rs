use std::fs;
use std::path::{Path, PathBuf};

use imedict::{
    CategoryFilter, Converter, EmitOptions, EmitReport, Error, FormatType, OutputKind,
    all_formats_targets,
};
use rayon::prelude::*;

/// Output destinations requested on the command line.
#[derive(Debug, Clone, Default)]
pub struct Outputs {
    pub csv: Option<PathBuf>,
    pub txt: Option<PathBuf>,
    pub macos: Option<PathBuf>,
    pub windows: Option<PathBuf>,
    /// Output directory when every format is requested.
    pub all_formats: Option<PathBuf>,
}

impl Outputs {
    pub fn is_empty(&self) -> bool {
        self.csv.is_none()
            && self.txt.is_none()
            && self.macos.is_none()
            && self.windows.is_none()
            && self.all_formats.is_none()
    }

    /// Individual targets in the order they are written.
    fn individual(&self) -> Vec<(FormatType, &Path)> {
        [
            (FormatType::Csv, &self.csv),
            (FormatType::Text, &self.txt),
            (FormatType::Macos, &self.macos),
            (FormatType::Windows, &self.windows),
        ]
        .into_iter()
        .filter_map(|(format, path)| path.as_deref().map(|p| (format, p)))
        .collect()
    }
}

/// Run the requested conversions and print one report per output.
///
/// `--all-formats` takes precedence over individual paths and writes the four
/// formats in parallel; reports are still printed in format order.
pub fn run_conversions(
    converter: &Converter,
    source: &Path,
    outputs: &Outputs,
    filter: Option<CategoryFilter>,
) -> Result<(), Error> {
    let options = EmitOptions::new().with_categories(filter);

    if let Some(output_dir) = &outputs.all_formats {
        fs::create_dir_all(output_dir).map_err(|e| Error::write(output_dir, e))?;
        let targets = all_formats_targets(output_dir, source, options.categories.as_ref());
        tracing::debug!(
            output_dir = %output_dir.display(),
            targets = targets.len(),
            "writing all formats"
        );

        let results: Vec<Result<EmitReport, Error>> = targets
            .par_iter()
            .map(|(format, path)| converter.write(*format, path, &options))
            .collect();

        for result in results {
            print_report(&result?);
        }
        return Ok(());
    }

    let targets = outputs.individual();
    tracing::debug!(targets = targets.len(), "writing requested formats");
    for (format, path) in targets {
        let report = converter.write(format, path, &options)?;
        print_report(&report);
    }
    Ok(())
}

fn label(report: &EmitReport) -> &'static str {
    match (report.format, report.kind) {
        (FormatType::Csv, _) => "CSV",
        (FormatType::Text, _) => "TXT",
        (FormatType::Macos, Some(OutputKind::LegacyText)) => "macOS形式",
        (FormatType::Macos, _) => "macOS plist形式",
        (FormatType::Windows, _) => "Windows形式",
    }
}

pub fn print_report(report: &EmitReport) {
    if !report.is_written() {
        println!("⚠️  出力する単語がありません");
        return;
    }

    println!(
        "✅ {}出力完了: {} ({}件)",
        label(report),
        report.path.display(),
        report.written()
    );
    if let Some(categories) = &report.categories {
        println!("   対象カテゴリ: {}", categories.join(", "));
    }
}
