use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::chart::{bar, histogram, pie, ChartKind, ChartSpec};
use crate::color;
use crate::data::frequency::{binned_counts, sorted_by_count, value_counts};
use crate::data::loader;

/// Size of the shared pie palette. Slices beyond this cycle colours.
const PIE_PALETTE_SIZE: usize = 10;

// ---------------------------------------------------------------------------
// The nine chart specs
// ---------------------------------------------------------------------------

pub fn chart_specs() -> [ChartSpec; 9] {
    [
        ChartSpec::bar(
            "faculty",
            "Faculty Distribution",
            "Faculty",
            "Number of Students",
            (1800, 600),
            "faculty_distribution.png",
            true,
        ),
        ChartSpec::bar(
            "year",
            "Year of Study Distribution",
            "Year of Study",
            "Number of Students",
            (1000, 600),
            "year_of_study_distribution.png",
            false,
        ),
        ChartSpec::histogram(
            "gpa_range",
            "cGPA Range Distribution",
            "cGPA Range",
            "Frequency",
            (1000, 600),
            "cgpa_range_distribution.png",
        ),
        ChartSpec::histogram(
            "rating",
            "ChatGPT Quality",
            "Rating",
            "Frequency",
            (1000, 600),
            "chatgpt_quality.png",
        ),
        ChartSpec::pie(
            "is_using_cgpt_for_ideas_cheating",
            "Is Using ChatGPT For Ideas Considered Cheating?",
            (600, 600),
            "chatgpt_for_ideas.png",
        ),
        ChartSpec::pie(
            "is_using_cgpt_to_write_cheating",
            "Is Using ChatGPT For Writing",
            (600, 600),
            "chatgpt_for_writing.png",
        )
        .with_subtitle("Code/Essay/Assignments Considered Cheating?"),
        ChartSpec::pie(
            "will_cgpt_increase_cheating",
            "Will ChatGPT Increase Plagiarism/Cheating?",
            (900, 600),
            "will_chatgpt_increase_plagiarism.png",
        ),
        ChartSpec::pie(
            "will_cgpt_increase_or_hinder_learning",
            "Will ChatGPT Hinder Learning?",
            (900, 600),
            "will_chatgpt_hinder_learning.png",
        ),
        ChartSpec::pie(
            "how_can_unis_handle_cgpt",
            "How Can Universities Handle Use of ChatGPT?",
            (1380, 800),
            "how_can_unis_handle_use_of_chatgpt.png",
        ),
    ]
}

// ---------------------------------------------------------------------------
// Report generation
// ---------------------------------------------------------------------------

/// Generate every configured chart from `csv_path` into `out_dir`.
///
/// The output directory is created if absent. A chart whose target file
/// already exists is skipped, never overwritten; everything else propagates
/// as a fatal error.
pub fn generate_reports(csv_path: &Path, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let dataset = loader::load_csv(csv_path)?;
    info!(
        "loaded {} survey responses from {}",
        dataset.len(),
        csv_path.display()
    );

    // One shuffled palette per run, shared by all pie charts.
    let pie_palette = color::shuffled_pastel_palette(PIE_PALETTE_SIZE);

    for spec in chart_specs() {
        let target = out_dir.join(spec.file_name);
        if target.exists() {
            debug!("{} already exists, skipping", target.display());
            continue;
        }

        match spec.kind {
            ChartKind::Bar => {
                let counts = sorted_by_count(&value_counts(&dataset, spec.column)?);
                bar::render(&target, &spec, &counts)?;
            }
            ChartKind::Histogram => {
                let bins = binned_counts(&dataset, spec.column)?;
                histogram::render(&target, &spec, &bins)?;
            }
            ChartKind::Pie => {
                let counts = sorted_by_count(&value_counts(&dataset, spec.column)?);
                pie::render(&target, &spec, &counts, &pie_palette)?;
            }
        }
        info!("wrote {}", target.display());
    }

    Ok(())
}
