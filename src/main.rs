use std::path::Path;

use survey_charts::report;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    report::generate_reports(Path::new("survey.csv"), Path::new("charts"))
}
