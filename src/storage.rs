use crate::report::RenderedReport;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write the report's Markdown to `path`, replacing any previous file.
pub fn save_report<P: AsRef<Path>>(report: &RenderedReport, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    f.write_all(report.markdown.as_bytes())
        .with_context(|| format!("write {}", path.display()))?;
    f.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn overwrites_previous_report() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("output.md");
        std::fs::write(&p, "stale content that is longer than the new one").unwrap();
        let report = RenderedReport {
            markdown: "# fresh\n".into(),
            chart: None,
        };
        save_report(&report, &p).unwrap();
        assert_eq!(std::fs::read_to_string(&p).unwrap(), "# fresh\n");
    }
}
