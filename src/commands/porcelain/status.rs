use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::{Status, StatusInfo};
use colored::Colorize;
use std::io::Write;

impl Repository {
    pub fn status(&self) -> anyhow::Result<()> {
        self.open()?;

        let status = Status::new(self).collect()?;
        self.show_status(&status)
    }

    fn show_status(&self, status: &StatusInfo) -> anyhow::Result<()> {
        writeln!(self.writer(), "=== Branches ===")?;
        for branch in &status.branches {
            if branch == &status.active_branch {
                let marked = format!("*{branch}");
                if self.color() {
                    writeln!(self.writer(), "{}", marked.green())?;
                } else {
                    writeln!(self.writer(), "{marked}")?;
                }
            } else {
                writeln!(self.writer(), "{branch}")?;
            }
        }
        writeln!(self.writer())?;

        self.show_section("Staged Files", status.staged_files.iter())?;
        self.show_section("Removed Files", status.removed_files.iter())?;
        self.show_section(
            "Modifications Not Staged For Commit",
            status
                .unstaged_changes
                .iter()
                .map(|(file_name, change)| format!("{file_name} ({change})")),
        )?;
        self.show_section("Untracked Files", status.untracked_files.iter())
    }

    fn show_section(
        &self,
        title: &str,
        lines: impl Iterator<Item = impl std::fmt::Display>,
    ) -> anyhow::Result<()> {
        writeln!(self.writer(), "=== {title} ===")?;
        for line in lines {
            writeln!(self.writer(), "{line}")?;
        }
        writeln!(self.writer())?;

        Ok(())
    }
}
