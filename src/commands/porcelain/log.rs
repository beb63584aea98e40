use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Print the active commit and its first-parent ancestors, newest first
    pub fn log(&self) -> anyhow::Result<()> {
        self.open()?;

        let head = self.refs().head()?;
        for entry in self.graph().first_parent_walk(head) {
            let (oid, commit) = entry?;
            self.show_commit(&oid, &commit)?;
        }

        Ok(())
    }

    pub(crate) fn show_commit(&self, oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        let header = format!("commit {oid}");
        let header = if self.color() {
            header.yellow().to_string()
        } else {
            header
        };

        writeln!(self.writer(), "===")?;
        writeln!(self.writer(), "{header}")?;
        if let (Some(parent), Some(merge_parent)) = (commit.parent(), commit.merge_parent()) {
            writeln!(
                self.writer(),
                "Merge: {} {}",
                parent.to_short_oid(),
                merge_parent.to_short_oid()
            )?;
        }
        writeln!(self.writer(), "Date: {}", commit.readable_timestamp())?;
        writeln!(self.writer(), "{}", commit.message())?;
        writeln!(self.writer())?;

        Ok(())
    }
}
