use crate::areas::repository::Repository;
use crate::artifacts::core::error::GitletError;
use std::io::Write;

impl Repository {
    /// Print the id of every commit whose message is exactly `message`
    pub fn find(&self, message: &str) -> anyhow::Result<()> {
        self.open()?;

        let matches = self
            .graph()
            .all_commits()?
            .into_iter()
            .filter(|(_, commit)| commit.message() == message)
            .map(|(oid, _)| oid)
            .collect::<Vec<_>>();

        if matches.is_empty() {
            return Err(GitletError::NoMessageMatch.into());
        }

        for oid in matches {
            writeln!(self.writer(), "{oid}")?;
        }

        Ok(())
    }
}
