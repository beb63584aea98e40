use crate::areas::repository::Repository;

impl Repository {
    /// Print every commit in the object database, ordered by id
    pub fn global_log(&self) -> anyhow::Result<()> {
        self.open()?;

        for (oid, commit) in self.graph().all_commits()? {
            self.show_commit(&oid, &commit)?;
        }

        Ok(())
    }
}
