//! Store schema initialization.

use crate::error::{DatabaseResultExt, Result};

impl super::Store {
    /// Initializes the schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize store schema")?;

        Ok(())
    }
}
