//! Persistence of the authenticated [`Session`].
//!
//! The session is stored as a single JSON row so the whole record is
//! replaced atomically on every login.

use optique_shared::models::Session;
use rusqlite::params;

use crate::database::Database;
use crate::error::Result;

impl Database {
    /// Persist `session`, replacing any previously stored one.
    pub fn save_session(&self, session: &Session) -> Result<()> {
        let json = serde_json::to_string(session)?;
        self.conn().execute(
            "INSERT OR REPLACE INTO session (id, json) VALUES (1, ?1)",
            params![json],
        )?;
        Ok(())
    }

    /// Load the persisted session, if one exists.
    ///
    /// A corrupt row is treated as absent rather than fatal: the user simply
    /// has to log in again.
    pub fn load_session(&self) -> Result<Option<Session>> {
        let row: Option<String> = self
            .conn()
            .query_row("SELECT json FROM session WHERE id = 1", [], |row| {
                row.get(0)
            })
            .map(Some)
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(other),
            })?;

        let Some(json) = row else {
            return Ok(None);
        };

        match serde_json::from_str(&json) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!(error = %e, "discarding corrupt stored session");
                self.clear_session()?;
                Ok(None)
            }
        }
    }

    /// Remove the persisted session (logout).
    pub fn clear_session(&self) -> Result<()> {
        self.conn().execute("DELETE FROM session WHERE id = 1", [])?;
        Ok(())
    }
}
