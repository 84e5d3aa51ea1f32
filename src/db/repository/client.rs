//! Client Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, SequenceRepository};
use crate::db::models::{Client, ClientCreate};
use crate::ident::EntityKind;

const CLIENT_TABLE: &str = "client";

/// Collections holding records that reference a client and are removed
/// when the client is deleted. Best-effort sequential, no transaction:
/// a crash mid-cascade leaves unreachable orphans, not corruption.
const CASCADE_COLLECTIONS: &[&str] = &["order", "review", "subscription", "notification"];

#[derive(Clone)]
pub struct ClientRepository {
    base: BaseRepository,
    sequences: SequenceRepository,
}

impl ClientRepository {
    pub fn new(db: Surreal<Db>, sequences: SequenceRepository) -> Self {
        Self {
            base: BaseRepository::new(db),
            sequences,
        }
    }

    /// Create a client, returning its storage identifier
    ///
    /// A caller-supplied all-digit id becomes `client_<id>`; anything else
    /// is ignored and a sequence number is allocated instead.
    pub async fn create(&self, data: ClientCreate) -> RepoResult<String> {
        let name = data.name.filter(|s| !s.is_empty()).ok_or_else(|| {
            RepoError::Validation("Invalid input, missing name or email".to_string())
        })?;
        let email = data.email.filter(|s| !s.is_empty()).ok_or_else(|| {
            RepoError::Validation("Invalid input, missing name or email".to_string())
        })?;

        let key = match data.id {
            Some(id) if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) => {
                EntityKind::Client.qualify(&id)
            }
            _ => {
                let n = self.sequences.next(EntityKind::Client).await?;
                EntityKind::Client.id_for(n)
            }
        };

        let created: Option<Client> = self
            .base
            .db()
            .create((CLIENT_TABLE, key.as_str()))
            .content(Client {
                id: None,
                name,
                email,
            })
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create client".to_string()))?;

        Ok(key)
    }

    /// Find a client by numeric suffix or full identifier
    pub async fn find(&self, id: &str) -> RepoResult<Option<Client>> {
        let key = EntityKind::Client.qualify(id);
        let client: Option<Client> = self.base.db().select((CLIENT_TABLE, key.as_str())).await?;
        Ok(client)
    }

    /// Delete a client and cascade to all records referencing it
    ///
    /// Deletes the client record first, then its orders, reviews,
    /// subscriptions and notifications, in that order.
    pub async fn delete_cascade(&self, id: &str) -> RepoResult<()> {
        let key = EntityKind::Client.qualify(id);

        let existing: Option<Client> = self.base.db().select((CLIENT_TABLE, key.as_str())).await?;
        if existing.is_none() {
            return Err(RepoError::NotFound("Client not found".to_string()));
        }

        let _deleted: Option<Client> =
            self.base.db().delete((CLIENT_TABLE, key.as_str())).await?;

        for collection in CASCADE_COLLECTIONS {
            self.base
                .db()
                .query(format!("DELETE {collection} WHERE client_id = $cid"))
                .bind(("cid", key.clone()))
                .await?
                .check()?;
        }

        tracing::debug!(client = %key, "Client and associated data deleted");
        Ok(())
    }
}
