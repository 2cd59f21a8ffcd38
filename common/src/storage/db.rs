use super::types::StoredObject;
use std::ops::Deref;
use surrealdb::{
    engine::any::{connect, Any},
    opt::auth::Root,
    Error, Surreal,
};

#[derive(Clone)]
pub struct SurrealDbClient {
    pub client: Surreal<Any>,
}

impl SurrealDbClient {
    /// # Initialize a new database client
    ///
    /// # Returns
    /// * `SurrealDbClient` initialized
    pub async fn new(
        address: &str,
        username: &str,
        password: &str,
        namespace: &str,
        database: &str,
    ) -> Result<Self, Error> {
        let db = connect(address).await?;

        // Sign in to database
        db.signin(Root { username, password }).await?;

        // Set namespace
        db.use_ns(namespace).use_db(database).await?;

        Ok(SurrealDbClient { client: db })
    }

    /// Table and index definitions for the one collection this service writes.
    pub async fn ensure_initialized(&self) -> Result<(), Error> {
        self.client
            .query("DEFINE TABLE surveyresponse SCHEMALESS")
            .await?;
        self.client
            .query("DEFINE INDEX idx_response_survey ON surveyresponse FIELDS survey_id")
            .await?;

        Ok(())
    }

    /// Cheap connectivity probe against the store.
    pub async fn ping(&self) -> Result<(), Error> {
        self.client.query("RETURN true").await?;
        Ok(())
    }

    /// Names of the tables currently present in the database. Introspection
    /// for diagnostics only; ordering is whatever the store returns.
    pub async fn table_names(&self) -> Result<Vec<String>, Error> {
        let mut response = self.client.query("INFO FOR DB").await?;
        let info: Option<serde_json::Value> = response.take(0)?;

        let names = info
            .as_ref()
            .and_then(|value| value.get("tables"))
            .and_then(|tables| tables.as_object())
            .map(|tables| tables.keys().cloned().collect())
            .unwrap_or_default();

        Ok(names)
    }

    /// Operation to store an object in SurrealDB, requires the struct to implement StoredObject
    ///
    /// # Arguments
    /// * `item` - The item to be stored
    ///
    /// # Returns
    /// * `Result` - Item or Error
    pub async fn store_item<T>(&self, item: T) -> Result<Option<T>, Error>
    where
        T: StoredObject + Send + Sync + 'static,
    {
        self.client
            .create((T::table_name(), item.get_id()))
            .content(item)
            .await
    }

    /// Operation to retrieve a single object by its ID, requires the struct to implement StoredObject
    pub async fn get_item<T>(&self, id: &str) -> Result<Option<T>, Error>
    where
        T: for<'de> StoredObject,
    {
        self.client.select((T::table_name(), id)).await
    }

    /// Operation to retrieve all objects from a certain table, requires the struct to implement StoredObject
    pub async fn get_all_stored_items<T>(&self) -> Result<Vec<T>, Error>
    where
        T: for<'de> StoredObject,
    {
        self.client.select(T::table_name()).await
    }
}

impl Deref for SurrealDbClient {
    type Target = Surreal<Any>;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl SurrealDbClient {
    /// Create an in-memory SurrealDB client for testing.
    pub async fn memory(namespace: &str, database: &str) -> Result<Self, Error> {
        let db = connect("mem://").await?;

        db.use_ns(namespace).use_db(database).await?;

        Ok(SurrealDbClient { client: db })
    }
}
