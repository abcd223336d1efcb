//! Persisted travel requests.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{OptionalExtension, Row, params};

use crate::domain::{Category, DomainError, RequestId, StoredRequest, TravelRequest};

use super::{SqliteStore, StoreError, schema};

impl SqliteStore {
    /// Store a new request and return its identifier.
    ///
    /// The result column starts empty.
    pub fn create_request(&self, request: &TravelRequest) -> Result<RequestId, StoreError> {
        self.create_request_at(request, Utc::now())
    }

    pub(crate) fn create_request_at(
        &self,
        request: &TravelRequest,
        created_at: DateTime<Utc>,
    ) -> Result<RequestId, StoreError> {
        let budget = i64::try_from(request.budget).unwrap_or(i64::MAX);
        self.conn.execute(
            schema::INSERT_REQUEST,
            params![
                request.username,
                request.start_city,
                budget,
                request.days,
                request.preference.as_str(),
                created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            ],
        )?;
        Ok(RequestId(self.conn.last_insert_rowid()))
    }

    /// Fetch a request by id.
    pub fn request(&self, id: RequestId) -> Result<Option<StoredRequest>, StoreError> {
        let raw = self
            .conn
            .query_row(schema::SELECT_REQUEST, params![id.0], RequestRow::read)
            .optional()?;
        raw.map(StoredRequest::try_from).transpose()
    }

    /// Every stored request, oldest first.
    pub fn list_requests(&self) -> Result<Vec<StoredRequest>, StoreError> {
        let mut statement = self.conn.prepare(schema::SELECT_ALL_REQUESTS)?;
        let rows = statement.query_map([], RequestRow::read)?;
        rows.map(|row| StoredRequest::try_from(row?)).collect()
    }

    /// Delete a request. Returns false if it did not exist.
    pub fn delete_request(&self, id: RequestId) -> Result<bool, StoreError> {
        let changed = self.conn.execute(schema::DELETE_REQUEST, params![id.0])?;
        Ok(changed > 0)
    }

    /// Overwrite the result text of a request.
    pub fn set_result(&self, id: RequestId, result: &str) -> Result<(), StoreError> {
        let changed = self
            .conn
            .execute(schema::UPDATE_REQUEST_RESULT, params![result, id.0])?;
        if changed == 0 {
            return Err(StoreError::RequestNotFound(id));
        }
        Ok(())
    }
}

/// Unvalidated `requests` row.
struct RequestRow {
    id: i64,
    username: String,
    start_city: String,
    budget: i64,
    days: i64,
    preference: String,
    result: String,
    created_at: String,
}

impl RequestRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            username: row.get(1)?,
            start_city: row.get(2)?,
            budget: row.get(3)?,
            days: row.get(4)?,
            preference: row.get(5)?,
            result: row.get(6)?,
            created_at: row.get(7)?,
        })
    }
}

impl TryFrom<RequestRow> for StoredRequest {
    type Error = StoreError;

    fn try_from(row: RequestRow) -> Result<Self, Self::Error> {
        let id = RequestId(row.id);
        let invalid = |source: DomainError| StoreError::InvalidRow {
            table: "requests",
            key: id.to_string(),
            source,
        };

        let preference = Category::parse(&row.preference).map_err(|e| invalid(e.into()))?;
        let request = TravelRequest::new(
            row.username,
            row.start_city,
            row.budget,
            row.days,
            preference,
        )
        .map_err(invalid)?
        .with_id(id);

        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|_| StoreError::InvalidTimestamp {
                id,
                value: row.created_at.clone(),
            })?
            .with_timezone(&Utc);

        let result = Some(row.result).filter(|r| !r.is_empty());

        Ok(StoredRequest {
            request,
            result,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request(username: &str, start: &str) -> TravelRequest {
        TravelRequest::new(username, start, 800, 3, Category::Beach).unwrap()
    }

    #[test]
    fn create_and_fetch() {
        let store = SqliteStore::open_in_memory().unwrap();
        let created_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let id = store
            .create_request_at(&request("ana", "Paris"), created_at)
            .unwrap();

        let stored = store.request(id).unwrap().unwrap();
        assert_eq!(stored.id(), Some(id));
        assert_eq!(stored.request.username, "ana");
        assert_eq!(stored.request.start_city, "Paris");
        assert_eq!(stored.request.budget, 800);
        assert_eq!(stored.request.days, 3);
        assert_eq!(stored.request.preference, Category::Beach);
        assert_eq!(stored.result, None);
        assert_eq!(stored.created_at, created_at);
    }

    #[test]
    fn missing_request() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.request(RequestId(99)).unwrap(), None);
    }

    #[test]
    fn list_in_creation_order() {
        let store = SqliteStore::open_in_memory().unwrap();
        let first = store.create_request(&request("ana", "Paris")).unwrap();
        let second = store.create_request(&request("ben", "Rome")).unwrap();

        let all = store.list_requests().unwrap();
        let ids: Vec<_> = all.iter().filter_map(StoredRequest::id).collect();
        assert_eq!(ids, vec![first, second]);
        assert_eq!(all[1].request.username, "ben");
    }

    #[test]
    fn set_result_updates_row() {
        let store = SqliteStore::open_in_memory().unwrap();
        let id = store.create_request(&request("ana", "Paris")).unwrap();

        store.set_result(id, "Paris → Rome | $170").unwrap();
        let stored = store.request(id).unwrap().unwrap();
        assert_eq!(stored.result.as_deref(), Some("Paris → Rome | $170"));
    }

    #[test]
    fn set_result_on_missing_request() {
        let store = SqliteStore::open_in_memory().unwrap();
        let result = store.set_result(RequestId(5), "x");
        assert!(matches!(result, Err(StoreError::RequestNotFound(RequestId(5)))));
    }

    #[test]
    fn delete_request() {
        let store = SqliteStore::open_in_memory().unwrap();
        let id = store.create_request(&request("ana", "Paris")).unwrap();

        assert!(store.delete_request(id).unwrap());
        assert!(!store.delete_request(id).unwrap());
        assert!(store.request(id).unwrap().is_none());
    }

    #[test]
    fn invalid_stored_budget_rejected() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .conn
            .execute(
                "INSERT INTO requests (username, start_city, budget, days, preference, created_at)
                 VALUES ('ana', 'Paris', 0, 2, 'Beach', '2024-01-01T00:00:00Z')",
                [],
            )
            .unwrap();
        assert!(matches!(
            store.list_requests(),
            Err(StoreError::InvalidRow {
                table: "requests",
                source: DomainError::NonPositiveBudget(0),
                ..
            })
        ));
    }

    #[test]
    fn invalid_timestamp_rejected() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .conn
            .execute(
                "INSERT INTO requests (username, start_city, budget, days, preference, created_at)
                 VALUES ('ana', 'Paris', 100, 2, 'Beach', 'yesterday')",
                [],
            )
            .unwrap();
        assert!(matches!(
            store.request(RequestId(1)),
            Err(StoreError::InvalidTimestamp { .. })
        ));
    }
}
