//! Movie catalog orchestration.
//!
//! Creation runs a linear pipeline: validate → duplicate-check → metadata
//! lookup → score → store file → persist. Cheap checks come first so an
//! invalid or duplicate request never triggers a metadata call or a disk
//! write. If persistence fails after the file write succeeded, the artifact
//! stays on disk; there is no compensating delete across the record/file
//! boundary (known gap, see DESIGN.md).

use std::sync::Arc;

use filmoteka_core::models::{
    CreateMovieRequest, MovieDocument, MovieResponse, MovieSortField, MovieSummary, NewMovieRecord,
};
use filmoteka_core::{apply_merge_patch, ranking, validation, AppError};
use filmoteka_db::MovieStore;
use filmoteka_storage::{FileStore, StorageError};
use filmoteka_tmdb::MetadataLookup;

/// An uploaded movie file, already read out of the request body.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub data: Vec<u8>,
    pub original_name: String,
    pub content_type: String,
}

/// Orchestrates movie creation, listing, merge-patch updates, and downloads.
/// Exclusively owns record mutation; the file store owns the on-disk
/// artifacts, whose lifetime is independent of the records.
#[derive(Clone)]
pub struct MovieCatalog {
    movies: Arc<dyn MovieStore>,
    files: Arc<dyn FileStore>,
    metadata: Arc<dyn MetadataLookup>,
}

fn map_storage_error(err: StorageError) -> AppError {
    match err {
        StorageError::UnsupportedMediaType(content_type) => {
            AppError::UnsupportedMediaKind(content_type)
        }
        StorageError::NotFound(key) => AppError::FileMissing(key),
        other => AppError::StorageIoFailure(other.to_string()),
    }
}

impl MovieCatalog {
    pub fn new(
        movies: Arc<dyn MovieStore>,
        files: Arc<dyn FileStore>,
        metadata: Arc<dyn MetadataLookup>,
    ) -> Self {
        Self {
            movies,
            files,
            metadata,
        }
    }

    /// Create a new catalog entry from an upload.
    pub async fn create(
        &self,
        request: CreateMovieRequest,
        file: UploadedFile,
    ) -> Result<MovieResponse, AppError> {
        validation::validate_new_movie(&request)?;
        validation::validate_video_content_type(&file.content_type)?;

        if self.movies.find_by_title(&request.title).await?.is_some() {
            tracing::debug!(title = %request.title, "Movie with title already exists");
            return Err(AppError::DuplicateTitle(request.title));
        }

        let metadata = self.metadata.lookup(&request.title).await?;

        let size_in_bytes = file.data.len() as i64;
        let ranking = ranking::classify(
            size_in_bytes,
            &metadata.language_code,
            metadata.average_rating,
        );

        let stored = self
            .files
            .store(&file.original_name, &file.content_type, file.data)
            .await
            .map_err(map_storage_error)?;

        let record = self
            .movies
            .insert(NewMovieRecord {
                title: request.title,
                director: request.director,
                production_year: request.production_year,
                ranking,
                size_in_bytes,
                storage_path: stored.key.clone(),
            })
            .await
            .inspect_err(|e| {
                // The artifact stays on disk when persistence fails
                tracing::warn!(
                    error = %e,
                    storage_key = %stored.key,
                    "Movie record not persisted, stored file left on disk"
                );
            })?;

        tracing::info!(
            title = %record.title,
            ranking = record.ranking,
            size_bytes = record.size_in_bytes,
            storage_key = %record.storage_path,
            "Movie created"
        );

        Ok(MovieResponse::from(&record))
    }

    /// All movies, ascending by the requested field.
    pub async fn list(&self, sort: MovieSortField) -> Result<Vec<MovieSummary>, AppError> {
        let records = self.movies.find_all(sort).await?;
        Ok(records.iter().map(MovieSummary::from).collect())
    }

    /// Parameter names accepted by the listing endpoint beyond the default.
    pub fn sort_fields(&self) -> Vec<&'static str> {
        MovieSortField::api_names()
    }

    /// Apply a merge-patch document to the record with the given title.
    ///
    /// Business constraints (title uniqueness, length limits) are not
    /// re-validated here; the patch path deliberately trusts the document.
    pub async fn update(&self, title: &str, patch: &serde_json::Value) -> Result<(), AppError> {
        let record = self
            .movies
            .find_by_title(title)
            .await?
            .ok_or_else(|| AppError::MovieNotFound(title.to_string()))?;

        let document = MovieDocument::from(&record);
        let patched = apply_merge_patch(&document, patch)?;
        let updated = patched.into_record(&record);

        self.movies.update(&updated).await?;

        tracing::info!(title = %title, "Movie updated");
        Ok(())
    }

    /// Fetch the stored file for a title. Fails with `FileMissing` when the
    /// record exists but its artifact is gone from disk.
    pub async fn download(&self, title: &str) -> Result<(String, Vec<u8>), AppError> {
        let record = self
            .movies
            .find_by_title(title)
            .await?
            .ok_or_else(|| AppError::MovieNotFound(title.to_string()))?;

        if !self
            .files
            .exists(&record.storage_path)
            .await
            .map_err(map_storage_error)?
        {
            tracing::error!(title = %title, storage_key = %record.storage_path, "File not found on disk");
            return Err(AppError::FileMissing(record.storage_path));
        }

        let data = self
            .files
            .read(&record.storage_path)
            .await
            .map_err(map_storage_error)?;

        Ok((record.storage_path, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use filmoteka_core::models::{MovieMetadata, MovieRecord};
    use filmoteka_storage::LocalFileStore;
    use serde_json::json;
    use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tempfile::{tempdir, TempDir};

    struct InMemoryMovieStore {
        records: Mutex<Vec<MovieRecord>>,
        next_id: AtomicI64,
        fail_insert: bool,
    }

    impl InMemoryMovieStore {
        fn new() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
                next_id: AtomicI64::new(1),
                fail_insert: false,
            }
        }

        fn failing_insert() -> Self {
            Self {
                fail_insert: true,
                ..Self::new()
            }
        }

        fn snapshot(&self) -> Vec<MovieRecord> {
            self.records.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MovieStore for InMemoryMovieStore {
        async fn find_by_title(&self, title: &str) -> Result<Option<MovieRecord>, AppError> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.title == title)
                .cloned())
        }

        async fn insert(&self, movie: NewMovieRecord) -> Result<MovieRecord, AppError> {
            if self.fail_insert {
                return Err(AppError::Database(sqlx::Error::PoolClosed));
            }
            let now = Utc::now();
            let record = MovieRecord {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                title: movie.title,
                director: movie.director,
                production_year: movie.production_year,
                ranking: movie.ranking,
                size_in_bytes: movie.size_in_bytes,
                storage_path: movie.storage_path,
                created_at: now,
                updated_at: now,
            };
            self.records.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn update(&self, movie: &MovieRecord) -> Result<MovieRecord, AppError> {
            let mut records = self.records.lock().unwrap();
            let slot = records
                .iter_mut()
                .find(|r| r.id == movie.id)
                .ok_or_else(|| AppError::MovieNotFound(movie.title.clone()))?;
            *slot = movie.clone();
            Ok(movie.clone())
        }

        async fn find_all(&self, sort: MovieSortField) -> Result<Vec<MovieRecord>, AppError> {
            let mut records = self.records.lock().unwrap().clone();
            match sort {
                MovieSortField::Id => records.sort_by_key(|r| r.id),
                MovieSortField::Ranking => records.sort_by_key(|r| r.ranking),
                MovieSortField::FilmSize => records.sort_by_key(|r| r.size_in_bytes),
            }
            Ok(records)
        }
    }

    /// Metadata stub that counts invocations, so tests can verify the lookup
    /// is never reached on early failures.
    struct StubMetadata {
        result: Result<MovieMetadata, ()>,
        calls: AtomicUsize,
    }

    impl StubMetadata {
        fn returning(metadata: MovieMetadata) -> Self {
            Self {
                result: Ok(metadata),
                calls: AtomicUsize::new(0),
            }
        }

        fn no_results() -> Self {
            Self::returning(MovieMetadata::neutral())
        }

        fn unavailable() -> Self {
            Self {
                result: Err(()),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MetadataLookup for StubMetadata {
        async fn lookup(&self, _title: &str) -> Result<MovieMetadata, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.result {
                Ok(metadata) => Ok(metadata.clone()),
                Err(()) => Err(AppError::MetadataUnavailable("stubbed outage".to_string())),
            }
        }
    }

    struct Harness {
        catalog: MovieCatalog,
        movies: Arc<InMemoryMovieStore>,
        metadata: Arc<StubMetadata>,
        dir: TempDir,
    }

    async fn harness(movies: InMemoryMovieStore, metadata: StubMetadata) -> Harness {
        let dir = tempdir().unwrap();
        let files = Arc::new(LocalFileStore::new(dir.path()).await.unwrap());
        let movies = Arc::new(movies);
        let metadata = Arc::new(metadata);
        let catalog = MovieCatalog::new(movies.clone(), files, metadata.clone());
        Harness {
            catalog,
            movies,
            metadata,
            dir,
        }
    }

    fn request(title: &str) -> CreateMovieRequest {
        CreateMovieRequest {
            title: title.to_string(),
            director: "D".to_string(),
            production_year: 2020,
        }
    }

    fn mp4(size: usize) -> UploadedFile {
        UploadedFile {
            data: vec![0u8; size],
            original_name: "x.mp4".to_string(),
            content_type: "video/mp4".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_small_file_without_metadata_match() {
        let h = harness(InMemoryMovieStore::new(), StubMetadata::no_results()).await;

        let response = h
            .catalog
            .create(request("X"), mp4(100 * 1024 * 1024))
            .await
            .unwrap();

        assert_eq!(response.title, "X");
        assert_eq!(response.director, "D");
        assert_eq!(response.production_year, 2020);

        let records = h.movies.snapshot();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ranking, 100);
        assert_eq!(records[0].size_in_bytes, 104_857_600);
        assert!(records[0].storage_path.ends_with("-x.mp4"));
    }

    #[tokio::test]
    async fn test_create_large_polish_high_rated_file() {
        let metadata = StubMetadata::returning(MovieMetadata {
            language_code: "pl".to_string(),
            average_rating: 7.6,
        });
        let h = harness(InMemoryMovieStore::new(), metadata).await;

        h.catalog
            .create(request("X"), mp4(250 * 1024 * 1024))
            .await
            .unwrap();

        let records = h.movies.snapshot();
        assert_eq!(records[0].ranking, 300);
        assert_eq!(records[0].size_in_bytes, 262_144_000);
    }

    #[tokio::test]
    async fn test_duplicate_title_rejected_before_metadata() {
        let h = harness(InMemoryMovieStore::new(), StubMetadata::no_results()).await;

        h.catalog.create(request("X"), mp4(10)).await.unwrap();
        assert_eq!(h.metadata.calls(), 1);

        let err = h.catalog.create(request("X"), mp4(10)).await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateTitle(_)));
        // Duplicate check runs before the metadata lookup
        assert_eq!(h.metadata.calls(), 1);
        // First record unaffected
        assert_eq!(h.movies.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_unsupported_content_type_skips_lookup_and_disk() {
        let h = harness(InMemoryMovieStore::new(), StubMetadata::no_results()).await;

        let file = UploadedFile {
            data: b"plain".to_vec(),
            original_name: "notes.txt".to_string(),
            content_type: "text/plain".to_string(),
        };
        let err = h.catalog.create(request("X"), file).await.unwrap_err();

        assert!(matches!(err, AppError::UnsupportedMediaKind(_)));
        assert_eq!(h.metadata.calls(), 0);
        assert_eq!(std::fs::read_dir(h.dir.path()).unwrap().count(), 0);
        assert!(h.movies.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_validation_failure_comes_first() {
        let h = harness(InMemoryMovieStore::new(), StubMetadata::no_results()).await;

        let err = h.catalog.create(request("  "), mp4(10)).await.unwrap_err();

        match err {
            AppError::ValidationFailed(msg) => assert!(msg.contains("Title cannot be blank")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(h.metadata.calls(), 0);
        assert_eq!(std::fs::read_dir(h.dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_metadata_outage_propagates() {
        let h = harness(InMemoryMovieStore::new(), StubMetadata::unavailable()).await;

        let err = h.catalog.create(request("X"), mp4(10)).await.unwrap_err();

        assert!(matches!(err, AppError::MetadataUnavailable(_)));
        // Lookup failed before the file write
        assert_eq!(std::fs::read_dir(h.dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_persist_failure_leaves_file_on_disk() {
        let h = harness(
            InMemoryMovieStore::failing_insert(),
            StubMetadata::no_results(),
        )
        .await;

        let err = h.catalog.create(request("X"), mp4(10)).await.unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
        // Orphaned artifact is deliberately not cleaned up
        assert_eq!(std::fs::read_dir(h.dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_list_sorted_by_ranking() {
        let h = harness(InMemoryMovieStore::new(), StubMetadata::no_results()).await;
        for (i, ranking) in [50, 150, 300, 200].into_iter().enumerate() {
            h.movies
                .insert(NewMovieRecord {
                    title: format!("movie-{i}"),
                    director: "D".to_string(),
                    production_year: 2000,
                    ranking,
                    size_in_bytes: 10,
                    storage_path: "k".to_string(),
                })
                .await
                .unwrap();
        }

        let listed = h.catalog.list(MovieSortField::Ranking).await.unwrap();
        let rankings: Vec<i32> = listed.iter().map(|m| m.ranking).collect();
        assert_eq!(rankings, vec![50, 150, 200, 300]);
    }

    #[tokio::test]
    async fn test_update_merge_patch() {
        let h = harness(InMemoryMovieStore::new(), StubMetadata::no_results()).await;
        h.catalog.create(request("X"), mp4(10)).await.unwrap();

        h.catalog
            .update("X", &json!({"director": "New Director"}))
            .await
            .unwrap();

        let records = h.movies.snapshot();
        assert_eq!(records[0].director, "New Director");
        assert_eq!(records[0].title, "X");
        assert_eq!(records[0].production_year, 2020);
    }

    #[tokio::test]
    async fn test_update_missing_movie() {
        let h = harness(InMemoryMovieStore::new(), StubMetadata::no_results()).await;

        let err = h
            .catalog
            .update("Nope", &json!({"director": "D"}))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MovieNotFound(_)));
    }

    #[tokio::test]
    async fn test_update_invalid_patch() {
        let h = harness(InMemoryMovieStore::new(), StubMetadata::no_results()).await;
        h.catalog.create(request("X"), mp4(10)).await.unwrap();

        let err = h.catalog.update("X", &json!([1, 2])).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidPatch(_)));

        // Record untouched
        assert_eq!(h.movies.snapshot()[0].director, "D");
    }

    #[tokio::test]
    async fn test_download_round_trip() {
        let h = harness(InMemoryMovieStore::new(), StubMetadata::no_results()).await;
        h.catalog.create(request("X"), mp4(16)).await.unwrap();

        let (filename, data) = h.catalog.download("X").await.unwrap();
        assert!(filename.ends_with("-x.mp4"));
        assert_eq!(data.len(), 16);
    }

    #[tokio::test]
    async fn test_download_missing_artifact() {
        let h = harness(InMemoryMovieStore::new(), StubMetadata::no_results()).await;
        h.catalog.create(request("X"), mp4(10)).await.unwrap();

        // Drift: record exists but its artifact is gone
        let path = h.movies.snapshot()[0].storage_path.clone();
        std::fs::remove_file(h.dir.path().join(&path)).unwrap();

        let err = h.catalog.download("X").await.unwrap_err();
        assert!(matches!(err, AppError::FileMissing(_)));
    }

    #[tokio::test]
    async fn test_download_unknown_title() {
        let h = harness(InMemoryMovieStore::new(), StubMetadata::no_results()).await;

        let err = h.catalog.download("Nope").await.unwrap_err();
        assert!(matches!(err, AppError::MovieNotFound(_)));
    }
}
