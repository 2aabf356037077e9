use recordbook_application::ports::{RecordBook, RecordStore};
use recordbook_application::use_cases::PersistStoreUseCase;
use recordbook_domain::Config;
use recordbook_infrastructure::dns::QueryResolver;
use recordbook_infrastructure::store::{InMemoryRecordStore, StoreFiles};
use std::sync::Arc;

/// One store, shared by the query path (through the narrow `RecordBook`
/// handle) and the admin surface.
pub struct Services {
    pub store: Arc<InMemoryRecordStore>,
    pub records: Arc<dyn RecordStore>,
    pub persist: Arc<PersistStoreUseCase>,
    pub resolver: Arc<QueryResolver>,
}

impl Services {
    pub fn new(config: &Config) -> Self {
        let store = Arc::new(InMemoryRecordStore::new(StoreFiles::in_dir(
            &config.store.data_dir,
        )));
        let records: Arc<dyn RecordStore> = store.clone();
        let book: Arc<dyn RecordBook> = store.clone();

        Self {
            persist: Arc::new(PersistStoreUseCase::new(records.clone())),
            resolver: Arc::new(QueryResolver::new(book)),
            records,
            store,
        }
    }
}
