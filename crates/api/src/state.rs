use recordbook_application::ports::RecordStore;
use recordbook_application::use_cases::{
    CreateRecordsUseCase, DeleteRecordsUseCase, GetRecordsUseCase, PersistStoreUseCase,
    ReplaceRecordsUseCase, UpdateRecordUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_records: Arc<GetRecordsUseCase>,
    pub create_records: Arc<CreateRecordsUseCase>,
    pub update_record: Arc<UpdateRecordUseCase>,
    pub replace_records: Arc<ReplaceRecordsUseCase>,
    pub delete_records: Arc<DeleteRecordsUseCase>,
    pub persist: Arc<PersistStoreUseCase>,
    pub api_key: Option<Arc<str>>,
}

impl AppState {
    /// Wires every record use case against one store.
    pub fn new(store: Arc<dyn RecordStore>, api_key: Option<String>) -> Self {
        Self {
            get_records: Arc::new(GetRecordsUseCase::new(store.clone())),
            create_records: Arc::new(CreateRecordsUseCase::new(store.clone())),
            update_record: Arc::new(UpdateRecordUseCase::new(store.clone())),
            replace_records: Arc::new(ReplaceRecordsUseCase::new(store.clone())),
            delete_records: Arc::new(DeleteRecordsUseCase::new(store.clone())),
            persist: Arc::new(PersistStoreUseCase::new(store)),
            api_key: api_key.map(Arc::from),
        }
    }
}
