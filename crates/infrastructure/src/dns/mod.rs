pub mod codec;
pub mod listener;
pub mod resolver;

pub use codec::{MessageCodec, RecordConverter, RecordTypeMapper};
pub use listener::{DnsListener, MAX_DATAGRAM_SIZE};
pub use resolver::QueryResolver;
