pub mod adapted;
pub mod datetime;
pub mod scalar;
pub mod temporal;
pub mod user;

pub use adapted::{AdaptedObjectDeserializer, AdaptedObjectSerializer};
pub use datetime::{DateTimeDeserializer, DateTimeSerializer, TemporalCodec};
pub use user::{UserCodecDeserializer, UserCodecSerializer};
