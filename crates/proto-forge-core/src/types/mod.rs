mod declaration;
mod enumeration;
mod field;
mod field_number;
mod field_type;
mod message;
mod method;
mod one_of;
mod option_value;
mod proto_file;
mod reservation;
mod scalar_type;
mod service;
mod streaming;

pub use declaration::{Declaration, DeclarationKind};
pub use enumeration::{Enum, EnumVariant};
pub use field::Field;
pub use field_number::FieldNumber;
pub use field_type::{FieldType, MapKey};
pub use message::Message;
pub use method::Method;
pub use one_of::OneOf;
pub use option_value::OptionValue;
pub use proto_file::ProtoFile;
pub use reservation::Reservation;
pub use scalar_type::ScalarType;
pub use service::Service;
pub use streaming::Streaming;
