pub mod error;
pub mod init_list;
pub mod optional;
pub mod tag;

pub use error::EmptyAccess;
pub use init_list::FromList;
pub use optional::Optional;
pub use tag::{ InPlace, NullOpt, IN_PLACE, NULLOPT };
