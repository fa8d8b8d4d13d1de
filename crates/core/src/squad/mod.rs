mod codec;
mod types;

pub use codec::{decode_field, decode_line, encode_field, encode_record, FIELD_DELIMITER};
pub use types::{newest_first, SquadRecord};
