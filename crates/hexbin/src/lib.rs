pub mod codec;
pub mod consts;
pub mod datatype;
pub mod errors;
pub mod log;
pub mod table;
pub mod unit;

pub use codec::{
    DecodedBuffer, canonicalize, canonicalize_units, decode, decode_bytes, decode_into,
    decode_wide, decoded_len, is_hex_digit, is_valid_hex, try_canonicalize, try_decode,
};
pub use errors::MalformedHexInput;
pub use table::{nibble, nibble_table};
