/*!
A positional byte-stream runtime for declarative binary format parsers.

`weft` is the reading core that generated or hand-written parsers for
container formats build on. It exposes a cursor over an immutable
in-memory buffer with a full catalog of primitive readers: integers of
1, 2, 4 and 8 bytes in both byte orders, IEEE 754 floats, raw byte runs
(fixed-length, rest-of-stream or terminator-delimited), and unaligned
bit-packed integers of up to 32 bits in either bit order. Around the
stream sit the byte-level utilities such format descriptions lean on:
padding/terminator trimming, string decoding under named encodings,
xor and rotation transforms, zlib inflation, and lexicographic
comparison.

Parsers attach through the [`Parse`] trait: every node of a parse tree
pulls its fields from the shared stream and hands its children links to
itself and to the tree's root.

# Example
```rust
use weft::Stream;

let data = [0x4F, 0x67, 0x67, 0x53, 0x00, 0x01, 0x02];
let mut stream = Stream::new(&data);

assert_eq!(stream.read_bytes(4).unwrap(), b"OggS");
assert_eq!(stream.read_u8().unwrap(), 0x00);
assert_eq!(stream.read_u16_be().unwrap(), 0x0102);
assert!(stream.is_eof());
```

# Scope
The runtime holds the entire payload in memory; there is no streaming
input, no writing, and no format-specific logic. Reads past the end of
the buffer fail with an error carrying the requested and available byte
counts; all failures propagate synchronously to the caller.

# Safety
This crate forbids unsafe code via a crate-level attribute.
*/

#![forbid(unsafe_code)]

pub mod buffer;
pub mod bytes;
pub mod encoding;
pub mod error;
pub mod math;
pub mod parse;
pub mod process;
pub mod stream;

pub use buffer::{Buffer, BufferData};
pub use error::{Error, Result};
pub use parse::{Parse, parse_root};
pub use stream::Stream;

/// Whether the host stores multi-byte integers least significant byte
/// first.
///
/// Reader byte order is always fixed by the reader chosen and never
/// depends on the host; this constant exists for format descriptions
/// that expose the host order as a value.
pub const HOST_LITTLE_ENDIAN: bool = cfg!(target_endian = "little");
