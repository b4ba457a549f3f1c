//! The contract between the stream runtime and parser nodes.

use crate::error::Result;
use crate::stream::Stream;

/// A node of a parse tree.
///
/// Implementors pull their fields from the stream inside [`Parse::read`],
/// which receives links to the node's parent and to the root of the tree.
/// A `root` of `None` means the node itself is the root; such a node
/// passes itself as the root when it reads its children. When `read`
/// returns, the stream sits at the end of the node's consumed bytes, so
/// a parent resumes reading right after its child.
///
/// Nodes of one parse share a single stream by exclusive borrow along
/// the construction-order traversal; neither link is mutated during a
/// read. Child sequences are ordinary `Vec` fields on implementors.
pub trait Parse<'a>: Default {
    /// The root node type of the parse tree.
    type Root;
    /// The parent node type; `()` for nodes without one.
    type Parent;

    /// Pull the node's fields from the stream.
    fn read(
        &mut self,
        stream: &mut Stream<'a>,
        parent: Option<&Self::Parent>,
        root: Option<&Self::Root>,
    ) -> Result<()>;
}

/// Parse a root node from the stream.
///
/// Constructs the node and immediately invokes [`Parse::read`] on it
/// with no parent and no root, which makes the node its own root.
pub fn parse_root<'a, T: Parse<'a>>(stream: &mut Stream<'a>) -> Result<T> {
    let mut node = T::default();
    node.read(stream, None, None)?;

    Ok(node)
}
