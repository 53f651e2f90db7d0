//! Arena allocator for node text.
//!
//! Uses `bumpalo` for bump allocation of everything a node borrows: simple
//! names, literal strings, labels, snippets and modifier lists. Node records
//! themselves live in the [`Tree`](crate::Tree) and refer to this text with
//! the arena lifetime `'a`.

use bumpalo::Bump;

/// Arena allocator backing a [`Tree`](crate::Tree).
///
/// All text for a single tree is allocated in the same arena and freed
/// together when the arena is dropped, after every tree borrowing it.
///
/// # Example
///
/// ```rust
/// use sprig_ast::AstArena;
///
/// let arena = AstArena::new();
///
/// let name = arena.alloc_str("Foo");
/// assert_eq!(name, "Foo");
/// ```
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    /// Creates a new arena allocator.
    #[inline]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Allocates a string slice in the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Allocates a slice in the arena by copying from the input slice.
    #[inline]
    pub fn alloc_slice_copy<T: Copy>(&self, slice: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(slice)
    }
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}
