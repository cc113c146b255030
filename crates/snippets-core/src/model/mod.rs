pub mod lookup;
pub mod snippet;

pub use lookup::Lookup;
pub use snippet::Snippet;
