//! Abstract operations performed against external collaborators.

/// Operation to analyze a value.
#[derive(Clone, Copy, Debug)]
pub struct Analyze<T>(pub T);

/// Operation to search by a value.
#[derive(Clone, Copy, Debug)]
pub struct Search<T>(pub T);

/// Operation to generate a value.
#[derive(Clone, Copy, Debug)]
pub struct Generate<T>(pub T);
