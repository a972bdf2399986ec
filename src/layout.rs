pub(crate) mod arrange;
pub(crate) mod axis;
pub(crate) mod place;
pub(crate) mod random;
