pub(crate) mod builder;
pub(crate) mod director;
pub(crate) mod fingerprint;
pub(crate) mod step;
