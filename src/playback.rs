pub(crate) mod player;
pub(crate) mod sampler;
pub(crate) mod sink;
