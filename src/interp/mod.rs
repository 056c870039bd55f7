pub(crate) mod interpolator;
pub(crate) mod passes;
pub(crate) mod warning;
