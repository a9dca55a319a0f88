pub(crate) mod transformation;
